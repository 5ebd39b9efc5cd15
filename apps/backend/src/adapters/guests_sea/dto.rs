//! DTOs for guests_sea adapter.

/// DTO for creating a guest.
#[derive(Debug, Clone)]
pub struct GuestCreate {
    pub name: String,
    pub nights: i32,
}

impl GuestCreate {
    pub fn new(name: impl Into<String>, nights: i32) -> Self {
        Self {
            name: name.into(),
            nights,
        }
    }
}
