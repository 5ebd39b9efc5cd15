//! DTOs for hotels_sea adapter.

/// DTO for creating a hotel.
#[derive(Debug, Clone)]
pub struct HotelCreate {
    pub name: String,
    pub location: String,
}

impl HotelCreate {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}
