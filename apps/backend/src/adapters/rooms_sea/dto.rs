//! DTOs for rooms_sea adapter.

/// DTO for creating a room in a hotel.
#[derive(Debug, Clone)]
pub struct RoomCreate {
    pub hotel_id: i64,
    pub suite: String,
    pub rate: i32,
}

impl RoomCreate {
    pub fn new(hotel_id: i64, suite: impl Into<String>, rate: i32) -> Self {
        Self {
            hotel_id,
            suite: suite.into(),
            rate,
        }
    }
}
