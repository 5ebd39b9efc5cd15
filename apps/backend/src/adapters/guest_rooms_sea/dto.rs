//! DTOs for guest_rooms_sea adapter.

/// DTO for linking a guest to a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuestRoomLink {
    pub guest_id: i64,
    pub room_id: i64,
}

impl GuestRoomLink {
    pub fn new(guest_id: i64, room_id: i64) -> Self {
        Self { guest_id, room_id }
    }
}
