//! Hotel read services.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::errors::domain::DomainError;
use crate::repos::hotels::{self, Hotel};
use crate::repos::rooms::Room;

/// A hotel and the rooms it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotelRooms {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}

pub struct HotelService;

impl HotelService {
    pub fn new() -> Self {
        Self
    }

    pub async fn hotel_rooms<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        hotel_id: i64,
    ) -> Result<HotelRooms, DomainError> {
        let hotel = hotels::require_hotel(conn, hotel_id).await?;
        let rooms = hotels::rooms_for_hotel(conn, hotel_id).await?;
        Ok(HotelRooms { hotel, rooms })
    }
}

impl Default for HotelService {
    fn default() -> Self {
        Self::new()
    }
}
