//! Room repository functions for domain layer.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::{guest_rooms_sea as links_adapter, rooms_sea as rooms_adapter};
use crate::entities::rooms;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::guests::{self, Guest};
use crate::repos::hotels;

/// Room domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    pub id: i64,
    pub hotel_id: i64,
    pub suite: String,
    pub rate: i32,
}

impl From<rooms::Model> for Room {
    fn from(model: rooms::Model) -> Self {
        Self {
            id: model.id,
            hotel_id: model.hotel_id,
            suite: model.suite,
            rate: model.rate,
        }
    }
}

/// Create a room in an existing hotel. A negative rate is rejected.
pub async fn create_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    hotel_id: i64,
    suite: &str,
    rate: i32,
) -> Result<Room, DomainError> {
    if rate < 0 {
        return Err(DomainError::validation_other("Room rate must not be negative"));
    }
    hotels::require_hotel(conn, hotel_id).await?;

    let dto = rooms_adapter::RoomCreate::new(hotel_id, suite, rate);
    let room = rooms_adapter::create_room(conn, dto).await?;
    Ok(Room::from(room))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Option<Room>, DomainError> {
    let room = rooms_adapter::find_by_id(conn, room_id).await?;
    Ok(room.map(Room::from))
}

pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<bool, DomainError> {
    Ok(rooms_adapter::exists(conn, room_id).await?)
}

/// Guests linked to the room, ordered by guest id.
pub async fn guests_for_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Vec<Guest>, DomainError> {
    if !exists(conn, room_id).await? {
        return Err(DomainError::not_found(
            NotFoundKind::Room,
            format!("Room {room_id} not found"),
        ));
    }
    let guests = links_adapter::guests_for_room(conn, room_id).await?;
    Ok(guests.into_iter().map(Guest::from).collect())
}

/// Link a guest to this room. Same association as `guests::add_room`.
pub async fn add_guest<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    guest_id: i64,
) -> Result<bool, DomainError> {
    guests::add_room(conn, guest_id, room_id).await
}
