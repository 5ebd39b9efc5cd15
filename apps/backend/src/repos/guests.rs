//! Guest repository functions for domain layer.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use tracing::debug;

use crate::adapters::{
    guest_rooms_sea as links_adapter, guests_sea as guests_adapter, rooms_sea as rooms_adapter,
};
use crate::entities::guests;
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::repos::rooms::Room;

/// Guest domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guest {
    pub id: i64,
    pub name: String,
    pub nights: i32,
}

impl From<guests::Model> for Guest {
    fn from(model: guests::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            nights: model.nights,
        }
    }
}

/// A room in a guest's history along with the name of the hotel owning it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomStay {
    pub room: Room,
    pub hotel_name: String,
}

pub async fn create_guest<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    nights: i32,
) -> Result<Guest, DomainError> {
    if nights < 0 {
        return Err(DomainError::validation_other("Nights must not be negative"));
    }
    let dto = guests_adapter::GuestCreate::new(name, nights);
    let guest = guests_adapter::create_guest(conn, dto).await?;
    Ok(Guest::from(guest))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    guest_id: i64,
) -> Result<Option<Guest>, DomainError> {
    let guest = guests_adapter::find_by_id(conn, guest_id).await?;
    Ok(guest.map(Guest::from))
}

/// Like `find_by_id`, but a missing guest is `NotFound(Guest)`.
pub async fn require_guest<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    guest_id: i64,
) -> Result<Guest, DomainError> {
    find_by_id(conn, guest_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Guest, format!("Guest {guest_id} not found"))
    })
}

pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    guest_id: i64,
) -> Result<bool, DomainError> {
    Ok(guests_adapter::exists(conn, guest_id).await?)
}

/// Rooms the guest is linked to, ordered by room id, each with its hotel name.
pub async fn rooms_for_guest<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    guest_id: i64,
) -> Result<Vec<RoomStay>, DomainError> {
    let rows = links_adapter::rooms_with_hotel_for_guest(conn, guest_id).await?;

    rows.into_iter()
        .map(|(room, hotel)| {
            // rooms.hotel_id is NOT NULL with a cascading FK
            let hotel = hotel.ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("Room {} has no owning hotel", room.id),
                )
            })?;
            Ok(RoomStay {
                room: Room::from(room),
                hotel_name: hotel.name,
            })
        })
        .collect()
}

/// Link a room to the guest.
///
/// Both records must exist. Returns `true` if a new link was written and
/// `false` if the pair was already linked; either way exactly one link
/// exists afterwards.
pub async fn add_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    guest_id: i64,
    room_id: i64,
) -> Result<bool, DomainError> {
    if !exists(conn, guest_id).await? {
        return Err(DomainError::not_found(
            NotFoundKind::Guest,
            format!("Guest {guest_id} not found"),
        ));
    }
    if !rooms_adapter::exists(conn, room_id).await? {
        return Err(DomainError::not_found(
            NotFoundKind::Room,
            format!("Room {room_id} not found"),
        ));
    }

    let inserted =
        links_adapter::link(conn, links_adapter::GuestRoomLink::new(guest_id, room_id)).await?;
    debug!(guest_id, room_id, inserted, "guest room link");
    Ok(inserted)
}

pub async fn has_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    guest_id: i64,
    room_id: i64,
) -> Result<bool, DomainError> {
    let linked =
        links_adapter::is_linked(conn, links_adapter::GuestRoomLink::new(guest_id, room_id))
            .await?;
    Ok(linked)
}
