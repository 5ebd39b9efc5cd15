//! Hotel repository functions for domain layer.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::{hotels_sea as hotels_adapter, rooms_sea as rooms_adapter};
use crate::entities::hotels;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::rooms::Room;

/// Hotel domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub location: String,
}

impl From<hotels::Model> for Hotel {
    fn from(model: hotels::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            location: model.location,
        }
    }
}

pub async fn create_hotel<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    location: &str,
) -> Result<Hotel, DomainError> {
    let dto = hotels_adapter::HotelCreate::new(name, location);
    let hotel = hotels_adapter::create_hotel(conn, dto).await?;
    Ok(Hotel::from(hotel))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    hotel_id: i64,
) -> Result<Option<Hotel>, DomainError> {
    let hotel = hotels_adapter::find_by_id(conn, hotel_id).await?;
    Ok(hotel.map(Hotel::from))
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<Hotel>, DomainError> {
    let hotel = hotels_adapter::find_by_name(conn, name).await?;
    Ok(hotel.map(Hotel::from))
}

/// Like `find_by_id`, but a missing hotel is `NotFound(Hotel)`.
pub async fn require_hotel<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    hotel_id: i64,
) -> Result<Hotel, DomainError> {
    find_by_id(conn, hotel_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Hotel, format!("Hotel {hotel_id} not found"))
    })
}

/// Rooms owned by the hotel, ordered by id. Fails if the hotel does not exist.
pub async fn rooms_for_hotel<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    hotel_id: i64,
) -> Result<Vec<Room>, DomainError> {
    require_hotel(conn, hotel_id).await?;
    let rooms = rooms_adapter::find_all_by_hotel(conn, hotel_id).await?;
    Ok(rooms.into_iter().map(Room::from).collect())
}
