//! Sample data: the Vail Inn with three rooms and three guests.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::errors::domain::DomainError;
use crate::repos::guests::{self, Guest};
use crate::repos::hotels::{self, Hotel};
use crate::repos::rooms::{self, Room};

pub const VAIL_INN: &str = "Vail Inn";

/// Ids of the seeded records.
#[derive(Debug, Clone)]
pub struct VailInn {
    pub hotel: Hotel,
    pub presidential: Room,
    pub executive: Room,
    pub basic: Room,
    pub ethan: Guest,
    pub zahava: Guest,
    pub ezzy: Guest,
}

/// Insert the Vail Inn data set.
///
/// Ethan stayed in all three rooms, Zahava only in Presidential and Ezzy
/// only in Executive.
pub async fn seed_vail_inn<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<VailInn, DomainError> {
    let hotel = hotels::create_hotel(conn, VAIL_INN, "Vail").await?;

    let presidential = rooms::create_room(conn, hotel.id, "Presidential", 125).await?;
    let executive = rooms::create_room(conn, hotel.id, "Executive", 130).await?;
    let basic = rooms::create_room(conn, hotel.id, "Basic", 100).await?;

    let ethan = guests::create_guest(conn, "Ethan", 3).await?;
    let zahava = guests::create_guest(conn, "Zahava", 3).await?;
    let ezzy = guests::create_guest(conn, "Ezzy", 1).await?;

    for room in [&presidential, &executive, &basic] {
        guests::add_room(conn, ethan.id, room.id).await?;
    }
    guests::add_room(conn, zahava.id, presidential.id).await?;
    rooms::add_guest(conn, executive.id, ezzy.id).await?;

    info!(hotel_id = hotel.id, "seeded {VAIL_INN}");

    Ok(VailInn {
        hotel,
        presidential,
        executive,
        basic,
        ethan,
        zahava,
        ezzy,
    })
}

/// Seed unless a hotel named Vail Inn already exists. Returns whether
/// anything was written.
pub async fn seed_if_empty<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<bool, DomainError> {
    if hotels::find_by_name(conn, VAIL_INN).await?.is_some() {
        info!("{VAIL_INN} already present; skipping seed");
        return Ok(false);
    }
    seed_vail_inn(conn).await?;
    Ok(true)
}
