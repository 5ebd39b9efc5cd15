//! SeaORM adapter for the guest_rooms join table.

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Set,
};

use crate::entities::{guest_rooms, guests, hotels, rooms};

pub mod dto;

pub use dto::GuestRoomLink;

/// Insert the link unless it already exists.
///
/// Returns `true` when a row was written, `false` when the pair was already
/// linked. The composite primary key settles concurrent duplicate inserts.
pub async fn link<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GuestRoomLink,
) -> Result<bool, sea_orm::DbErr> {
    let row = guest_rooms::ActiveModel {
        guest_id: Set(dto.guest_id),
        room_id: Set(dto.room_id),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    let inserted = guest_rooms::Entity::insert(row)
        .on_conflict(
            OnConflict::columns([guest_rooms::Column::GuestId, guest_rooms::Column::RoomId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    Ok(inserted > 0)
}

pub async fn is_linked<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GuestRoomLink,
) -> Result<bool, sea_orm::DbErr> {
    let found = guest_rooms::Entity::find_by_id((dto.guest_id, dto.room_id))
        .one(conn)
        .await?;
    Ok(found.is_some())
}

/// Rooms linked to a guest, each with its owning hotel, ordered by room id.
pub async fn rooms_with_hotel_for_guest<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    guest_id: i64,
) -> Result<Vec<(rooms::Model, Option<hotels::Model>)>, sea_orm::DbErr> {
    rooms::Entity::find()
        .join(JoinType::InnerJoin, rooms::Relation::GuestRooms.def())
        .filter(guest_rooms::Column::GuestId.eq(guest_id))
        .find_also_related(hotels::Entity)
        .order_by_asc(rooms::Column::Id)
        .all(conn)
        .await
}

/// Guests linked to a room, ordered by guest id.
pub async fn guests_for_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Vec<guests::Model>, sea_orm::DbErr> {
    guests::Entity::find()
        .join(JoinType::InnerJoin, guests::Relation::GuestRooms.def())
        .filter(guest_rooms::Column::RoomId.eq(room_id))
        .order_by_asc(guests::Column::Id)
        .all(conn)
        .await
}
