//! SeaORM adapter for the rooms table.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::{hotels, rooms};

pub mod dto;

pub use dto::RoomCreate;

pub async fn create_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: RoomCreate,
) -> Result<rooms::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let room = rooms::ActiveModel {
        id: NotSet,
        hotel_id: Set(dto.hotel_id),
        suite: Set(dto.suite),
        rate: Set(dto.rate),
        created_at: Set(now),
        updated_at: Set(now),
    };
    room.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Option<rooms::Model>, sea_orm::DbErr> {
    rooms::Entity::find_by_id(room_id).one(conn).await
}

/// Room together with its owning hotel.
pub async fn find_with_hotel<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Option<(rooms::Model, Option<hotels::Model>)>, sea_orm::DbErr> {
    rooms::Entity::find_by_id(room_id)
        .find_also_related(hotels::Entity)
        .one(conn)
        .await
}

pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<bool, sea_orm::DbErr> {
    let count = rooms::Entity::find()
        .filter(rooms::Column::Id.eq(room_id))
        .count(conn)
        .await?;
    Ok(count > 0)
}

pub async fn find_all_by_hotel<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    hotel_id: i64,
) -> Result<Vec<rooms::Model>, sea_orm::DbErr> {
    rooms::Entity::find()
        .filter(rooms::Column::HotelId.eq(hotel_id))
        .order_by_asc(rooms::Column::Id)
        .all(conn)
        .await
}
