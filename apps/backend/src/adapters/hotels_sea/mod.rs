//! SeaORM adapter for the hotels table.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set};

use crate::entities::hotels;

pub mod dto;

pub use dto::HotelCreate;

pub async fn create_hotel<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: HotelCreate,
) -> Result<hotels::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let hotel = hotels::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        location: Set(dto.location),
        created_at: Set(now),
        updated_at: Set(now),
    };
    hotel.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    hotel_id: i64,
) -> Result<Option<hotels::Model>, sea_orm::DbErr> {
    hotels::Entity::find_by_id(hotel_id).one(conn).await
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<hotels::Model>, sea_orm::DbErr> {
    hotels::Entity::find()
        .filter(hotels::Column::Name.eq(name))
        .one(conn)
        .await
}
