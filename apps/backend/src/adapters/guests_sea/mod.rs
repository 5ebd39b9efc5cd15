//! SeaORM adapter for the guests table.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, Set,
};

use crate::entities::guests;

pub mod dto;

pub use dto::GuestCreate;

pub async fn create_guest<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GuestCreate,
) -> Result<guests::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let guest = guests::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        nights: Set(dto.nights),
        created_at: Set(now),
        updated_at: Set(now),
    };
    guest.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    guest_id: i64,
) -> Result<Option<guests::Model>, sea_orm::DbErr> {
    guests::Entity::find_by_id(guest_id).one(conn).await
}

pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    guest_id: i64,
) -> Result<bool, sea_orm::DbErr> {
    let count = guests::Entity::find()
        .filter(guests::Column::Id.eq(guest_id))
        .count(conn)
        .await?;
    Ok(count > 0)
}
