use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "hotel_id")]
    pub hotel_id: i64,
    pub suite: String,
    pub rate: i32,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hotels::Entity",
        from = "Column::HotelId",
        to = "super::hotels::Column::Id",
        on_delete = "Cascade"
    )]
    Hotel,
    #[sea_orm(has_many = "super::guest_rooms::Entity")]
    GuestRooms,
}

impl Related<super::hotels::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hotel.def()
    }
}

impl Related<super::guest_rooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuestRooms.def()
    }
}

impl Related<super::guests::Entity> for Entity {
    fn to() -> RelationDef {
        super::guest_rooms::Relation::Guest.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::guest_rooms::Relation::Room.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
