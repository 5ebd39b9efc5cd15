use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Hotels {
    Table,
    Id,
    Name,
    Location,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Rooms {
    Table,
    Id,
    HotelId,
    Suite,
    Rate,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Guests {
    Table,
    Id,
    Name,
    Nights,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum GuestRooms {
    Table,
    GuestId,
    RoomId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // hotels
        manager
            .create_table(
                Table::create()
                    .table(Hotels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hotels::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Hotels::Name).string().not_null())
                    .col(ColumnDef::new(Hotels::Location).string().not_null())
                    .col(
                        ColumnDef::new(Hotels::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Hotels::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // rooms
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rooms::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Rooms::HotelId).big_integer().not_null())
                    .col(ColumnDef::new(Rooms::Suite).string().not_null())
                    .col(ColumnDef::new(Rooms::Rate).integer().not_null())
                    .col(
                        ColumnDef::new(Rooms::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Rooms::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rooms_hotel_id")
                            .from(Rooms::Table, Rooms::HotelId)
                            .to(Hotels::Table, Hotels::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .check(Expr::col(Rooms::Rate).gte(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_rooms_hotel_id")
                    .table(Rooms::Table)
                    .col(Rooms::HotelId)
                    .to_owned(),
            )
            .await?;

        // guests
        manager
            .create_table(
                Table::create()
                    .table(Guests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Guests::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Guests::Name).string().not_null())
                    .col(
                        ColumnDef::new(Guests::Nights)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Guests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Guests::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .check(Expr::col(Guests::Nights).gte(0))
                    .to_owned(),
            )
            .await?;

        // guest_rooms: pure join table, one row per (guest, room) pair
        manager
            .create_table(
                Table::create()
                    .table(GuestRooms::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(GuestRooms::GuestId).big_integer().not_null())
                    .col(ColumnDef::new(GuestRooms::RoomId).big_integer().not_null())
                    .col(
                        ColumnDef::new(GuestRooms::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_guest_rooms")
                            .col(GuestRooms::GuestId)
                            .col(GuestRooms::RoomId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guest_rooms_guest_id")
                            .from(GuestRooms::Table, GuestRooms::GuestId)
                            .to(Guests::Table, Guests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guest_rooms_room_id")
                            .from(GuestRooms::Table, GuestRooms::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // inverse lookups (room -> guests)
        manager
            .create_index(
                Index::create()
                    .name("ix_guest_rooms_room_id")
                    .table(GuestRooms::Table)
                    .col(GuestRooms::RoomId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_index(
                Index::drop()
                    .name("ix_guest_rooms_room_id")
                    .table(GuestRooms::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(GuestRooms::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Guests::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_rooms_hotel_id")
                    .table(Rooms::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Hotels::Table).to_owned())
            .await?;

        Ok(())
    }
}
