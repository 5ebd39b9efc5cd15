//! SeaORM adapters. Functions here return `DbErr`; the repos layer maps it
//! to `DomainError`.

pub mod guest_rooms_sea;
pub mod guests_sea;
pub mod hotels_sea;
pub mod rooms_sea;
