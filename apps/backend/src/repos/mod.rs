//! Repository functions for the domain layer.

pub mod guests;
pub mod hotels;
pub mod rooms;
