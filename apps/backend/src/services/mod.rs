pub mod guests;
pub mod hotels;
