pub mod guest_rooms;
pub mod guests;
pub mod hotels;
pub mod rooms;

pub use guest_rooms::Entity as GuestRooms;
pub use guest_rooms::Model as GuestRoom;
pub use guests::Entity as Guests;
pub use guests::Model as Guest;
pub use hotels::Entity as Hotels;
pub use hotels::Model as Hotel;
pub use rooms::Entity as Rooms;
pub use rooms::Model as Room;
