//! Guest show page.
//!
//! Regions, in order:
//! - `div#guest_info`: the guest's name and nothing else
//! - `div#guest_room_history`: one `div#room-{id}` per linked room
//! - `div#add-room`: the add-room form, preceded by an error when present

use std::fmt::Write;

use super::html::{escape, layout};
use crate::services::guests::{AddRoomRejection, GuestView};

pub fn render(view: &GuestView, error: Option<AddRoomRejection>) -> String {
    let guest = &view.guest;
    let mut body = String::new();

    let _ = write!(
        body,
        "<div id=\"guest_info\">\n<h1>{}</h1>\n</div>\n",
        escape(&guest.name)
    );

    body.push_str("<div id=\"guest_room_history\">\n<h2>Room history</h2>\n");
    if view.rooms.is_empty() {
        body.push_str("<p class=\"empty\">No rooms yet.</p>\n");
    }
    for stay in &view.rooms {
        let _ = write!(
            body,
            "<div id=\"room-{id}\">\n<p class=\"suite\">{suite}</p>\n<p class=\"rate\">{rate}</p>\n<p class=\"hotel\">{hotel}</p>\n</div>\n",
            id = stay.room.id,
            suite = escape(&stay.room.suite),
            rate = stay.room.rate,
            hotel = escape(&stay.hotel_name),
        );
    }
    body.push_str("</div>\n");

    body.push_str("<div id=\"add-room\">\n<h2>Add a room</h2>\n");
    if let Some(rejection) = error {
        let _ = write!(
            body,
            "<p class=\"error\" role=\"alert\">{}</p>\n",
            escape(rejection.message())
        );
    }
    let _ = write!(
        body,
        "<form method=\"post\" action=\"/guests/{id}/rooms\">\n\
         <label for=\"room_id\">Room id</label>\n\
         <input type=\"text\" name=\"room_id\" id=\"room_id\">\n\
         <input type=\"submit\" name=\"commit\" value=\"Submit\">\n\
         </form>\n</div>\n",
        id = guest.id
    );

    layout(&format!("Guest {}", guest.id), &body)
}
