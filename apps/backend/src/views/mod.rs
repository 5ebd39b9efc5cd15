//! Server-rendered HTML pages.

pub mod guest_show;
pub mod html;
