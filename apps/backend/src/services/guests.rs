//! Guest show and add-room services.

use std::fmt;
use std::str::FromStr;

use sea_orm::ConnectionTrait;
use serde::Serialize;
use tracing::info;

use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::guests::{self, Guest, RoomStay};
use crate::repos::rooms;

/// A submitted room identifier that parsed as a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomId(i64);

impl RoomId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for RoomId {
    type Err = DomainError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(DomainError::validation(
                ValidationKind::InvalidRoomId,
                format!("'{trimmed}' is not a valid room id"),
            )),
        }
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the guest show page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestView {
    pub guest: Guest,
    pub rooms: Vec<RoomStay>,
}

/// Why an add-room submission was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddRoomRejection {
    InvalidRoomId,
    RoomNotFound,
}

impl AddRoomRejection {
    /// Value carried in the `error` query parameter of the redirect.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::InvalidRoomId => "invalid_room_id",
            Self::RoomNotFound => "room_not_found",
        }
    }

    pub fn from_query_value(value: &str) -> Option<Self> {
        match value {
            "invalid_room_id" => Some(Self::InvalidRoomId),
            "room_not_found" => Some(Self::RoomNotFound),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidRoomId => "Room id must be a positive number.",
            Self::RoomNotFound => "No room exists with that id.",
        }
    }
}

/// Result of one add-room submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddRoomOutcome {
    /// A new link was written.
    Attached(RoomId),
    /// The room was already linked; nothing changed.
    AlreadyLinked(RoomId),
    Rejected(AddRoomRejection),
}

/// Guest domain service.
pub struct GuestService;

impl GuestService {
    pub fn new() -> Self {
        Self
    }

    /// Load a guest and the rooms they are linked to.
    pub async fn show_guest<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        guest_id: i64,
    ) -> Result<GuestView, DomainError> {
        let guest = guests::require_guest(conn, guest_id).await?;
        let rooms = guests::rooms_for_guest(conn, guest_id).await?;
        Ok(GuestView { guest, rooms })
    }

    /// Validate a submitted room id and link that room to the guest.
    ///
    /// A missing guest is an error. A malformed or unknown room id is a
    /// `Rejected` outcome and leaves the guest's rooms unchanged.
    pub async fn add_room<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        guest_id: i64,
        raw_room_id: &str,
    ) -> Result<AddRoomOutcome, DomainError> {
        guests::require_guest(conn, guest_id).await?;

        let room_id = match raw_room_id.parse::<RoomId>() {
            Ok(id) => id,
            Err(_) => {
                info!(guest_id, "add_room rejected: invalid room id");
                return Ok(AddRoomOutcome::Rejected(AddRoomRejection::InvalidRoomId));
            }
        };

        if !rooms::exists(conn, room_id.get()).await? {
            info!(guest_id, room_id = room_id.get(), "add_room rejected: room not found");
            return Ok(AddRoomOutcome::Rejected(AddRoomRejection::RoomNotFound));
        }

        let inserted = guests::add_room(conn, guest_id, room_id.get()).await?;
        info!(guest_id, room_id = room_id.get(), inserted, "add_room attached");

        Ok(if inserted {
            AddRoomOutcome::Attached(room_id)
        } else {
            AddRoomOutcome::AlreadyLinked(room_id)
        })
    }
}

impl Default for GuestService {
    fn default() -> Self {
        Self::new()
    }
}

impl From<AddRoomRejection> for DomainError {
    fn from(rejection: AddRoomRejection) -> Self {
        match rejection {
            AddRoomRejection::InvalidRoomId => DomainError::validation(
                ValidationKind::InvalidRoomId,
                AddRoomRejection::InvalidRoomId.message(),
            ),
            AddRoomRejection::RoomNotFound => DomainError::not_found(
                NotFoundKind::Room,
                AddRoomRejection::RoomNotFound.message(),
            ),
        }
    }
}
