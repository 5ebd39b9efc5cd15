use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use super::{app_state, parse_path_id};
use crate::db::require_db;
use crate::db::txn::SharedTxn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::guests;

/// Guest ID taken from the `{guest_id}` path segment.
/// Validates that the guest exists in the database.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct GuestId(pub i64);

impl FromRequest for GuestId {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let guest_id = parse_path_id(&req, "guest_id", ErrorCode::InvalidGuestId)?;

            let exists = if let Some(shared_txn) = SharedTxn::from_req(&req) {
                guests::exists(shared_txn.transaction(), guest_id).await?
            } else {
                let state = app_state(&req)?;
                guests::exists(require_db(state)?, guest_id).await?
            };

            if !exists {
                return Err(AppError::not_found(
                    ErrorCode::GuestNotFound,
                    format!("Guest {guest_id} not found"),
                ));
            }

            Ok(GuestId(guest_id))
        })
    }
}
