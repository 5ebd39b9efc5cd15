use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use super::{app_state, parse_path_id};
use crate::db::require_db;
use crate::db::txn::SharedTxn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::hotels;

/// Hotel ID taken from the `{hotel_id}` path segment; the hotel must exist.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct HotelId(pub i64);

impl FromRequest for HotelId {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let hotel_id = parse_path_id(&req, "hotel_id", ErrorCode::InvalidHotelId)?;

            let found = if let Some(shared_txn) = SharedTxn::from_req(&req) {
                hotels::find_by_id(shared_txn.transaction(), hotel_id).await?
            } else {
                let state = app_state(&req)?;
                hotels::find_by_id(require_db(state)?, hotel_id).await?
            };

            if found.is_none() {
                return Err(AppError::not_found(
                    ErrorCode::HotelNotFound,
                    format!("Hotel {hotel_id} not found"),
                ));
            }

            Ok(HotelId(hotel_id))
        })
    }
}
