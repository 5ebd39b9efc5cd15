//! JSON API over the same guest and hotel operations as the HTML pages.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::extractors::{GuestId, HotelId, ValidatedJson};
use crate::services::guests::{AddRoomOutcome, GuestService};
use crate::services::hotels::HotelService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddRoomRequest {
    pub room_id: String,
}

/// GET /api/guests/{guest_id}
async fn get_guest(
    http_req: HttpRequest,
    guest_id: GuestId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = guest_id.0;
    let view = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(GuestService::new().show_guest(txn, id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(view))
}

/// POST /api/guests/{guest_id}/rooms
///
/// 200 with the updated guest view. A malformed room id is 400
/// `INVALID_ROOM_ID`, an unknown one 404 `ROOM_NOT_FOUND`.
async fn add_room(
    http_req: HttpRequest,
    guest_id: GuestId,
    body: ValidatedJson<AddRoomRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = guest_id.0;
    let raw_room_id = body.into_inner().room_id;

    let view = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = GuestService::new();
            match service.add_room(txn, id, &raw_room_id).await? {
                AddRoomOutcome::Rejected(rejection) => Err(DomainError::from(rejection).into()),
                AddRoomOutcome::Attached(_) | AddRoomOutcome::AlreadyLinked(_) => {
                    Ok(service.show_guest(txn, id).await?)
                }
            }
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(view))
}

/// GET /api/hotels/{hotel_id}/rooms
async fn hotel_rooms(
    http_req: HttpRequest,
    hotel_id: HotelId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = hotel_id.0;
    let listing = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(HotelService::new().hotel_rooms(txn, id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(listing))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/guests/{guest_id}", web::get().to(get_guest))
        .route("/guests/{guest_id}/rooms", web::post().to(add_room))
        .route("/hotels/{hotel_id}/rooms", web::get().to(hotel_rooms));
}
