//! Guest HTML pages.

use actix_web::http::header::{ContentType, LOCATION};
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::debug;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::guest_id::GuestId;
use crate::services::guests::{AddRoomOutcome, AddRoomRejection, GuestService};
use crate::state::app_state::AppState;
use crate::views::guest_show;

#[derive(Debug, Deserialize)]
pub struct ShowQuery {
    pub error: Option<String>,
}

/// Body of the add-room form. A missing field is treated like an empty one.
#[derive(Debug, Deserialize)]
pub struct AddRoomForm {
    #[serde(default)]
    pub room_id: String,
}

/// Where the add-room form sends the browser afterwards.
pub fn show_location(guest_id: i64, rejection: Option<AddRoomRejection>) -> String {
    match rejection {
        Some(r) => format!("/guests/{guest_id}?error={}", r.as_query_value()),
        None => format!("/guests/{guest_id}"),
    }
}

/// GET /guests/{guest_id}
async fn show(
    http_req: HttpRequest,
    guest_id: GuestId,
    query: Option<web::Query<ShowQuery>>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = guest_id.0;

    let view = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(GuestService::new().show_guest(txn, id).await?) })
    })
    .await?;

    // An undecodable query string only loses the error banner
    let error = query
        .as_ref()
        .and_then(|q| q.error.as_deref())
        .and_then(AddRoomRejection::from_query_value);

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(guest_show::render(&view, error)))
}

/// POST /guests/{guest_id}/rooms
///
/// Always answers 303 back to the show page; a rejected room id is carried
/// in the `error` query parameter.
async fn add_room(
    http_req: HttpRequest,
    guest_id: GuestId,
    form: web::Form<AddRoomForm>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = guest_id.0;
    let raw_room_id = form.into_inner().room_id;

    let outcome = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            Ok(GuestService::new()
                .add_room(txn, id, &raw_room_id)
                .await?)
        })
    })
    .await?;

    debug!(guest_id = id, ?outcome, "add_room form handled");

    let rejection = match outcome {
        AddRoomOutcome::Rejected(r) => Some(r),
        AddRoomOutcome::Attached(_) | AddRoomOutcome::AlreadyLinked(_) => None,
    };

    Ok(HttpResponse::SeeOther()
        .insert_header((LOCATION, show_location(id, rejection)))
        .finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{guest_id}", web::get().to(show))
        .route("/{guest_id}/rooms", web::post().to(add_room));
}
