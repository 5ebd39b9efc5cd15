pub mod guest_id;
pub mod hotel_id;
pub mod validated_json;

pub use guest_id::GuestId;
pub use hotel_id::HotelId;
pub use validated_json::ValidatedJson;

use actix_web::{web, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;

/// Parse a positive integer path segment, or 400 with `code`.
fn parse_path_id(req: &HttpRequest, segment: &str, code: ErrorCode) -> Result<i64, AppError> {
    let raw = req
        .match_info()
        .get(segment)
        .ok_or_else(|| AppError::bad_request(code, format!("Missing {segment} parameter")))?;

    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        Ok(id) => Err(AppError::bad_request(
            code,
            format!("{segment} must be positive, got: {id}"),
        )),
        Err(_) => Err(AppError::bad_request(
            code,
            format!("Invalid {segment}: {raw}"),
        )),
    }
}

fn app_state(req: &HttpRequest) -> Result<&web::Data<AppState>, AppError> {
    req.app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not available"))
}
