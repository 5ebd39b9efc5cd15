use actix_web::{error, web};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod api;
pub mod guests;
pub mod health;

/// Register every route plus the form/path/query extractor configs.
///
/// Used by `main.rs` and by the test app builder so both serve the same
/// surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(form_config())
        .app_data(path_config())
        .app_data(query_config());

    cfg.configure(health::configure_routes);
    cfg.service(web::scope("/guests").configure(guests::configure_routes));
    cfg.service(web::scope("/api").configure(api::configure_routes));
}

/// Form bodies that fail to decode become 400 problem details.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .limit(16 * 1024)
        .error_handler(|err, _req| {
            let detail = format!("Invalid form body: {err}");
            error::Error::from(AppError::bad_request(ErrorCode::BadRequest, detail))
        })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let detail = format!("Invalid path: {err}");
        error::Error::from(AppError::bad_request(ErrorCode::BadRequest, detail))
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let detail = format!("Invalid query string: {err}");
        error::Error::from(AppError::bad_request(ErrorCode::BadRequest, detail))
    })
}
