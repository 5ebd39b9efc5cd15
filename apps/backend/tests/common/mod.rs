#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use backend_test_support::problem_details::{
    assert_problem_details_from_service_response, ProblemDetailsLike,
};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

// Policy defaults to rollback but can be flipped per-binary via `HOTEL_TXN_POLICY=commit`.
#[ctor::ctor]
fn init_txn_policy() {
    let policy = match std::env::var("HOTEL_TXN_POLICY")
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "commit" => hotel_backend::db::txn_policy::TxnPolicy::CommitOnOk,
        _ => hotel_backend::db::txn_policy::TxnPolicy::RollbackOnOk,
    };

    hotel_backend::db::txn_policy::set_txn_policy(policy);
}

/// Assert a Problem Details response with the given status and code.
pub async fn assert_problem(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
) -> ProblemDetailsLike {
    let status = StatusCode::from_u16(expected_status).expect("valid status");
    assert_problem_details_from_service_response(resp, expected_code, status, None).await
}

/// Text between the opening tag of `div#{id}` and its first closing `</div>`.
///
/// Only valid for regions without nested divs; use
/// [`region_until`] for the room history.
pub fn region<'a>(page: &'a str, id: &str) -> &'a str {
    let open = format!("<div id=\"{id}\">");
    let start = page
        .find(&open)
        .unwrap_or_else(|| panic!("page should contain {open}"));
    let rest = &page[start..];
    let end = rest.find("</div>").unwrap_or(rest.len());
    &rest[..end]
}

/// Text from the opening tag of `div#{id}` up to the start of `div#{next}`.
pub fn region_until<'a>(page: &'a str, id: &str, next: &str) -> &'a str {
    let open = format!("<div id=\"{id}\">");
    let start = page
        .find(&open)
        .unwrap_or_else(|| panic!("page should contain {open}"));
    let next_open = format!("<div id=\"{next}\">");
    let end = page[start..]
        .find(&next_open)
        .map(|offset| start + offset)
        .unwrap_or(page.len());
    &page[start..end]
}

/// Number of `div#room-{id}` blocks rendered on the page.
pub fn room_block_count(page: &str, room_id: i64) -> usize {
    page.matches(&format!("<div id=\"room-{room_id}\">")).count()
}
