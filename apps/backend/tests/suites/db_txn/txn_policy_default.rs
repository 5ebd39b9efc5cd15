//! Default commit policy, end to end.
//!
//! Each test owns a fresh in-memory database, so committed rows never leak
//! between tests.

// Initialize logging directly (no mod common)

#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

use actix_web::http::header::LOCATION;
use actix_web::http::StatusCode;
use actix_web::test;
use hotel_backend::db::require_db;
use hotel_backend::db::txn::with_txn;
use hotel_backend::db::txn_policy::{current, set_txn_policy, TxnPolicy};
use hotel_backend::repos::guests;
use sea_orm::TransactionTrait;

use crate::support::factory::vail_inn;
use crate::support::{build_test_state, create_test_app};

#[::core::prelude::v1::test]
fn test_policy_default_and_once_lock_behavior() {
    assert_eq!(current(), TxnPolicy::CommitOnOk);

    set_txn_policy(TxnPolicy::CommitOnOk);
    assert_eq!(current(), TxnPolicy::CommitOnOk);

    // OnceLock keeps the first value
    set_txn_policy(TxnPolicy::RollbackOnOk);
    assert_eq!(current(), TxnPolicy::CommitOnOk);
}

#[actix_web::test]
async fn ok_result_is_visible_in_next_txn() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(current(), TxnPolicy::CommitOnOk);
    let state = build_test_state().await?;

    let guest_id = with_txn(None, &state, |txn| {
        Box::pin(async move { Ok(guests::create_guest(txn, "Lasting", 2).await?.id) })
    })
    .await?;

    let found = with_txn(None, &state, |txn| {
        Box::pin(async move { Ok(guests::exists(txn, guest_id).await?) })
    })
    .await?;
    assert!(found);

    Ok(())
}

#[actix_web::test]
async fn posted_room_survives_into_later_requests() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(current(), TxnPolicy::CommitOnOk);
    let state = build_test_state().await?;

    let vail = with_txn(None, &state, |txn| {
        Box::pin(async move { Ok(vail_inn(txn).await?) })
    })
    .await?;
    let guest_id = vail.zahava.id;
    let room_id = vail.executive.id;

    let app = create_test_app(state.clone())
        .with_prod_routes()
        .build()
        .await?;

    let room_field = room_id.to_string();
    let req = test::TestRequest::post()
        .uri(&format!("/guests/{guest_id}/rooms"))
        .set_form(&[("room_id", room_field.as_str())])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let target = resp
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert_eq!(target, format!("/guests/{guest_id}"));

    let req = test::TestRequest::get().uri(&target).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page = String::from_utf8(test::read_body(resp).await.to_vec())?;
    let block = format!("<div id=\"room-{room_id}\">");
    assert_eq!(page.matches(block.as_str()).count(), 1);

    let txn = require_db(&state)?.begin().await?;
    let attached = guests::has_room(&txn, guest_id, room_id).await?;
    txn.rollback().await?;
    assert!(attached);

    Ok(())
}
