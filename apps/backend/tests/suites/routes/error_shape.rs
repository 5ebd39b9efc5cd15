use actix_web::{test, HttpMessage};
use hotel_backend::{build_state, RuntimeEnv};

use super::seeded_state;
use crate::common::assert_problem;
use crate::support::create_test_app;

#[actix_web::test]
async fn missing_guest_page_is_404_problem() -> Result<(), Box<dyn std::error::Error>> {
    let (state, shared, _vail) = seeded_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/guests/999999").to_request();
    req.extensions_mut().insert(shared.clone());
    let resp = test::call_service(&app, req).await;

    let problem = assert_problem(resp, 404, "GUEST_NOT_FOUND").await;
    assert_eq!(problem.detail, "Guest 999999 not found");
    assert_eq!(problem.title, "Guest Not Found");

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn non_numeric_guest_id_is_400() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().with_env(RuntimeEnv::Test).build().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    for uri in ["/guests/abc", "/guests/0", "/guests/-4", "/api/guests/1.5"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem(resp, 400, "INVALID_GUEST_ID").await;
    }

    Ok(())
}

#[actix_web::test]
async fn missing_database_is_503_with_retry_after() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().with_env(RuntimeEnv::Test).build().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/guests/1").to_request();
    let resp = test::call_service(&app, req).await;

    // Retry-After is checked by the helper for 503s
    assert_problem(resp, 503, "DB_UNAVAILABLE").await;

    Ok(())
}
