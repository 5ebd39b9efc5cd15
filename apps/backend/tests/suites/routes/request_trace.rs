use actix_web::test;
use hotel_backend::{build_state, RuntimeEnv};
use uuid::Uuid;

use crate::support::create_test_app;

#[actix_web::test]
async fn every_response_carries_a_request_id() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().with_env(RuntimeEnv::Test).build().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let mut seen = Vec::new();
    for uri in ["/health", "/guests/abc"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let request_id = resp
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .expect("x-request-id header")
            .to_string();
        assert!(Uuid::parse_str(&request_id).is_ok(), "not a uuid: {request_id}");
        seen.push(request_id);
    }
    assert_ne!(seen[0], seen[1], "each request gets its own id");

    Ok(())
}

#[actix_web::test]
async fn error_trace_id_matches_request_id() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().with_env(RuntimeEnv::Test).build().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/guests/abc").to_request();
    let resp = test::call_service(&app, req).await;

    let header = |name: &str| {
        resp.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let request_id = header("x-request-id").expect("x-request-id");
    let trace_id = header("x-trace-id").expect("x-trace-id");
    assert_eq!(request_id, trace_id);

    Ok(())
}
