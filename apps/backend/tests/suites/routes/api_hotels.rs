use actix_web::http::StatusCode;
use actix_web::{test, HttpMessage};
use serde_json::Value;

use super::seeded_state;
use crate::common::assert_problem;
use crate::support::create_test_app;
use crate::support::factory::lodge_with_room;

#[actix_web::test]
async fn lists_only_the_hotels_own_rooms() -> Result<(), Box<dyn std::error::Error>> {
    let (state, shared, vail) = seeded_state().await?;
    lodge_with_room(shared.transaction(), "Chalet", 210).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/hotels/{}/rooms", vail.hotel.id))
        .to_request();
    req.extensions_mut().insert(shared.clone());
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["hotel"]["name"], "Vail Inn");
    let suites: Vec<&str> = body["rooms"]
        .as_array()
        .expect("rooms array")
        .iter()
        .map(|room| room["suite"].as_str().expect("suite"))
        .collect();
    assert_eq!(suites, vec!["Presidential", "Executive", "Basic"]);

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn missing_hotel_is_404() -> Result<(), Box<dyn std::error::Error>> {
    let (state, shared, _vail) = seeded_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri("/api/hotels/31337/rooms")
        .to_request();
    req.extensions_mut().insert(shared.clone());
    let resp = test::call_service(&app, req).await;

    assert_problem(resp, 404, "HOTEL_NOT_FOUND").await;

    shared.rollback().await?;
    Ok(())
}
