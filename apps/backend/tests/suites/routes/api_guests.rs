use actix_web::http::StatusCode;
use actix_web::{test, HttpMessage};
use serde_json::{json, Value};

use super::seeded_state;
use crate::common::assert_problem;
use crate::support::create_test_app;

fn room_ids(body: &Value) -> Vec<i64> {
    body["rooms"]
        .as_array()
        .expect("rooms array")
        .iter()
        .map(|stay| stay["room"]["id"].as_i64().expect("room id"))
        .collect()
}

#[actix_web::test]
async fn get_guest_returns_name_and_rooms() -> Result<(), Box<dyn std::error::Error>> {
    let (state, shared, vail) = seeded_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/guests/{}", vail.ethan.id))
        .to_request();
    req.extensions_mut().insert(shared.clone());
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["guest"]["name"], "Ethan");
    assert_eq!(
        room_ids(&body),
        vec![vail.presidential.id, vail.executive.id, vail.basic.id]
    );
    assert_eq!(body["rooms"][0]["hotel_name"], "Vail Inn");
    assert_eq!(body["rooms"][0]["room"]["suite"], "Presidential");
    assert_eq!(body["rooms"][0]["room"]["rate"], 125);

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn post_room_links_and_returns_view() -> Result<(), Box<dyn std::error::Error>> {
    let (state, shared, vail) = seeded_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri(&format!("/api/guests/{}/rooms", vail.zahava.id))
        .set_json(json!({ "room_id": vail.executive.id.to_string() }))
        .to_request();
    req.extensions_mut().insert(shared.clone());
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        room_ids(&body),
        vec![vail.presidential.id, vail.executive.id]
    );

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn post_room_twice_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let (state, shared, vail) = seeded_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri(&format!("/api/guests/{}/rooms", vail.ezzy.id))
            .set_json(json!({ "room_id": vail.executive.id.to_string() }))
            .to_request();
        req.extensions_mut().insert(shared.clone());
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(room_ids(&body), vec![vail.executive.id]);
    }

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn post_invalid_room_id_is_400() -> Result<(), Box<dyn std::error::Error>> {
    let (state, shared, vail) = seeded_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri(&format!("/api/guests/{}/rooms", vail.ezzy.id))
        .set_json(json!({ "room_id": "twelve" }))
        .to_request();
    req.extensions_mut().insert(shared.clone());
    let resp = test::call_service(&app, req).await;

    assert_problem(resp, 400, "INVALID_ROOM_ID").await;

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn post_unknown_room_is_404() -> Result<(), Box<dyn std::error::Error>> {
    let (state, shared, vail) = seeded_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri(&format!("/api/guests/{}/rooms", vail.ezzy.id))
        .set_json(json!({ "room_id": "987654" }))
        .to_request();
    req.extensions_mut().insert(shared.clone());
    let resp = test::call_service(&app, req).await;

    let problem = assert_problem(resp, 404, "ROOM_NOT_FOUND").await;
    assert_eq!(problem.detail, "No room exists with that id.");

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn post_malformed_json_is_400() -> Result<(), Box<dyn std::error::Error>> {
    let (state, shared, vail) = seeded_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri(&format!("/api/guests/{}/rooms", vail.ezzy.id))
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"room_id\": ")
        .to_request();
    req.extensions_mut().insert(shared.clone());
    let resp = test::call_service(&app, req).await;

    assert_problem(resp, 400, "BAD_REQUEST").await;

    shared.rollback().await?;
    Ok(())
}
