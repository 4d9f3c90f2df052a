use axum::http::StatusCode;
use fake::{Fake, faker::name::en::Name};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::test_utils::{TestContext, instructor_payload, monday_at};

#[tokio::test]
async fn test_create_instructor_normalizes_week() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/instructors")
        .json(&instructor_payload("Marta"))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["name"], "Marta");
    assert_eq!(body["availability"].as_array().map(Vec::len), Some(7));
    assert_eq!(body["availability"][0], json!({ "status": "unavailable" }));
    assert_eq!(body["availability"][1]["status"], "available");
}

#[tokio::test]
async fn test_create_instructor_pads_short_week() {
    let ctx = TestContext::new();
    let payload = json!({
        "name": "Leo",
        "specialties": ["ROWING"],
        "availabilities": [null, { "start_time": monday_at("08:00"), "end_time": monday_at("12:00") }]
    });

    let response = ctx.server.post("/api/instructors").json(&payload).await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["availability"].as_array().map(Vec::len), Some(7));
    assert_eq!(body["availability"][6], json!({ "status": "unavailable" }));
}

#[rstest]
#[case::no_specialties(json!({
    "name": "Leo",
    "specialties": [],
    "availabilities": [null, { "start_time": "2025-01-13T08:00:00Z", "end_time": "2025-01-13T12:00:00Z" }]
}))]
#[case::never_available(json!({
    "name": "Leo",
    "specialties": ["CHEST"],
    "availabilities": [null, null, null]
}))]
#[case::inverted_window(json!({
    "name": "Leo",
    "specialties": ["CHEST"],
    "availabilities": [{ "start_time": "2025-01-13T12:00:00Z", "end_time": "2025-01-13T08:00:00Z" }]
}))]
#[case::unknown_style(json!({
    "name": "Leo",
    "specialties": ["DOGGY_PADDLE"],
    "availabilities": [{ "start_time": "2025-01-13T08:00:00Z", "end_time": "2025-01-13T12:00:00Z" }]
}))]
#[tokio::test]
async fn test_create_instructor_rejects_invalid_payload(#[case] payload: Value) {
    let ctx = TestContext::new();

    let response = ctx.server.post("/api/instructors").json(&payload).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());
}

#[tokio::test]
async fn test_get_instructor_not_found() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .get(&format!("/api/instructors/{}", Uuid::new_v4()))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_and_get_instructor() {
    let ctx = TestContext::new();
    let id = ctx.seed_instructor().await;

    let listed = ctx.server.get("/api/instructors").await.json::<Value>();
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let fetched = ctx.server.get(&format!("/api/instructors/{id}")).await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>()["id"], id.as_str());
}

#[tokio::test]
async fn test_instructors_by_specialties() {
    let ctx = TestContext::new();
    ctx.seed_instructor().await;

    let matching = ctx
        .server
        .get("/api/instructors/specialties")
        .add_query_param("specialties", "CHEST,BACK_STROKE")
        .await
        .json::<Value>();
    assert_eq!(matching.as_array().map(Vec::len), Some(1));

    let none = ctx
        .server
        .get("/api/instructors/specialties")
        .add_query_param("specialties", "CHEST,ROWING")
        .await
        .json::<Value>();
    assert_eq!(none.as_array().map(Vec::len), Some(0));

    let unknown = ctx
        .server
        .get("/api/instructors/specialties")
        .add_query_param("specialties", "CRAWL")
        .await;
    unknown.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_instructors_available() {
    let ctx = TestContext::new();
    ctx.seed_instructor().await;

    let inside = ctx
        .server
        .get("/api/instructors/available")
        .add_query_param("day", 1)
        .add_query_param("start", monday_at("10:00"))
        .add_query_param("end", monday_at("11:00"))
        .await
        .json::<Value>();
    assert_eq!(inside.as_array().map(Vec::len), Some(1));

    let day_off = ctx
        .server
        .get("/api/instructors/available")
        .add_query_param("day", 2)
        .add_query_param("start", monday_at("10:00"))
        .add_query_param("end", monday_at("11:00"))
        .await
        .json::<Value>();
    assert_eq!(day_off.as_array().map(Vec::len), Some(0));

    let bad_day = ctx
        .server
        .get("/api/instructors/available")
        .add_query_param("day", 9)
        .add_query_param("start", monday_at("10:00"))
        .add_query_param("end", monday_at("11:00"))
        .await;
    bad_day.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_instructor_replaces_record() {
    let ctx = TestContext::new();
    let id = ctx.seed_instructor().await;
    let renamed: String = Name().fake();

    let response = ctx
        .server
        .put(&format!("/api/instructors/{id}"))
        .json(&instructor_payload(&renamed))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["name"], renamed.trim());
}

#[tokio::test]
async fn test_update_missing_instructor() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .put(&format!("/api/instructors/{}", Uuid::new_v4()))
        .json(&instructor_payload("Nobody"))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_instructor() {
    let ctx = TestContext::new();
    let id = ctx.seed_instructor().await;

    let first = ctx.server.delete(&format!("/api/instructors/{id}")).await;
    assert_eq!(first.json::<Value>(), json!({ "deleted": true }));

    let second = ctx.server.delete(&format!("/api/instructors/{id}")).await;
    assert_eq!(second.json::<Value>(), json!({ "deleted": false }));
}

#[tokio::test]
async fn test_delete_all_instructors() {
    let ctx = TestContext::new();
    ctx.seed_instructor().await;
    ctx.seed_instructor().await;

    let response = ctx.server.delete("/api/instructors").await;

    assert_eq!(response.json::<Value>(), json!({ "deleted": true }));
    let listed = ctx.server.get("/api/instructors").await.json::<Value>();
    assert_eq!(listed, json!([]));
}
