use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::test_utils::{MONDAY, TestContext, monday_at, public_lesson_payload};

#[tokio::test]
async fn test_create_lesson_inside_availability() {
    let ctx = TestContext::new();
    let instructor_id = ctx.seed_instructor().await;

    let response = ctx
        .server
        .post("/api/lessons")
        .add_query_param("weekday", MONDAY)
        .json(&public_lesson_payload(&instructor_id, "10:00", "10:45"))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["instructor_id"], instructor_id.as_str());
    assert_eq!(body["lesson_type"], "PUBLIC");
    assert_eq!(body["start_time"], "2025-01-13T10:00:00Z");
    assert_eq!(body["end_time"], "2025-01-13T10:45:00Z");
}

#[tokio::test]
async fn test_identical_booking_conflicts() {
    let ctx = TestContext::new();
    let instructor_id = ctx.seed_instructor().await;
    let payload = public_lesson_payload(&instructor_id, "10:00", "10:45");

    let first = ctx
        .server
        .post("/api/lessons")
        .add_query_param("weekday", MONDAY)
        .json(&payload)
        .await;
    first.assert_status(StatusCode::CREATED);
    let first_id = first.json::<Value>()["id"].as_str().unwrap_or_default().to_string();

    let second = ctx
        .server
        .post("/api/lessons")
        .add_query_param("weekday", MONDAY)
        .json(&payload)
        .await;

    second.assert_status(StatusCode::CONFLICT);
    let error = second.json::<Value>()["error"].as_str().unwrap_or_default().to_string();
    assert!(error.contains(&first_id), "{error}");
    assert_eq!(ctx.store.lesson_count().await, 1);
}

#[tokio::test]
async fn test_lesson_past_availability_is_rejected() {
    let ctx = TestContext::new();
    let instructor_id = ctx.seed_instructor().await;

    let response = ctx
        .server
        .post("/api/lessons")
        .add_query_param("weekday", MONDAY)
        .json(&public_lesson_payload(&instructor_id, "16:30", "17:15"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(
        body["error"],
        "Outside availability: The instructor Marta is available only for 09:00 - 17:00 on Monday"
    );
}

#[tokio::test]
async fn test_lesson_on_day_off_is_rejected() {
    let ctx = TestContext::new();
    let instructor_id = ctx.seed_instructor().await;

    let response = ctx
        .server
        .post("/api/lessons")
        .add_query_param("weekday", 3)
        .json(&public_lesson_payload(&instructor_id, "10:00", "10:45"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "Instructor unavailable: The instructor Marta is not available on Wednesday"
    );
}

#[tokio::test]
async fn test_lesson_with_wrong_duration_is_rejected() {
    let ctx = TestContext::new();
    let instructor_id = ctx.seed_instructor().await;

    let response = ctx
        .server
        .post("/api/lessons")
        .add_query_param("weekday", MONDAY)
        .json(&public_lesson_payload(&instructor_id, "10:00", "11:00"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_lesson_for_unknown_instructor() {
    let ctx = TestContext::new();
    let missing = Uuid::new_v4().to_string();

    let response = ctx
        .server
        .post("/api/lessons")
        .add_query_param("weekday", MONDAY)
        .json(&public_lesson_payload(&missing, "10:00", "10:45"))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_weekday() {
    let ctx = TestContext::new();
    let instructor_id = ctx.seed_instructor().await;

    let response = ctx
        .server
        .post("/api/lessons")
        .add_query_param("weekday", 7)
        .json(&public_lesson_payload(&instructor_id, "10:00", "10:45"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[rstest]
#[case::non_numeric(Some("monday"))]
#[case::missing(None)]
#[tokio::test]
async fn test_unreadable_weekday_is_json_error(#[case] weekday: Option<&str>) {
    let ctx = TestContext::new();
    let instructor_id = ctx.seed_instructor().await;

    let mut request = ctx.server.post("/api/lessons");
    if let Some(weekday) = weekday {
        request = request.add_query_param("weekday", weekday);
    }
    let response = request
        .json(&public_lesson_payload(&instructor_id, "10:00", "10:45"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error = response.json::<Value>()["error"].as_str().unwrap_or_default().to_string();
    assert!(error.starts_with("Invalid request:"), "{error}");
}

#[tokio::test]
async fn test_private_lesson_past_midnight_is_rejected() {
    let ctx = TestContext::new();
    let instructor_id = ctx.seed_instructor().await;
    let mut payload = public_lesson_payload(&instructor_id, "23:30", "23:59");
    payload["type_lesson"] = json!("PRIVATE");
    payload["end_time"] = json!("2025-01-14T00:30:00Z");
    payload["students"][0]["lesson_type"] = json!("PRIVATE");

    let response = ctx
        .server
        .post("/api/lessons")
        .add_query_param("weekday", MONDAY)
        .json(&payload)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(ctx.store.lesson_count().await, 0);
}

#[tokio::test]
async fn test_update_lesson_is_idempotent() {
    let ctx = TestContext::new();
    let instructor_id = ctx.seed_instructor().await;
    let created = ctx
        .server
        .post("/api/lessons")
        .add_query_param("weekday", MONDAY)
        .json(&public_lesson_payload(&instructor_id, "10:00", "10:45"))
        .await
        .json::<Value>();
    let id = created["id"].as_str().unwrap_or_default().to_string();
    let moved = public_lesson_payload(&instructor_id, "11:00", "11:45");

    let once = ctx.server.put(&format!("/api/lessons/{id}")).json(&moved).await;
    let twice = ctx.server.put(&format!("/api/lessons/{id}")).json(&moved).await;

    once.assert_status_ok();
    twice.assert_status_ok();
    assert_eq!(once.json::<Value>(), twice.json::<Value>());
}

#[tokio::test]
async fn test_update_missing_lesson() {
    let ctx = TestContext::new();
    let instructor_id = ctx.seed_instructor().await;

    let response = ctx
        .server
        .put(&format!("/api/lessons/{}", Uuid::new_v4()))
        .json(&public_lesson_payload(&instructor_id, "10:00", "10:45"))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_lessons_in_range_and_delete() {
    let ctx = TestContext::new();
    let instructor_id = ctx.seed_instructor().await;
    for (start, end) in [("10:00", "10:45"), ("13:00", "13:45")] {
        ctx.server
            .post("/api/lessons")
            .add_query_param("weekday", MONDAY)
            .json(&public_lesson_payload(&instructor_id, start, end))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let morning = ctx
        .server
        .get("/api/lessons")
        .add_query_param("start", monday_at("08:00"))
        .add_query_param("end", monday_at("12:00"))
        .await
        .json::<Value>();
    assert_eq!(morning.as_array().map(Vec::len), Some(1));

    let id = morning[0]["id"].as_str().unwrap_or_default().to_string();
    let deleted = ctx.server.delete(&format!("/api/lessons/{id}")).await;
    assert_eq!(deleted.json::<Value>(), json!({ "deleted": true }));

    let gone = ctx.server.get(&format!("/api/lessons/{id}")).await;
    gone.assert_status(StatusCode::NOT_FOUND);

    let cleared = ctx.server.delete("/api/lessons").await;
    assert_eq!(cleared.json::<Value>(), json!({ "deleted": true }));
    assert_eq!(ctx.store.lesson_count().await, 0);
}

#[tokio::test]
async fn test_inverted_range_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .get("/api/lessons")
        .add_query_param("start", monday_at("12:00"))
        .add_query_param("end", monday_at("08:00"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
