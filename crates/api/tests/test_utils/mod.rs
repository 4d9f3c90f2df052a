use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{Value, json};
use swimsync_api::{ApiState, build_router};
use swimsync_db::mock::InMemoryStore;

/// 2025-01-13 is a Monday.
pub const MONDAY: i64 = 1;

pub fn monday_at(time: &str) -> String {
    format!("2025-01-13T{time}:00Z")
}

pub struct TestContext {
    pub server: TestServer,
    pub store: InMemoryStore,
}

impl TestContext {
    pub fn new() -> Self {
        let store = InMemoryStore::new();
        let shared = Arc::new(store.clone());
        let state = Arc::new(ApiState::new(shared.clone(), shared));
        let server = TestServer::new(build_router(state)).expect("test server");

        Self { server, store }
    }

    /// Creates an instructor teaching BACK_STROKE and CHEST, available
    /// Mondays 09:00-17:00, and returns its id.
    pub async fn seed_instructor(&self) -> String {
        let response = self
            .server
            .post("/api/instructors")
            .json(&instructor_payload("Marta"))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json::<Value>()["id"]
            .as_str()
            .expect("instructor id")
            .to_string()
    }
}

pub fn instructor_payload(name: &str) -> Value {
    json!({
        "name": name,
        "specialties": ["BACK_STROKE", "CHEST"],
        "availabilities": [
            null,
            { "start_time": monday_at("09:00"), "end_time": monday_at("17:00") },
            null, null, null, null, null
        ]
    })
}

pub fn public_lesson_payload(instructor_id: &str, start: &str, end: &str) -> Value {
    json!({
        "type_lesson": "PUBLIC",
        "instructor_id": instructor_id,
        "specialties": ["BACK_STROKE"],
        "start_time": monday_at(start),
        "end_time": monday_at(end),
        "students": [
            { "name": "Ana", "preferences": ["BACK_STROKE"], "lesson_type": "PUBLIC" }
        ]
    })
}
