use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use swimsync_api::{ApiState, build_router, middleware::error_handling::map_error};
use swimsync_core::errors::ScheduleError;
use swimsync_db::mock::{
    InMemoryStore,
    repositories::{MockInstructorRepo, MockLessonRepo},
};
use uuid::Uuid;

#[rstest]
#[case::invalid_request(ScheduleError::InvalidRequest("bad".into()), StatusCode::BAD_REQUEST)]
#[case::invalid_instructor(ScheduleError::InvalidInstructor("bad".into()), StatusCode::BAD_REQUEST)]
#[case::invalid_lesson(ScheduleError::InvalidLesson("bad".into()), StatusCode::BAD_REQUEST)]
#[case::specialty_mismatch(ScheduleError::SpecialtyMismatch("bad".into()), StatusCode::BAD_REQUEST)]
#[case::unavailable(ScheduleError::InstructorUnavailable("bad".into()), StatusCode::BAD_REQUEST)]
#[case::outside(ScheduleError::OutsideAvailability("bad".into()), StatusCode::BAD_REQUEST)]
#[case::instructor_missing(ScheduleError::InstructorNotFound(Uuid::nil()), StatusCode::NOT_FOUND)]
#[case::lesson_missing(ScheduleError::LessonNotFound(Uuid::nil()), StatusCode::NOT_FOUND)]
#[case::conflict(ScheduleError::SchedulingConflict { lesson_id: Uuid::nil() }, StatusCode::CONFLICT)]
#[case::concurrent_conflict(ScheduleError::ConcurrentConflict { instructor_id: Uuid::nil() }, StatusCode::CONFLICT)]
#[case::database(ScheduleError::Database(eyre::eyre!("connection reset")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: ScheduleError, #[case] expected: StatusCode) {
    let response = map_error(error);

    assert_eq!(response.status(), expected);
}

#[test_log::test(tokio::test)]
async fn test_storage_fault_surfaces_as_500() {
    let mut instructors = MockInstructorRepo::new();
    instructors
        .expect_find_all()
        .times(1)
        .returning(|| Err(ScheduleError::Database(eyre::eyre!("connection reset"))));
    let state = ApiState::new(Arc::new(instructors), Arc::new(MockLessonRepo::new()));
    let server = TestServer::new(build_router(Arc::new(state))).expect("test server");

    let response = server.get("/api/instructors").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Database error: connection reset" })
    );
}

#[tokio::test]
async fn test_health_and_version() {
    let store = Arc::new(InMemoryStore::new());
    let state = ApiState::new(store.clone(), store);
    let server = TestServer::new(build_router(Arc::new(state))).expect("test server");

    let health = server.get("/health").await;
    health.assert_status_ok();
    assert_eq!(health.json::<Value>()["status"], "ok");

    let version = server.get("/version").await;
    assert_eq!(
        version.json::<Value>()["version"],
        env!("CARGO_PKG_VERSION")
    );
}
