//! # Error Handling Middleware
//!
//! Maps `ScheduleError` to HTTP status codes and a JSON body of the form
//! `{"error": "<message>"}`, so every handler reports failures the same way.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use swimsync_core::errors::ScheduleError;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use swimsync_api::middleware::error_handling::AppError;
/// use swimsync_core::errors::ScheduleError;
/// use uuid::Uuid;
///
/// async fn handler(id: Uuid) -> Result<Json<()>, AppError> {
///     Err(AppError::from(ScheduleError::LessonNotFound(id)))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub ScheduleError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ScheduleError::InvalidRequest(_)
            | ScheduleError::InvalidInstructor(_)
            | ScheduleError::InvalidLesson(_)
            | ScheduleError::SpecialtyMismatch(_)
            | ScheduleError::InstructorUnavailable(_)
            | ScheduleError::OutsideAvailability(_) => StatusCode::BAD_REQUEST,
            ScheduleError::InstructorNotFound(_) | ScheduleError::LessonNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            ScheduleError::SchedulingConflict { .. } | ScheduleError::ConcurrentConflict { .. } => {
                StatusCode::CONFLICT
            }
            ScheduleError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        AppError(err)
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ScheduleError::Database(err))
    }
}

/// Maps a ScheduleError straight to an HTTP response.
pub fn map_error(err: ScheduleError) -> Response {
    AppError(err).into_response()
}
