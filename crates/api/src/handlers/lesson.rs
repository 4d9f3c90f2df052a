use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;
use swimsync_core::{
    errors::ScheduleError,
    models::{
        DeleteResponse,
        lesson::{Lesson, NewLessonRequest, UpdateLessonRequest},
    },
    validation::parse_timestamp,
};
use uuid::Uuid;

use super::day_param;
use crate::{ApiState, middleware::error_handling::AppError};

#[derive(Debug, Deserialize)]
pub struct WeekdayQuery {
    /// 0 = Sunday ... 6 = Saturday
    pub weekday: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: String,
    pub end: String,
}

#[axum::debug_handler]
pub async fn create_lesson(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<WeekdayQuery>,
    Json(payload): Json<NewLessonRequest>,
) -> Result<(StatusCode, Json<Lesson>), AppError> {
    let weekday = day_param(query.weekday.as_deref(), "weekday")?;
    let lesson = state.lessons.create_lesson(&payload, weekday).await?;
    Ok((StatusCode::CREATED, Json(lesson)))
}

#[axum::debug_handler]
pub async fn get_lesson(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Lesson>, AppError> {
    Ok(Json(state.lessons.get_lesson(id).await?))
}

#[axum::debug_handler]
pub async fn lessons_in_range(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Vec<Lesson>>, AppError> {
    let start = parse_timestamp(&query.start).map_err(ScheduleError::InvalidRequest)?;
    let end = parse_timestamp(&query.end).map_err(ScheduleError::InvalidRequest)?;

    Ok(Json(state.lessons.lessons_in_range(start, end).await?))
}

#[axum::debug_handler]
pub async fn update_lesson(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateLessonRequest>,
) -> Result<Json<Lesson>, AppError> {
    Ok(Json(state.lessons.update_lesson(id, &payload).await?))
}

#[axum::debug_handler]
pub async fn delete_lesson(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state.lessons.delete_lesson(id).await?;
    Ok(Json(DeleteResponse { deleted }))
}

#[axum::debug_handler]
pub async fn delete_all_lessons(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state.lessons.delete_all_lessons().await?;
    Ok(Json(DeleteResponse { deleted }))
}
