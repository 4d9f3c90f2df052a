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
        instructor::{Instructor, NewInstructorRequest, UpdateInstructorRequest},
    },
    validation::parse_timestamp,
};
use uuid::Uuid;

use super::day_param;
use crate::{ApiState, middleware::error_handling::AppError};

#[derive(Debug, Deserialize)]
pub struct SpecialtiesQuery {
    /// Comma-separated style names; empty or absent matches everyone.
    #[serde(default)]
    pub specialties: String,
}

#[derive(Debug, Deserialize)]
pub struct AvailableQuery {
    pub day: Option<String>,
    pub start: String,
    pub end: String,
}

#[axum::debug_handler]
pub async fn create_instructor(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<NewInstructorRequest>,
) -> Result<(StatusCode, Json<Instructor>), AppError> {
    let instructor = state.instructors.create_instructor(&payload).await?;
    Ok((StatusCode::CREATED, Json(instructor)))
}

#[axum::debug_handler]
pub async fn list_instructors(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Instructor>>, AppError> {
    Ok(Json(state.instructors.list_instructors().await?))
}

#[axum::debug_handler]
pub async fn get_instructor(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Instructor>, AppError> {
    Ok(Json(state.instructors.get_instructor(id).await?))
}

#[axum::debug_handler]
pub async fn instructors_by_specialties(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<SpecialtiesQuery>,
) -> Result<Json<Vec<Instructor>>, AppError> {
    let names: Vec<&str> = query
        .specialties
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();

    Ok(Json(state.instructors.instructors_by_specialties(names.as_slice()).await?))
}

#[axum::debug_handler]
pub async fn instructors_available(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AvailableQuery>,
) -> Result<Json<Vec<Instructor>>, AppError> {
    let day = day_param(query.day.as_deref(), "day")?;
    let start = parse_timestamp(&query.start).map_err(ScheduleError::InvalidRequest)?;
    let end = parse_timestamp(&query.end).map_err(ScheduleError::InvalidRequest)?;

    let instructors = state
        .instructors
        .instructors_available(day, start, end)
        .await?;
    Ok(Json(instructors))
}

#[axum::debug_handler]
pub async fn update_instructor(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateInstructorRequest>,
) -> Result<Json<Instructor>, AppError> {
    Ok(Json(state.instructors.update_instructor(id, &payload).await?))
}

#[axum::debug_handler]
pub async fn delete_instructor(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state.instructors.delete_instructor(id).await?;
    Ok(Json(DeleteResponse { deleted }))
}

#[axum::debug_handler]
pub async fn delete_all_instructors(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state.instructors.delete_all_instructors().await?;
    Ok(Json(DeleteResponse { deleted }))
}
