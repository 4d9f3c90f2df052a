use axum::{Json, Router, routing::get};
use serde::Serialize;
use std::sync::Arc;

use crate::ApiState;

#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub service: &'static str,
    pub status: &'static str,
    pub version: &'static str,
}

const STATUS: ServiceStatus = ServiceStatus {
    service: env!("CARGO_PKG_NAME"),
    status: "ok",
    version: env!("CARGO_PKG_VERSION"),
};

async fn health_check() -> Json<ServiceStatus> {
    Json(STATUS)
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "version": STATUS.version }))
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
}
