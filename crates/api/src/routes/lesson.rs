use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/lessons",
            post(handlers::lesson::create_lesson)
                .get(handlers::lesson::lessons_in_range)
                .delete(handlers::lesson::delete_all_lessons),
        )
        .route(
            "/api/lessons/:id",
            get(handlers::lesson::get_lesson)
                .put(handlers::lesson::update_lesson)
                .delete(handlers::lesson::delete_lesson),
        )
}
