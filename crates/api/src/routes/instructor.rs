use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/instructors",
            post(handlers::instructor::create_instructor)
                .get(handlers::instructor::list_instructors)
                .delete(handlers::instructor::delete_all_instructors),
        )
        .route(
            "/api/instructors/specialties",
            get(handlers::instructor::instructors_by_specialties),
        )
        .route(
            "/api/instructors/available",
            get(handlers::instructor::instructors_available),
        )
        .route(
            "/api/instructors/:id",
            get(handlers::instructor::get_instructor)
                .put(handlers::instructor::update_instructor)
                .delete(handlers::instructor::delete_instructor),
        )
}
