//! # SwimSync API
//!
//! HTTP transport for the swim lesson scheduler. Handlers are thin: they
//! decode requests, call into the `swimsync-core` services and map
//! `ScheduleError` to status codes.
//!
//! ## Architecture
//!
//! - **Routes**: API endpoints and URL structure
//! - **Handlers**: request decoding and service calls
//! - **Middleware**: error-to-response mapping
//! - **Config**: environment configuration

/// Configuration module for API settings
pub mod config;
pub mod handlers;
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use eyre::Result;
use swimsync_core::{
    repository::{InstructorRepository, LessonRepository},
    service::{InstructorService, LessonService},
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    pub instructors: InstructorService,
    pub lessons: LessonService,
}

impl ApiState {
    pub fn new(
        instructors: Arc<dyn InstructorRepository>,
        lessons: Arc<dyn LessonRepository>,
    ) -> Self {
        Self {
            instructors: InstructorService::new(instructors.clone()),
            lessons: LessonService::new(instructors, lessons),
        }
    }
}

/// Builds the application router with every route and the shared state.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        .merge(routes::instructor::routes())
        .merge(routes::lesson::routes())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(origins)
}

/// Starts the API server with the provided configuration and state
///
/// Sets up logging, applies CORS and the request timeout, then serves until
/// the listener fails.
///
/// # Example
///
/// ```no_run
/// # use std::sync::Arc;
/// # use swimsync_api::{ApiState, config::ApiConfig, start_server};
/// # use swimsync_db::PgStore;
/// # async fn run() -> eyre::Result<()> {
/// let config = ApiConfig::from_env()?;
/// let pool = swimsync_db::create_pool(&config.database_url, config.database_max_connections).await?;
/// let store = Arc::new(PgStore::new(pool));
/// start_server(config, ApiState::new(store.clone(), store)).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig, state: ApiState) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let app = build_router(Arc::new(state));

    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(axum::error_handling::HandleErrorLayer::new(
                |_: tower::BoxError| async { axum::http::StatusCode::REQUEST_TIMEOUT },
            ))
            .timeout(Duration::from_secs(config.request_timeout)),
    );

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
