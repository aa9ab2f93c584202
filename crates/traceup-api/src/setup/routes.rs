//! Route configuration and setup

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Headroom on top of the configured maximum filesize for multipart framing
/// overhead. Bodies beyond this are cut off before they reach the handler;
/// anything smaller still gets a proper in-band size error.
const BODY_LIMIT_OVERHEAD: u64 = 64 * 1024;

/// Setup all application routes
pub fn setup_routes(state: Arc<AppState>) -> Router<()> {
    let body_limit = (state.config.max_filesize * 2 + BODY_LIMIT_OVERHEAD) as usize;

    Router::new()
        .route("/upload", post(handlers::upload_trace))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe
async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
