//! Trace upload handler

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::response::Response;

use crate::response;
use crate::services::upload::UploadService;
use crate::state::AppState;

/// Upload trace handler
///
/// Accepts one multipart form field named `gpxfile` and delegates to
/// [`UploadService`] for validation and storage. Always answers HTTP 200
/// with one of the two XML response shapes; failures are reported through
/// the `errorCode` attribute.
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_trace"))]
pub async fn upload_trace(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Response {
    let service = UploadService::new(&state);
    match service.upload(multipart).await {
        Ok(filename) => response::success(&filename),
        Err(err) => response::error(&err),
    }
}
