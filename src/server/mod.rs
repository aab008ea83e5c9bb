//! HTTP surface: router construction and shared request state

pub mod handlers;

use crate::domain::MeetingAnalyzer;
use crate::ports::transcription::TranscriptionPort;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Uploaded recordings can be long; cap the body well above typical sizes.
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    pub transcription: Arc<dyn TranscriptionPort>,
    pub analyzer: Arc<MeetingAnalyzer>,
}

/// Build the application router.
///
/// CORS is wide open, matching the original deployment where the static
/// frontend is served from a different origin.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/upload-audio", post(handlers::upload_audio))
        .route("/process-text", post(handlers::process_text))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
