/// Error types for IndianMeet
///
/// Uses thiserror for ergonomic error handling with proper Display implementations.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transcription service error: {0}")]
    Transcription(String),

    #[error("Analysis service error: {0}")]
    Analysis(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Render errors as an HTTP status plus a `{"detail": ...}` body.
///
/// Upstream service failures surface as 502 so callers can tell them apart
/// from local faults; bad uploads are 422; everything else is 500.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Transcription(_) | AppError::Analysis(_) => StatusCode::BAD_GATEWAY,
            AppError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        log::error!("Request failed ({}): {}", status, self);

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
