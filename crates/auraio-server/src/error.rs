//! HTTP error types for the AuraIO server.
//!
//! Maps intake errors into HTTP responses. Every error produces a JSON body
//! `{"error": "<message>"}`. Validation messages are returned verbatim;
//! internal failures are logged here, once, and answered with a generic
//! message so no backend detail leaks to the visitor.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use auraio_core::error::IntakeError;

/// Message returned for every server-side failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal error";

/// Application-level error returned from HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Client sent invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Something failed on our side (store, unexpected state).
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "POST /api/leads failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_owned(),
                )
            }
        };

        (status, axum::Json(ErrorBody { error })).into_response()
    }
}

impl From<IntakeError> for AppError {
    fn from(err: IntakeError) -> Self {
        match err {
            IntakeError::Validation(inner) => {
                tracing::debug!(reason = %inner, "lead submission rejected");
                Self::BadRequest(inner.to_string())
            }
            IntakeError::Store(inner) => Self::Internal(inner.to_string()),
        }
    }
}
