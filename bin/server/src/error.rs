//! Unified API error type.
//!
//! Every handler returns `Result<T, ApiError>`, which implements
//! [`IntoResponse`] so errors are converted to a JSON-body HTTP response
//! with the matching status code.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt;

/// Errors surfaced by request handlers.
#[derive(Debug)]
pub enum ApiError {
    /// The caller sent an invalid or malformed request.
    BadRequest(String),
    /// The caller referenced a resource that does not exist.
    NotFound(String),
    /// An unclassified internal server error.
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(reason) => write!(f, "bad request: {reason}"),
            Self::NotFound(reason) => write!(f, "not found: {reason}"),
            Self::Internal(reason) => write!(f, "internal error: {reason}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason),
            Self::NotFound(reason) => (StatusCode::NOT_FOUND, reason),
            Self::Internal(reason) => {
                tracing::error!(reason = %reason, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, reason)
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
