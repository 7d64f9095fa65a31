pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Status marker carried by every error envelope
pub const ERROR_STATUS: &str = "error";

/// Error envelope returned for every failed request.
///
/// Carries only a status marker and a message that is safe to show to
/// callers; fault details stay in the logs.
///
/// ```json
/// { "status": "error", "message": "Internal search error" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `"error"`
    #[schema(example = "error")]
    pub status: String,
    /// Generic, caller-facing description
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: ERROR_STATUS.to_string(),
            message: message.into(),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    /// A server-side fault. `message` is returned to the caller, `detail` is
    /// only logged.
    #[error("{message}: {detail}")]
    Internal {
        code: ErrorCode,
        message: &'static str,
        detail: String,
    },

    #[error("Not Found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn internal(code: ErrorCode, message: &'static str, detail: impl Into<String>) -> Self {
        Self::Internal {
            code,
            message,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Internal {
                code,
                message,
                detail,
            } => {
                tracing::error!(
                    error_code = code.code(),
                    error_kind = code.as_str(),
                    error = %detail,
                    "{}",
                    message
                );
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
            AppError::NotFound(msg) => {
                tracing::debug!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
