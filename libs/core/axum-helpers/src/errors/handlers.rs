use axum::response::{IntoResponse, Response};

use super::AppError;

/// Fallback handler for unmatched routes, answering with the JSON error envelope.
pub async fn not_found() -> Response {
    AppError::NotFound("Not found".to_string()).into_response()
}
