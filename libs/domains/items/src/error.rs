use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorCode};
use mongodb::error::ErrorKind;
use std::time::Duration;
use thiserror::Error;

/// The only message a caller ever sees for a failed search
pub const SEARCH_ERROR_MESSAGE: &str = "Internal search error";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Search timed out after {0:?}")]
    Timeout(Duration),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type SearchResult<T> = Result<T, SearchError>;

impl SearchError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SearchError::Database(e) if matches!(*e.kind, ErrorKind::BsonDeserialization(_)) => {
                ErrorCode::DatabaseDecode
            }
            SearchError::Database(_) => ErrorCode::DatabaseError,
            SearchError::Timeout(_) => ErrorCode::DatabaseTimeout,
            SearchError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

/// Every search fault becomes the same generic 500; the detail is only logged.
impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        AppError::internal(err.code(), SEARCH_ERROR_MESSAGE, err.to_string())
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
