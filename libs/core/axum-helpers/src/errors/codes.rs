//! Type-safe error codes attached to error logs.
//!
//! Codes never reach the response body (clients only see the envelope's
//! message); they exist so log aggregation can group faults.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::DatabaseTimeout;
//! assert_eq!(code.as_str(), "DATABASE_TIMEOUT");
//! assert_eq!(code.code(), 2013);
//! ```

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// No route matches the request
    NotFound,

    /// An unexpected internal server error occurred
    InternalError,

    // Database errors (2000-2999)
    /// Query execution or connectivity failure
    DatabaseError,

    /// Stored document could not be decoded
    DatabaseDecode,

    /// Lookup exceeded its time budget
    DatabaseTimeout,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::DatabaseDecode => "DATABASE_DECODE",
            Self::DatabaseTimeout => "DATABASE_TIMEOUT",
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::DatabaseError => 2003,
            Self::DatabaseDecode => 2010,
            Self::DatabaseTimeout => 2013,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
