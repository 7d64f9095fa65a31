//! Common utilities shared across database connectors

pub mod retry;

pub use retry::{RetryConfig, retry_with_backoff};
