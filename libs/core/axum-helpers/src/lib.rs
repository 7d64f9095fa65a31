//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! - **[`server`]**: router assembly, liveness/readiness, graceful shutdown
//! - **[`http`]**: CORS and security header middleware
//! - **[`errors`]**: the JSON error envelope and error codes

pub mod errors;
pub mod http;
pub mod server;

pub use server::{
    HealthApiDoc, HealthCheckFuture, HealthResponse, OPENAPI_PATH, ServiceResponse,
    ShutdownCoordinator, create_production_app, create_router, liveness_router,
    run_health_checks, serve_until_shutdown, shutdown_signal,
};

pub use http::{cors_layer, create_cors_layer, create_permissive_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};
