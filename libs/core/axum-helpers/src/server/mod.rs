//! Server infrastructure.
//!
//! - Router assembly with the OpenAPI document and shared middleware
//! - Liveness endpoints and readiness aggregation
//! - Graceful shutdown coordination
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, liveness_router};
//!
//! let routes = Router::new().merge(liveness_router(app_info)).merge(api_routes);
//! let router = create_router::<ApiDoc>(routes, cors);
//! create_production_app(router, &config.server, async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{OPENAPI_PATH, create_production_app, create_router, serve_until_shutdown};
pub use health::{
    HealthApiDoc, HealthCheckFuture, HealthResponse, ServiceResponse, liveness_router,
    run_health_checks,
};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
