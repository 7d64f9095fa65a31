use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use core_config::AppInfo;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;
use utoipa::{OpenApi, ToSchema};

/// Status marker of the liveness endpoints
pub const OK_STATUS: &str = "ok";

/// Body of `GET /`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "cs361g22-search")]
    pub service: String,
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "cs361g22-search")]
    pub service: String,
    /// Seconds since the process started serving
    #[schema(example = 12.5)]
    pub uptime: f64,
    /// Current time, milliseconds since the Unix epoch
    #[schema(example = 1730000000000i64)]
    pub timestamp: i64,
}

/// Shared state of the liveness router
#[derive(Clone)]
pub struct LivenessState {
    app: Arc<AppInfo>,
    started_at: Instant,
}

/// OpenAPI paths for the liveness endpoints.
#[derive(OpenApi)]
#[openapi(
    paths(root_handler, health_handler),
    components(schemas(ServiceResponse, HealthResponse)),
    tags((name = "health", description = "Liveness probes"))
)]
pub struct HealthApiDoc;

/// Service identity. Always 200 while the process is up.
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "Service is running", body = ServiceResponse))
)]
pub async fn root_handler(State(state): State<LivenessState>) -> Json<ServiceResponse> {
    Json(ServiceResponse {
        status: OK_STATUS.to_string(),
        service: state.app.name.clone(),
    })
}

/// Liveness with uptime. Does not touch the database.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is alive", body = HealthResponse))
)]
pub async fn health_handler(State(state): State<LivenessState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: OK_STATUS.to_string(),
        service: state.app.name.clone(),
        uptime: state.started_at.elapsed().as_secs_f64(),
        timestamp: chrono::Utc::now().timestamp_millis(),
    })
}

/// Router serving `/` and `/health` for `app_info`.
///
/// Uptime is measured from the moment this router is built.
pub fn liveness_router(app_info: AppInfo) -> Router {
    let state = LivenessState {
        app: Arc::new(app_info),
        started_at: Instant::now(),
    };

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// A boxed future for health checks with a string error
pub type HealthCheckFuture<'a> = Pin<Box<dyn Future<Output = Result<(), String>> + Send + 'a>>;

/// Runs readiness checks concurrently and aggregates them.
///
/// Answers 200 `{"status":"ready", <name>:"connected", ...}` when every
/// check passes, otherwise 503 with `"not ready"` and the failing checks
/// marked `"disconnected"`.
///
/// ```ignore
/// let checks: Vec<(&str, HealthCheckFuture)> = vec![(
///     "mongodb",
///     Box::pin(async move { ping(&client).await.map(|_| ()).map_err(|e| e.to_string()) }),
/// )];
/// run_health_checks(checks).await
/// ```
pub async fn run_health_checks(checks: Vec<(&str, HealthCheckFuture<'_>)>) -> Response {
    let (names, futures): (Vec<_>, Vec<_>) = checks.into_iter().unzip();
    let results = join_all(futures).await;

    let mut body = Map::new();
    let mut all_healthy = true;

    for (name, result) in names.into_iter().zip(results) {
        let status = match result {
            Ok(()) => "connected",
            Err(e) => {
                tracing::warn!(check = name, error = %e, "Readiness check failed");
                all_healthy = false;
                "disconnected"
            }
        };
        body.insert(name.to_string(), json!(status));
    }

    let (code, status) = if all_healthy {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not ready")
    };
    body.insert("status".to_string(), json!(status));

    (code, Json(Value::Object(body))).into_response()
}
