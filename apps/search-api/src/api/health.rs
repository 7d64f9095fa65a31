//! Readiness endpoint

use axum::{Router, extract::State, response::Response, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Body of `GET /ready`
#[derive(Serialize, ToSchema)]
pub struct ReadyResponse {
    /// `"ready"` or `"not ready"`
    #[schema(example = "ready")]
    pub status: String,
    /// `"connected"` or `"disconnected"`
    #[schema(example = "connected")]
    pub mongodb: String,
}

/// Create the readiness router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - pings MongoDB
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "MongoDB is reachable", body = ReadyResponse),
        (status = 503, description = "MongoDB is unreachable", body = ReadyResponse)
    )
)]
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    let client = state.mongo_client.clone();
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "mongodb",
        Box::pin(async move {
            database::mongodb::ping(&client)
                .await
                .map(|_| ())
                .map_err(|e| e.to_string())
        }),
    )];

    run_health_checks(checks).await
}
