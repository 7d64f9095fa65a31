//! API routes module
//!
//! All routes are mounted at the root: `/`, `/health`, `/ready`, `/search`.

pub mod health;
pub mod search;

use axum::Router;
use axum_helpers::liveness_router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(liveness_router(state.config.app.clone()))
        .merge(health::router(state.clone()))
        .merge(search::router(state))
}
