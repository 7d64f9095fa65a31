//! Search route wiring

use axum::Router;
use domain_items::{MongoItemRepository, SearchService, handlers};

use crate::state::AppState;

/// `GET /search` backed by the configured MongoDB collection.
///
/// The lookup timeout bounds both the client-side wait and the server-side
/// `maxTimeMS`.
pub fn router(state: &AppState) -> Router {
    let timeout = state.config.search_timeout;
    let repository = MongoItemRepository::with_collection(state.db.clone(), &state.config.collection)
        .with_max_time(timeout);
    let service = SearchService::new(repository).with_timeout(timeout);

    handlers::router(service)
}
