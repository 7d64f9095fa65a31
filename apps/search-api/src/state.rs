//! Application state management.
//!
//! Shared state passed to the routers that need the database directly.

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloned per router (inexpensive; the client shares one connection pool).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client, connected lazily
    pub mongo_client: Client,
    /// Database holding the item collection
    pub db: Database,
}
