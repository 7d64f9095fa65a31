//! MongoDB connector and utilities
//!
//! Provides client construction from config, connectivity checks and database
//! name resolution.

mod config;
mod connector;
mod health;

pub use config::{DEFAULT_DATABASE, DEFAULT_URL, MongoConfig};
pub use connector::{
    MongoError, client_from_config, database_from_config,
    verify_connection, verify_with_retry,
};
pub use health::ping;

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
