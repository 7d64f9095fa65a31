//! Database library providing the MongoDB connector and shared connection utilities
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB support
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, client_from_config, database_from_config};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "homeviu");
//! let client = client_from_config(&config).await?;
//! let db = database_from_config(&client, &config);
//! let items = db.collection::<Document>("items");
//! ```

// Always available modules
pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{RetryConfig, retry_with_backoff};
