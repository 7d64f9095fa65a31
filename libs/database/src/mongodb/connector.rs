use mongodb::{Client, Database, options::ClientOptions};
use std::time::Duration;
use tracing::warn;

use super::health::ping;
use super::{DEFAULT_DATABASE, MongoConfig};
use crate::common::{RetryConfig, retry_with_backoff};

/// Error type for MongoDB connection management
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Build a client from `config` without contacting the server.
///
/// The driver connects lazily and keeps reconnecting in the background, so a
/// client built while the server is down becomes usable once it comes back.
pub async fn client_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    Ok(Client::with_options(options)?)
}

/// Ping the deployment, mapping any failure to [`MongoError::ConnectionFailed`].
pub async fn verify_connection(client: &Client) -> Result<(), MongoError> {
    ping(client)
        .await
        .map(|_| ())
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))
}

/// Ping the deployment, retrying with exponential backoff.
///
/// Uses [`RetryConfig::default`] when `retry_config` is `None`.
pub async fn verify_with_retry(
    client: &Client,
    retry_config: Option<RetryConfig>,
) -> Result<(), MongoError> {
    let config = retry_config.unwrap_or_default();

    retry_with_backoff(|| verify_connection(client), config)
        .await
        .inspect_err(|e| warn!(error = %e, "MongoDB is unreachable"))
}

/// Resolve the database to use: the configured name, else the one named in
/// the connection string, else [`DEFAULT_DATABASE`].
pub fn database_from_config(client: &Client, config: &MongoConfig) -> Database {
    match config.database.as_deref() {
        Some(name) => client.database(name),
        None => client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
    }
}
