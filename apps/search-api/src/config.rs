use core_config::{AppInfo, FromEnv, app_info, env_or_default, env_parse, server::ServerConfig};
use database::mongodb::MongoConfig;
use std::time::Duration;

pub use core_config::Environment;

/// Name reported by `/` and `/health` unless `SERVICE_NAME` overrides it
pub const DEFAULT_SERVICE_NAME: &str = "cs361g22-search";

/// Collection searched unless `MONGODB_COLLECTION` overrides it
pub const DEFAULT_COLLECTION: &str = "items";

/// Default per-lookup budget in milliseconds
pub const DEFAULT_SEARCH_TIMEOUT_MS: u64 = 5000;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    pub collection: String,
    pub search_timeout: Duration,
    /// Empty means any origin
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        let app = app_info!().with_name(env_or_default("SERVICE_NAME", DEFAULT_SERVICE_NAME));
        let collection = env_or_default("MONGODB_COLLECTION", DEFAULT_COLLECTION);
        let search_timeout =
            Duration::from_millis(env_parse("SEARCH_TIMEOUT_MS", DEFAULT_SEARCH_TIMEOUT_MS)?);
        let cors_allowed_origins =
            parse_origins(&env_or_default("CORS_ALLOWED_ORIGIN", ""));

        Ok(Self {
            app,
            mongodb,
            server,
            environment,
            collection,
            search_timeout,
            cors_allowed_origins,
        })
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_owned)
        .collect()
}
