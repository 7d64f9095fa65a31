#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_first, env_parse};

/// Connection string used when no environment override is present
pub const DEFAULT_URL: &str = "mongodb://localhost:27017/homeviu";

/// Database used when neither the config nor the connection string names one
pub const DEFAULT_DATABASE: &str = "homeviu";

/// MongoDB connection settings
///
/// Can be constructed manually or loaded from environment variables (with the
/// `config` feature).
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::new("mongodb://localhost:27017/homeviu");
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "homeviu");
/// let config = MongoConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Connection string
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub url: String,

    /// Database name; when `None` the connection string's default database is used
    pub database: Option<String>,

    /// Optional application name reported in server logs
    pub app_name: Option<String>,

    pub max_pool_size: u32,

    pub min_pool_size: u32,

    /// TCP connect timeout in seconds
    pub connect_timeout_secs: u64,

    /// How long an operation waits for a usable server before failing, in seconds
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    /// Config for `url`, taking the database name from the connection string.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Config for `url` with an explicit database name.
    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: Some(database.into()),
            ..Self::default()
        }
    }

    pub fn with_pool_size(mut self, max_pool_size: u32, min_pool_size: u32) -> Self {
        self.max_pool_size = max_pool_size;
        self.min_pool_size = min_pool_size;
        self
    }

    pub fn with_server_selection_timeout(mut self, secs: u64) -> Self {
        self.server_selection_timeout_secs = secs;
        self
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Connection string with any password replaced by `****`, for logging.
    pub fn redacted_url(&self) -> String {
        let Some((scheme, rest)) = self.url.split_once("://") else {
            return self.url.clone();
        };
        let authority_end = rest.find('/').unwrap_or(rest.len());
        let (authority, tail) = rest.split_at(authority_end);

        match authority.rsplit_once('@') {
            Some((credentials, hosts)) => {
                let user = credentials.split(':').next().unwrap_or_default();
                format!("{}://{}:****@{}{}", scheme, user, hosts, tail)
            }
            None => self.url.clone(),
        }
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            database: None,
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 10,
        }
    }
}

/// Load MongoConfig from environment variables
///
/// - `MONGODB_URI`, `MONGODB_URL` or `MONGO_URL` (default: [`DEFAULT_URL`])
/// - `MONGODB_DATABASE` or `MONGO_DATABASE` (default: database named in the URL)
/// - `MONGODB_APP_NAME` (optional)
/// - `MONGODB_MAX_POOL_SIZE` (default: 100)
/// - `MONGODB_MIN_POOL_SIZE` (default: 5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (default: 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (default: 10)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let url = env_first(&["MONGODB_URI", "MONGODB_URL", "MONGO_URL"]).unwrap_or(defaults.url);
        let database = env_first(&["MONGODB_DATABASE", "MONGO_DATABASE"]);
        let app_name = std::env::var("MONGODB_APP_NAME").ok();

        Ok(Self {
            url,
            database,
            app_name,
            max_pool_size: env_parse("MONGODB_MAX_POOL_SIZE", defaults.max_pool_size)?,
            min_pool_size: env_parse("MONGODB_MIN_POOL_SIZE", defaults.min_pool_size)?,
            connect_timeout_secs: env_parse(
                "MONGODB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            )?,
            server_selection_timeout_secs: env_parse(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                defaults.server_selection_timeout_secs,
            )?,
        })
    }
}
