/// Identity of the running service, reported by health endpoints and logs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppInfo {
    /// Public service name (e.g. `cs361g22-search`)
    pub name: String,
    /// Crate version the binary was built from
    pub version: &'static str,
}

impl AppInfo {
    pub fn new(name: impl Into<String>, version: &'static str) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }

    /// Override the service name, keeping the build version.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Build an [`AppInfo`] from the calling crate's package metadata.
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    };
}
