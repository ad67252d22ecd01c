//! Plugin startup configuration and loaders.
use std::env;
use std::path::PathBuf;

use world_store::StoreConfig;

/// Configuration required to bring up logging and the store.
#[derive(Clone, Debug)]
pub struct BootstrapConfig {
    pub store: StoreConfig,
    /// When set, logs are also written to `<log_dir>/world-store.log`.
    pub log_dir: Option<PathBuf>,
    /// `EnvFilter` directives, e.g. `info` or `world_store=debug`.
    pub log_filter: String,
}

impl BootstrapConfig {
    pub const DEFAULT_LOG_FILTER: &'static str = "info";

    pub fn new(store: StoreConfig) -> Self {
        Self {
            store,
            log_dir: None,
            log_filter: Self::DEFAULT_LOG_FILTER.to_string(),
        }
    }

    /// Load a `.env` file if one exists (silently ignored otherwise), then
    /// read the process environment.
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WORLD_STORE_DATA_DIR`, `WORLD_STORE_BACKING_FILE`,
    ///   `WORLD_STORE_LEGACY_FILE` - see [`StoreConfig::from_env`]
    /// - `WORLD_STORE_LOG_DIR` - Directory for the log file (default: none, stderr only)
    /// - `RUST_LOG` - Log filter (default: `info`)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`BootstrapConfig::from_env`], reading variables through `lookup`.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new(StoreConfig::from_vars(&lookup));

        config.log_dir = lookup("WORLD_STORE_LOG_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        if let Some(filter) = lookup("RUST_LOG").filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        config
    }
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
