//! File locations used by the store.
use std::env;
use std::path::PathBuf;

/// Where the store keeps its backing document and looks for the legacy config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Plugin data folder. Both files live directly inside it.
    pub data_dir: PathBuf,
    pub backing_file: String,
    pub legacy_file: String,
}

impl StoreConfig {
    pub const DEFAULT_BACKING_FILE: &'static str = "worlds.json";
    pub const DEFAULT_LEGACY_FILE: &'static str = "config.yml";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            backing_file: Self::DEFAULT_BACKING_FILE.to_string(),
            legacy_file: Self::DEFAULT_LEGACY_FILE.to_string(),
        }
    }

    /// `<data_dir>/worlds.json` unless overridden.
    pub fn backing_path(&self) -> PathBuf {
        self.data_dir.join(&self.backing_file)
    }

    /// `<data_dir>/config.yml` unless overridden.
    pub fn legacy_path(&self) -> PathBuf {
        self.data_dir.join(&self.legacy_file)
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WORLD_STORE_DATA_DIR` - Plugin data folder (default: platform-specific)
    /// - `WORLD_STORE_BACKING_FILE` - Backing document name (default: `worlds.json`)
    /// - `WORLD_STORE_LEGACY_FILE` - Legacy config name (default: `config.yml`)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`StoreConfig::from_env`], reading variables through `lookup`.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = non_empty(lookup("WORLD_STORE_DATA_DIR")) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(name) = non_empty(lookup("WORLD_STORE_BACKING_FILE")) {
            config.backing_file = name;
        }

        if let Some(name) = non_empty(lookup("WORLD_STORE_LEGACY_FILE")) {
            config.legacy_file = name;
        }

        config
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(default_data_dir())
    }
}

/// Platform data directory for the store.
///
/// - Linux: `~/.local/share/world-store` (or `$XDG_DATA_HOME/world-store`)
/// - macOS: `~/Library/Application Support/world-store`
/// - Windows: `%APPDATA%\world-store`
/// - Fallback: `./plugin_data`
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "world-store")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./plugin_data"))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_file_names() {
        let config = StoreConfig::new("/srv/plugin");
        assert_eq!(config.backing_path(), PathBuf::from("/srv/plugin/worlds.json"));
        assert_eq!(config.legacy_path(), PathBuf::from("/srv/plugin/config.yml"));
    }

    #[test]
    fn test_from_vars_overrides() {
        let vars: HashMap<&str, &str> = [
            ("WORLD_STORE_DATA_DIR", "/srv/plugin"),
            ("WORLD_STORE_BACKING_FILE", "settings.json"),
        ]
        .into_iter()
        .collect();

        let config = StoreConfig::from_vars(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.data_dir, PathBuf::from("/srv/plugin"));
        assert_eq!(config.backing_file, "settings.json");
        assert_eq!(config.legacy_file, StoreConfig::DEFAULT_LEGACY_FILE);
    }

    #[test]
    fn test_blank_vars_ignored() {
        let config = StoreConfig::from_vars(|key| {
            (key == "WORLD_STORE_BACKING_FILE").then(|| "  ".to_string())
        });
        assert_eq!(config.backing_file, StoreConfig::DEFAULT_BACKING_FILE);
    }
}
