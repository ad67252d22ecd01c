//! One-shot import of the old `config.yml` world settings.
//!
//! The old format kept every world under a top-level `worlds:` mapping:
//!
//! ```yaml
//! worlds:
//!   survival:
//!     attack-delay: 10
//!     knockback-xz: 0.4
//!     knockback-y: 0.4
//!     customkb: true
//! ```
//!
//! Only consulted when the JSON backing document does not exist yet.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use serde_yaml::Value as YamlValue;
use world_core::{WorldRecord, codec};

use crate::repository::{RepositoryError, Result};

const WORLDS_SECTION: &str = "worlds";

/// Reader for the legacy configuration file.
pub struct LegacyImporter {
    path: PathBuf,
}

impl LegacyImporter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw entries of the `worlds:` section, converted to JSON values.
    ///
    /// A missing file or a file without a `worlds:` mapping yields no entries.
    /// Entries whose key is not a string or number, or whose payload cannot be
    /// represented as JSON, are dropped with a warning.
    pub fn read_entries(&self) -> Result<Vec<(String, Value)>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let root: YamlValue =
            serde_yaml::from_str(&contents).map_err(|e| RepositoryError::Yaml(e.to_string()))?;

        let Some(worlds) = root.get(WORLDS_SECTION).and_then(YamlValue::as_mapping) else {
            tracing::debug!(
                "Legacy config {} has no '{}' section",
                self.path.display(),
                WORLDS_SECTION
            );
            return Ok(Vec::new());
        };

        let mut entries = Vec::with_capacity(worlds.len());
        for (key, payload) in worlds {
            let Some(world_name) = yaml_key(key) else {
                tracing::warn!("Skipping legacy world with unsupported key {:?}", key);
                continue;
            };

            match serde_yaml::from_value::<Value>(payload.clone()) {
                Ok(payload) => entries.push((world_name, payload)),
                Err(e) => {
                    tracing::warn!("Skipping legacy world '{}': {}", world_name, e);
                }
            }
        }

        Ok(entries)
    }

    /// Decode every legacy world that has the full set of legacy fields.
    ///
    /// Never fails: an unreadable file is logged and imports nothing.
    pub fn import(&self) -> Vec<WorldRecord> {
        let entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    "Could not read legacy config {}: {}",
                    self.path.display(),
                    e
                );
                return Vec::new();
            }
        };

        let mut records = Vec::with_capacity(entries.len());
        for (world_name, payload) in entries {
            match codec::try_decode_legacy(&world_name, &payload) {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!("Skipping legacy world: {}", e),
            }
        }

        if !records.is_empty() {
            tracing::info!(
                "Imported {} worlds from legacy config {}",
                records.len(),
                self.path.display()
            );
        }

        records
    }
}

fn yaml_key(key: &YamlValue) -> Option<String> {
    match key {
        YamlValue::String(name) => Some(name.clone()),
        YamlValue::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
