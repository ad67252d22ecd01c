//! Builds the world store for a host.
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use world_core::HostGateway;
use world_store::{StoreConfig, WorldStore};

/// Builder that prepares the data folder and opens the store.
pub struct StoreBuilder {
    config: StoreConfig,
}

impl StoreBuilder {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Override the plugin data folder.
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.data_dir = dir.into();
        self
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn build<H: HostGateway>(self, host: Arc<H>) -> Result<WorldStore<H>> {
        std::fs::create_dir_all(&self.config.data_dir).with_context(|| {
            format!(
                "Failed to create data directory {}",
                self.config.data_dir.display()
            )
        })?;

        let store = WorldStore::open(&self.config, host).with_context(|| {
            format!(
                "Failed to open world settings at {}",
                self.config.backing_path().display()
            )
        })?;

        tracing::info!(
            "World store ready: {} worlds from {}",
            store.len(),
            store.location()
        );

        Ok(store)
    }
}
