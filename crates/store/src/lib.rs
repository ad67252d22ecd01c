//! Per-world settings store for the combat plugin.
//!
//! [`WorldStore`] keeps one [`world_core::WorldRecord`] per world, backed by a
//! JSON document on disk. Worlds that were never configured get a default
//! record on first access. On first start the store imports the older
//! `config.yml` format through [`LegacyImporter`].
//!
//! Modules are organized by responsibility:
//! - [`store`] hosts the store itself
//! - [`repository`] reads and writes the backing document
//! - [`legacy`] decodes the old configuration file
//! - [`host`] provides an in-memory [`world_core::HostGateway`] for tests and local runs
//! - [`config`] resolves file locations
pub mod config;
pub mod error;
pub mod host;
pub mod legacy;
pub mod repository;
pub mod store;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use host::{InMemoryHost, InMemoryWorld};
pub use legacy::LegacyImporter;
pub use repository::{
    Document, FileSettingsRepository, InMemorySettingsRepository, RepositoryError,
    SettingsRepository,
};
pub use store::WorldStore;
