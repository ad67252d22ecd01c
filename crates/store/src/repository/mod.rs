//! Repository layer for the backing settings document.
//!
//! The store decodes and encodes records; repositories only move a JSON
//! object in and out of storage.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileSettingsRepository;
pub use memory::InMemorySettingsRepository;
pub use traits::{Document, SettingsRepository};
