//! Repository contract for the backing settings document.

use serde_json::{Map, Value};

use super::Result;

/// Backing document: world name to encoded record payload.
pub type Document = Map<String, Value>;

/// Storage for the settings document.
pub trait SettingsRepository: Send + Sync {
    /// Read the document.
    ///
    /// Returns `Ok(None)` if nothing has been stored yet. That absence is what
    /// triggers the legacy import.
    fn read(&self) -> Result<Option<Document>>;

    /// Replace the stored document.
    fn write(&self, document: &Document) -> Result<()>;

    /// Human-readable location, for logs and errors.
    fn location(&self) -> String;
}

impl<R: SettingsRepository + ?Sized> SettingsRepository for std::sync::Arc<R> {
    fn read(&self) -> Result<Option<Document>> {
        (**self).read()
    }

    fn write(&self, document: &Document) -> Result<()> {
        (**self).write(document)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
