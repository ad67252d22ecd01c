//! In-memory SettingsRepository implementation for tests and local runs.

use std::sync::RwLock;

use super::{Document, RepositoryError, Result, SettingsRepository};

/// In-memory implementation of SettingsRepository.
#[derive(Default)]
pub struct InMemorySettingsRepository {
    document: RwLock<Option<Document>>,
}

impl InMemorySettingsRepository {
    /// Create a repository with nothing stored yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `document`.
    pub fn with_document(document: Document) -> Self {
        Self {
            document: RwLock::new(Some(document)),
        }
    }

    /// Copy of the stored document, if any.
    pub fn snapshot(&self) -> Option<Document> {
        self.document.read().ok().and_then(|doc| doc.clone())
    }
}

impl SettingsRepository for InMemorySettingsRepository {
    fn read(&self) -> Result<Option<Document>> {
        let document = self
            .document
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(document.clone())
    }

    fn write(&self, document: &Document) -> Result<()> {
        let mut stored = self
            .document
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *stored = Some(document.clone());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
