//! File-based SettingsRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{Document, RepositoryError, Result, SettingsRepository};

/// JSON file holding the settings document (`worlds.json`).
///
/// # Reading
///
/// - Missing file: `None`
/// - Empty or whitespace-only file, or `null`: empty document. Older builds
///   created the file empty before importing.
/// - Anything other than a JSON object at the top level: `CorruptedData`.
///   Loading nothing and saving over it later would destroy the file.
///
/// # Writing
///
/// Written to `<name>.tmp` first, then renamed over the target, so a crash
/// mid-write leaves the previous document intact.
pub struct FileSettingsRepository {
    path: PathBuf,
}

impl FileSettingsRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SettingsRepository for FileSettingsRepository {
    fn read(&self) -> Result<Option<Document>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            tracing::debug!("Settings file {} is empty", self.path.display());
            return Ok(Some(Document::new()));
        }

        let value: Value =
            serde_json::from_str(&contents).map_err(|e| RepositoryError::Json(e.to_string()))?;

        match value {
            Value::Object(document) => {
                tracing::debug!(
                    "Read {} world entries from {}",
                    document.len(),
                    self.path.display()
                );
                Ok(Some(document))
            }
            Value::Null => Ok(Some(Document::new())),
            other => Err(RepositoryError::CorruptedData(format!(
                "{} must contain a JSON object, found {}",
                self.path.display(),
                json_kind(&other)
            ))),
        }
    }

    fn write(&self, document: &Document) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.temp_path();

        // Write to temp file
        let json = serde_json::to_string_pretty(document)
            .map_err(|e| RepositoryError::Json(e.to_string()))?;
        fs::write(&temp_path, json)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(
            "Wrote {} world entries to {}",
            document.len(),
            self.path.display()
        );

        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn document(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_missing_file_reads_none() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileSettingsRepository::new(temp_dir.path().join("worlds.json"));
        assert!(repo.read().unwrap().is_none());
    }

    #[test]
    fn test_empty_file_reads_empty_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("worlds.json");
        fs::write(&path, "").unwrap();

        let repo = FileSettingsRepository::new(&path);
        assert_eq!(repo.read().unwrap(), Some(Document::new()));

        fs::write(&path, "  \n").unwrap();
        assert_eq!(repo.read().unwrap(), Some(Document::new()));
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileSettingsRepository::new(temp_dir.path().join("worlds.json"));

        let doc = document(json!({"lobby": {"kbEnabled": true}}));
        repo.write(&doc).unwrap();

        assert_eq!(repo.read().unwrap(), Some(doc));
        assert!(!temp_dir.path().join("worlds.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plugins").join("pvp").join("worlds.json");
        let repo = FileSettingsRepository::new(&path);

        repo.write(&Document::new()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_non_object_is_corrupted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("worlds.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let repo = FileSettingsRepository::new(&path);
        assert!(matches!(
            repo.read(),
            Err(RepositoryError::CorruptedData(_))
        ));
    }

    #[test]
    fn test_invalid_json_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("worlds.json");
        fs::write(&path, "{ not json").unwrap();

        let repo = FileSettingsRepository::new(&path);
        assert!(matches!(repo.read(), Err(RepositoryError::Json(_))));
    }
}
