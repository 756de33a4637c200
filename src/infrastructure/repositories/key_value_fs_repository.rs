use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use crate::application::ports::i18n_ports::KeyValueStorePort;
use crate::common::errors::{DomainError, ErrorContext};

/// Key-value store persisted as a single JSON object file.
///
/// Every write rewrites the whole file through a temporary sibling and a
/// rename, so a crash never leaves a truncated document behind.
pub struct JsonFileKeyValueStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within the process
    write_lock: Mutex<()>,
}

impl JsonFileKeyValueStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, DomainError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read preferences file {:?}", self.path))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        let entries = serde_json::from_str(&content)?;
        Ok(entries)
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json).with_context(|| format!("Failed to write {:?}", temp_path))?;
        fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Failed to replace preferences file {:?}", self.path))?;
        Ok(())
    }
}

impl KeyValueStorePort for JsonFileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)?;
        tracing::debug!("Persisted preference {} = {}", key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_and_get_across_instances() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("preferences.json");

        let store = JsonFileKeyValueStore::new(path.clone());
        assert_eq!(store.get("feedfind-locale").unwrap(), None);
        store.set("feedfind-locale", "es").unwrap();
        store.set("other", "value").unwrap();

        let reopened = JsonFileKeyValueStore::new(path);
        assert_eq!(reopened.get("feedfind-locale").unwrap(), Some("es".to_string()));
        assert_eq!(reopened.get("other").unwrap(), Some("value".to_string()));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("preferences.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonFileKeyValueStore::new(path);
        let err = store.get("feedfind-locale").unwrap_err();
        assert_eq!(err.entity_type, "Serialization");
    }

    #[test]
    fn test_empty_file_reads_as_empty() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("preferences.json");
        std::fs::write(&path, "").unwrap();

        let store = JsonFileKeyValueStore::new(path);
        assert_eq!(store.get("feedfind-locale").unwrap(), None);
    }
}
