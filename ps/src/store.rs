//! Key-value backends: file-backed and in-memory

use eyre::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Storage seam consumed by the planning board.
///
/// Keys are short stable names ("planner-document", "domain-colors", ...);
/// values are opaque strings (JSON documents or bare flags). A missing key
/// is `Ok(None)`, never an error.
pub trait KvBackend {
    /// Read the value stored under `key`, if any
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value under `key`; removing an absent key is fine
    fn delete(&self, key: &str) -> Result<()>;

    /// List all keys currently stored
    fn list_keys(&self) -> Result<Vec<String>>;
}

/// File-backed store: one flat file per key under a base directory
pub struct FileStore {
    /// Base path for storage
    base_path: PathBuf,
}

impl FileStore {
    /// Open or create a store at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let base_path = path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path).context("Failed to create store directory")?;
        debug!(?base_path, "Opened file store");
        Ok(Self { base_path })
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        // Keys are flat names; path separators would escape the base dir
        if key.is_empty() || key.contains('/') || key.contains('\\') || key.contains("..") {
            return Err(eyre::eyre!("Invalid store key: {}", key));
        }
        Ok(self.base_path.join(key))
    }
}

impl KvBackend for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(&path).context(format!("Failed to read store key: {}", key))?;
        Ok(Some(value))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        fs::write(&path, value).context(format!("Failed to write store key: {}", key))?;
        debug!(key, bytes = value.len(), "Saved store key");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        if path.exists() {
            fs::remove_file(&path).context(format!("Failed to delete store key: {}", key))?;
        }
        Ok(())
    }

    fn list_keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();

        for entry in fs::read_dir(&self.base_path)? {
            let entry = entry?;
            if entry.path().is_file()
                && let Some(name) = entry.file_name().to_str()
            {
                keys.push(name.to_string());
            }
        }

        keys.sort();
        Ok(keys)
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvBackend for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().map_err(|_| eyre::eyre!("Store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| eyre::eyre!("Store lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| eyre::eyre!("Store lock poisoned"))?;
        entries.remove(key);
        Ok(())
    }

    fn list_keys(&self) -> Result<Vec<String>> {
        let entries = self.entries.lock().map_err(|_| eyre::eyre!("Store lock poisoned"))?;
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}
