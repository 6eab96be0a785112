//! Key-value store implementations for desktop hosts.
//!
//! `MemoryStore` backs tests and demos; `JsonFileStore` persists a flat JSON
//! object to disk, the desktop analogue of browser local storage.

use async_trait::async_trait;
use bridge_traits::{BridgeError, KeyValueStore, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// In-memory key-value store.
#[derive(Default)]
pub struct MemoryStore {
    entries: parking_lot::Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.entries.lock().clear();
        Ok(())
    }
}

/// File-backed key-value store persisting a single JSON object.
///
/// Every mutation rewrites the whole file, which is fine for the small app
/// state this carries (a handful of accounts). Reads are served from the
/// in-memory map loaded at construction.
pub struct JsonFileStore {
    path: PathBuf,
    entries: tokio::sync::Mutex<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Open (or create) the store at `path`. A missing file starts empty; a
    /// corrupt file is treated as empty rather than failing the host.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(BridgeError::Io)?;
        }

        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                debug!(path = %path.display(), error = %e, "resetting corrupt store file");
                HashMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(BridgeError::Io(e)),
        };

        Ok(Self {
            path,
            entries: tokio::sync::Mutex::new(entries),
        })
    }

    async fn flush(&self, entries: &HashMap<String, String>) -> Result<()> {
        let raw = serde_json::to_string_pretty(entries)
            .map_err(|e| BridgeError::StorageError(e.to_string()))?;
        tokio::fs::write(&self.path, raw).await.map_err(BridgeError::Io)
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().await;
        entries.remove(key);
        self.flush(&entries).await
    }

    async fn clear(&self) -> Result<()> {
        let mut entries = self.entries.lock().await;
        entries.clear();
        self.flush(&entries).await
    }
}
