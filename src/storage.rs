// SPDX-License-Identifier: MPL-2.0

//! Key-value storage backends for persisted history
//!
//! History blobs are stored as string values under well-known keys (see
//! [`crate::constants`]). [`FileStore`] is the production backend, one
//! file per key under the application data directory. [`MemoryStore`]
//! backs tests and simulations.

use crate::constants::APP_DIR_NAME;
use crate::errors::StoreError;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::debug;

/// Durable string-keyed blob store
///
/// `get` treats every failure as an absent key; only writes and removes
/// surface errors.
#[allow(async_fn_in_trait)]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key` entirely; removing an absent key is a no-op
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore> KeyValueStore for &S {
    async fn get(&self, key: &str) -> Option<String> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key).await
    }
}

impl<S: KeyValueStore> KeyValueStore for std::sync::Arc<S> {
    async fn get(&self, key: &str) -> Option<String> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key).await
    }
}

/// File-backed store, one file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`
    ///
    /// The directory is created lazily on first write.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store rooted at the platform data directory
    pub fn in_data_dir() -> Option<Self> {
        dirs::data_dir().map(|dir| Self::new(dir.join(APP_DIR_NAME)))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        tokio::fs::read_to_string(self.key_path(key)).await.ok()
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.root).await?;
        let path = self.key_path(key);
        tokio::fs::write(&path, value).await?;
        debug!(path = %path.display(), bytes = value.len(), "Wrote store key");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.key_path(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                debug!(path = %path.display(), "Removed store key");
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory store for tests and simulated sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, bypassing the trait (useful for seeding tests)
    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").await, None);

        store.set("k", "v").await.unwrap();
        assert_eq!(store.get("k").await, Some("v".to_string()));

        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await, None);
    }

    #[tokio::test]
    async fn test_memory_store_remove_absent_key_is_noop() {
        let store = MemoryStore::new();
        store.remove("never-set").await.unwrap();
    }

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let root = std::env::temp_dir().join(format!("scanshot-store-{}", std::process::id()));
        let store = FileStore::new(root.clone());

        assert_eq!(store.get("k").await, None);

        store.set("k", "[1,2,3]").await.unwrap();
        assert_eq!(store.get("k").await, Some("[1,2,3]".to_string()));

        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await, None);

        // Removing again must stay a no-op
        store.remove("k").await.unwrap();

        let _ = std::fs::remove_dir_all(root);
    }
}
