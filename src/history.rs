// SPDX-License-Identifier: GPL-3.0-only

//! Persisted capture and scan history
//!
//! Two independent append-only lists live in the key-value store: the
//! captured photo history under [`PHOTO_HISTORY_KEY`] and the barcode
//! scan history under [`BARCODE_HISTORY_KEY`]. Each is a single JSON
//! array rewritten whole on every append, so all mutations go through
//! one in-process write lock to keep concurrent load-modify-write
//! cycles from losing entries.

use crate::backends::camera::CapturedPhoto;
use crate::constants::{BARCODE_HISTORY_KEY, PHOTO_HISTORY_KEY};
use crate::errors::HistoryError;
use crate::storage::KeyValueStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// History store adapter over a key-value backend
///
/// Loads tolerate corruption: a blob that fails to parse is logged and
/// treated as empty history rather than surfaced to the caller.
pub struct HistoryStore<S> {
    store: S,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Create an adapter over `store`
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Load the captured photo history, oldest first
    pub async fn load_photos(&self) -> Vec<CapturedPhoto> {
        self.load_list(PHOTO_HISTORY_KEY).await
    }

    /// Load the barcode scan history, oldest first
    pub async fn load_barcodes(&self) -> Vec<String> {
        self.load_list(BARCODE_HISTORY_KEY).await
    }

    /// Append a photo to the capture history
    pub async fn append_photo(&self, photo: CapturedPhoto) -> Result<(), HistoryError> {
        self.append(PHOTO_HISTORY_KEY, photo).await
    }

    /// Append a payload to the barcode scan history
    pub async fn append_barcode(&self, payload: String) -> Result<(), HistoryError> {
        self.append(BARCODE_HISTORY_KEY, payload).await
    }

    /// Remove the barcode history key entirely
    ///
    /// A later load behaves as never populated. Clearing an already
    /// cleared history is a no-op.
    pub async fn clear_barcode_history(&self) -> Result<(), HistoryError> {
        let _guard = self.write_lock.lock().await;
        self.store.remove(BARCODE_HISTORY_KEY).await?;
        debug!(key = BARCODE_HISTORY_KEY, "Cleared history");
        Ok(())
    }

    /// Remove the photo history key entirely
    ///
    /// Symmetric counterpart to [`HistoryStore::clear_barcode_history`].
    /// Not reachable from a live session; only the CLI calls it, and
    /// only when enabled in the configuration.
    pub async fn clear_photo_history(&self) -> Result<(), HistoryError> {
        let _guard = self.write_lock.lock().await;
        self.store.remove(PHOTO_HISTORY_KEY).await?;
        debug!(key = PHOTO_HISTORY_KEY, "Cleared history");
        Ok(())
    }

    async fn load_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(raw) = self.store.get(key).await else {
            return Vec::new();
        };
        Self::decode_list(key, &raw)
    }

    async fn append<T: Serialize + DeserializeOwned>(
        &self,
        key: &str,
        entry: T,
    ) -> Result<(), HistoryError> {
        // Hold the lock across the whole load-modify-write cycle so
        // interleaved appends cannot drop each other's entries.
        let _guard = self.write_lock.lock().await;

        let mut entries: Vec<T> = match self.store.get(key).await {
            Some(raw) => Self::decode_list(key, &raw),
            None => Vec::new(),
        };
        entries.push(entry);

        let raw = serde_json::to_string(&entries)?;
        self.store.set(key, &raw).await?;
        debug!(key, len = entries.len(), "Appended history entry");
        Ok(())
    }

    fn decode_list<T: DeserializeOwned>(key: &str, raw: &str) -> Vec<T> {
        match serde_json::from_str(raw) {
            Ok(entries) => entries,
            Err(err) => {
                // Favor availability: a corrupt blob reads as empty and
                // will be overwritten by the next append.
                warn!(key, error = %HistoryError::from(err), "Discarding unreadable history");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn photo(uri: &str) -> CapturedPhoto {
        CapturedPhoto {
            uri: uri.to_string(),
        }
    }

    #[tokio::test]
    async fn test_load_photos_absent_key_yields_empty() {
        let history = HistoryStore::new(MemoryStore::new());
        assert!(history.load_photos().await.is_empty());
        assert!(history.load_barcodes().await.is_empty());
    }

    #[tokio::test]
    async fn test_append_photo_grows_list_by_one() {
        let history = HistoryStore::new(MemoryStore::new());

        history.append_photo(photo("file:///a.jpg")).await.unwrap();
        history.append_photo(photo("file:///b.jpg")).await.unwrap();

        let photos = history.load_photos().await;
        assert_eq!(photos.len(), 2);
        assert_eq!(photos.last().unwrap().uri, "file:///b.jpg");
    }

    #[tokio::test]
    async fn test_duplicate_appends_produce_distinct_entries() {
        let history = HistoryStore::new(MemoryStore::new());

        history.append_photo(photo("file:///a.jpg")).await.unwrap();
        history.append_photo(photo("file:///a.jpg")).await.unwrap();

        assert_eq!(history.load_photos().await.len(), 2);
    }

    #[tokio::test]
    async fn test_histories_are_independent() {
        let history = HistoryStore::new(MemoryStore::new());

        history.append_photo(photo("file:///a.jpg")).await.unwrap();
        history
            .append_barcode("8901030865278".to_string())
            .await
            .unwrap();
        history.clear_barcode_history().await.unwrap();

        assert!(history.load_barcodes().await.is_empty());
        assert_eq!(history.load_photos().await.len(), 1);
    }

    #[tokio::test]
    async fn test_clear_barcode_history_removes_key() {
        let store = MemoryStore::new();
        store.insert(BARCODE_HISTORY_KEY, r#"["a","b"]"#);
        let history = HistoryStore::new(store);

        history.clear_barcode_history().await.unwrap();
        assert!(history.load_barcodes().await.is_empty());

        // Clearing again is a no-op
        history.clear_barcode_history().await.unwrap();
    }

    #[tokio::test]
    async fn test_corrupt_blob_reads_as_empty() {
        let store = MemoryStore::new();
        store.insert(PHOTO_HISTORY_KEY, r#"[{"uri":"file:///a.jpg""#);
        let history = HistoryStore::new(store);

        assert!(history.load_photos().await.is_empty());
    }

    #[tokio::test]
    async fn test_wrong_shape_blob_reads_as_empty() {
        let store = MemoryStore::new();
        store.insert(PHOTO_HISTORY_KEY, r#"{"uri":"not-an-array"}"#);
        let history = HistoryStore::new(store);

        assert!(history.load_photos().await.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_appends_lose_nothing() {
        let history = Arc::new(HistoryStore::new(MemoryStore::new()));

        let tasks: Vec<_> = (0..8)
            .map(|i| {
                let history = Arc::clone(&history);
                tokio::spawn(async move { history.append_barcode(format!("payload-{}", i)).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(history.load_barcodes().await.len(), 8);
    }

    #[tokio::test]
    async fn test_persisted_wire_format() {
        let store = MemoryStore::new();
        let history = HistoryStore::new(&store);

        history.append_photo(photo("file:///a.jpg")).await.unwrap();
        history.append_barcode("abc".to_string()).await.unwrap();

        assert_eq!(
            store.get(PHOTO_HISTORY_KEY).await.unwrap(),
            r#"[{"uri":"file:///a.jpg"}]"#
        );
        assert_eq!(store.get(BARCODE_HISTORY_KEY).await.unwrap(), r#"["abc"]"#);
    }
}
