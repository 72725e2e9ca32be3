//! # Storage Backends
//!
//! The durable-storage interface for the jar, plus its two implementations.
//!
//! ## Storage Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      JarStorage Contract                                │
//! │                                                                         │
//! │  One namespace, one document: the serialized entries array.            │
//! │                                                                         │
//! │  load() ──► Ok(Some(entries))   persisted state restored               │
//! │         ──► Ok(None)            nothing persisted yet                  │
//! │         ──► Err(Malformed)      document exists but won't parse        │
//! │         ──► Err(Io)             backend unreadable                     │
//! │                                                                         │
//! │  save(entries) ──► overwrites the whole document (last write wins;     │
//! │                    no cross-process locking or merging)                │
//! │                                                                         │
//! │  Round-trip guarantee: save then load returns the same sequence,       │
//! │  order and duplicate count preserved.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store receives a `Box<dyn JarStorage>`, so tests substitute
//! [`MemoryStorage`] for the real file backend.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use directories::ProjectDirs;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use fruitjar_core::Fruit;

/// File name of the persisted jar document.
///
/// This is the fixed namespace key for durable state; every process using
/// the same data directory shares it (last write wins).
pub const STORAGE_FILE_NAME: &str = "fruit-jar-storage.json";

// =============================================================================
// Storage Interface
// =============================================================================

/// Durable storage for the jar's entries sequence.
#[async_trait]
pub trait JarStorage: Send + Sync {
    /// Reads the persisted entries, `Ok(None)` when nothing was persisted.
    async fn load(&self) -> StoreResult<Option<Vec<Fruit>>>;

    /// Overwrites the persisted document with the given entries.
    async fn save(&self, entries: &[Fruit]) -> StoreResult<()>;
}

// A shared handle is itself a backend; lets a caller keep inspecting the
// storage it handed to the store.
#[async_trait]
impl<S: JarStorage + ?Sized> JarStorage for std::sync::Arc<S> {
    async fn load(&self) -> StoreResult<Option<Vec<Fruit>>> {
        (**self).load().await
    }

    async fn save(&self, entries: &[Fruit]) -> StoreResult<()> {
        (**self).save(entries).await
    }
}

// =============================================================================
// JSON File Storage
// =============================================================================

/// File-backed storage: one JSON document holding the entries array.
///
/// ## Example
/// ```rust,ignore
/// let storage = JsonFileStorage::at_default_location()?;
/// let store = JarStore::new(Box::new(storage));
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates storage at an explicit document path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStorage { path: path.into() }
    }

    /// Creates storage at the platform data directory.
    ///
    /// ## Locations
    /// - macOS: `~/Library/Application Support/com.fruitjar.fruitjar/`
    /// - Windows: `%APPDATA%/fruitjar/fruitjar/data/`
    /// - Linux: `~/.local/share/fruitjar/`
    pub fn at_default_location() -> StoreResult<Self> {
        let dirs = ProjectDirs::from("com", "fruitjar", "fruitjar")
            .ok_or(StoreError::NoStorageLocation)?;
        Ok(JsonFileStorage::new(
            dirs.data_dir().join(STORAGE_FILE_NAME),
        ))
    }

    /// Path of the persisted document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl JarStorage for JsonFileStorage {
    async fn load(&self) -> StoreResult<Option<Vec<Fruit>>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No persisted jar document");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let entries: Vec<Fruit> = serde_json::from_slice(&bytes)
            .map_err(|err| StoreError::Malformed(err.to_string()))?;

        debug!(
            path = %self.path.display(),
            entries = entries.len(),
            "Loaded persisted jar document"
        );
        Ok(Some(entries))
    }

    async fn save(&self, entries: &[Fruit]) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(entries)
            .map_err(|err| StoreError::Serialize(err.to_string()))?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, json).await?;

        debug!(
            path = %self.path.display(),
            entries = entries.len(),
            "Persisted jar document"
        );
        Ok(())
    }
}

// =============================================================================
// Memory Storage
// =============================================================================

/// In-process storage for tests and ephemeral runs.
///
/// ## Usage
/// ```rust,ignore
/// let store = JarStore::new(Box::new(MemoryStorage::empty()));
/// // Storage is isolated, perfect for tests
/// ```
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<Vec<Fruit>>>,
}

impl MemoryStorage {
    /// Creates storage with no persisted state.
    pub fn empty() -> Self {
        MemoryStorage::default()
    }

    /// Creates storage pre-seeded with persisted entries
    /// (simulates a previous session).
    pub fn seeded(entries: Vec<Fruit>) -> Self {
        MemoryStorage {
            slot: Mutex::new(Some(entries)),
        }
    }

    /// Snapshot of what was last saved, for assertions.
    pub fn persisted(&self) -> Option<Vec<Fruit>> {
        self.slot.lock().expect("storage mutex poisoned").clone()
    }
}

#[async_trait]
impl JarStorage for MemoryStorage {
    async fn load(&self) -> StoreResult<Option<Vec<Fruit>>> {
        Ok(self.slot.lock().expect("storage mutex poisoned").clone())
    }

    async fn save(&self, entries: &[Fruit]) -> StoreResult<()> {
        *self.slot.lock().expect("storage mutex poisoned") = Some(entries.to_vec());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use fruitjar_core::Nutrition;

    fn fruit(id: i64, name: &str, calories: f64) -> Fruit {
        Fruit {
            id,
            name: name.to_string(),
            family: "Rosaceae".to_string(),
            order: "Rosales".to_string(),
            genus: name.to_string(),
            nutrition: Nutrition {
                calories,
                ..Nutrition::default()
            },
        }
    }

    #[tokio::test]
    async fn test_file_storage_missing_file_is_absent_state() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join(STORAGE_FILE_NAME));

        let loaded = storage.load().await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_file_storage_round_trips_multiset() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join(STORAGE_FILE_NAME));

        let entries = vec![
            fruit(1, "Apple", 52.0),
            fruit(1, "Apple", 52.0),
            fruit(2, "Banana", 96.0),
        ];
        storage.save(&entries).await.unwrap();

        let loaded = storage.load().await.unwrap().unwrap();
        assert_eq!(loaded, entries);
    }

    #[tokio::test]
    async fn test_file_storage_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join(STORAGE_FILE_NAME);
        let storage = JsonFileStorage::new(&nested);

        storage.save(&[fruit(1, "Apple", 52.0)]).await.unwrap();
        assert!(nested.exists());
    }

    #[tokio::test]
    async fn test_file_storage_truncated_json_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORAGE_FILE_NAME);
        tokio::fs::write(&path, b"[{\"name\": \"App").await.unwrap();

        let storage = JsonFileStorage::new(&path);
        let err = storage.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_memory_storage_round_trips() {
        let storage = MemoryStorage::empty();
        assert!(storage.load().await.unwrap().is_none());

        let entries = vec![fruit(2, "Banana", 96.0)];
        storage.save(&entries).await.unwrap();
        assert_eq!(storage.load().await.unwrap().unwrap(), entries);
    }
}
