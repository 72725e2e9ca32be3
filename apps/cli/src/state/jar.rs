//! # Jar State
//!
//! Wraps store construction and the hydration gate.
//!
//! ## Hydration Gate
//! The store starts with `is_loading = true`; `JarState::open` awaits
//! hydration before handing the store to any command, so mutating commands
//! never run in the window where restored state could overwrite them.
//! "Not yet restored" and "empty" stay distinguishable throughout.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::CliError;
use fruitjar_store::{JarStore, JsonFileStorage};

/// The hydrated jar store plus where it persists to.
pub struct JarState {
    store: JarStore,
    storage_path: PathBuf,
}

impl JarState {
    /// Opens the jar against an explicit document path, or the platform
    /// data directory when none is given, and hydrates it.
    pub async fn open(storage_path: Option<PathBuf>) -> Result<Self, CliError> {
        let storage = match storage_path {
            Some(path) => JsonFileStorage::new(path),
            None => JsonFileStorage::at_default_location()?,
        };
        let storage_path = storage.path().to_path_buf();
        debug!(path = %storage_path.display(), "Opening jar store");

        let mut store = JarStore::new(Box::new(storage));
        store.hydrate().await;
        debug_assert!(!store.is_loading());

        Ok(JarState {
            store,
            storage_path,
        })
    }

    /// Read access to the store.
    pub fn store(&self) -> &JarStore {
        &self.store
    }

    /// Write access to the store (commands).
    pub fn store_mut(&mut self) -> &mut JarStore {
        &mut self.store
    }

    /// Where the jar document lives.
    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }
}
