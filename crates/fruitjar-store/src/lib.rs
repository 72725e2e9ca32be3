//! # fruitjar-store: Jar Persistence for Fruit Jar
//!
//! This crate keeps the jar alive across sessions. It owns the storage
//! interface, the file-backed document, and the stateful store that every
//! consumer mutates the jar through.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Fruit Jar Data Flow                               │
//! │                                                                         │
//! │  CLI command (add, remove, set-quantity, clear)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  fruitjar-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌─────────────┐   │   │
//! │  │   │   JarStore    │    │  JarStorage    │    │ StoreError  │   │   │
//! │  │   │  (store.rs)   │    │ (storage.rs)   │    │ (error.rs)  │   │   │
//! │  │   │               │    │                │    │             │   │   │
//! │  │   │ hydrate()     │◄───│ JsonFile /     │    │ Io          │   │   │
//! │  │   │ commands      │    │ Memory backend │    │ Malformed   │   │   │
//! │  │   │ queries       │    │                │    │ Serialize   │   │   │
//! │  │   └───────────────┘    └────────────────┘    └─────────────┘   │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  One JSON document                              │   │
//! │  │  ~/.local/share/fruitjar/fruit-jar-storage.json                 │   │
//! │  │  (the serialized entries array, duplicates allowed)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The stateful [`JarStore`]: hydration, commands, queries
//! - [`storage`] - The [`JarStorage`] interface and its backends
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fruitjar_store::{JarStore, JsonFileStorage};
//!
//! let storage = JsonFileStorage::at_default_location()?;
//! let mut store = JarStore::new(Box::new(storage));
//! store.hydrate().await;
//!
//! store.add_fruit(apple).await?;
//! println!("{} kcal", store.total_calories());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod storage;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use storage::{JarStorage, JsonFileStorage, MemoryStorage, STORAGE_FILE_NAME};
pub use store::JarStore;
