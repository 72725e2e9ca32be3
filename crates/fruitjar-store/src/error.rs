//! # Store Error Types
//!
//! Error types for jar persistence.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  I/O or JSON error                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ├── on load, Malformed is DEMOTED by the store:                  │
//! │       │   corrupt local state starts an empty jar (warn log)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  on save, errors propagate to the app error type                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Jar persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the storage backend failed.
    ///
    /// ## When This Occurs
    /// - Permissions issue on the data directory
    /// - Disk full
    /// - The parent directory cannot be created
    #[error("Storage I/O failed: {0}")]
    Io(String),

    /// Persisted contents fail to parse as an entries array.
    ///
    /// ## When This Occurs
    /// - Truncated or hand-edited JSON document
    /// - A document written by an incompatible version
    ///
    /// The store treats this as absent state rather than failing the
    /// session: hydration logs a warning and starts empty.
    #[error("Persisted jar is malformed: {0}")]
    Malformed(String),

    /// Serializing the entries sequence failed.
    ///
    /// Should not occur for well-formed entries; kept as a variant so the
    /// save path never panics.
    #[error("Failed to serialize jar entries: {0}")]
    Serialize(String),

    /// No usable storage location.
    ///
    /// ## When This Occurs
    /// - The platform data directory cannot be determined and no explicit
    ///   path was supplied
    #[error("No storage location available")]
    NoStorageLocation,
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
