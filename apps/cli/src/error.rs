//! # App Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Fruit Jar                              │
//! │                                                                         │
//! │  Command Function                                                      │
//! │  Result<T, CliError>                                                   │
//! │         │                                                              │
//! │         ├── CatalogError ──► "catalog unavailable" + retry hint        │
//! │         ├── StoreError ────► "could not persist jar"                   │
//! │         └── lookup misses ─► "no fruit with id N"                      │
//! │         │                                                              │
//! │         ▼                                                              │
//! │  main: message on stderr, nonzero exit code, never a panic            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use fruitjar_catalog::CatalogError;
use fruitjar_store::StoreError;

/// Errors surfaced to the terminal user.
#[derive(Debug, Error)]
pub enum CliError {
    /// The catalog could not be loaded. Recovered only by retrying.
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// The jar could not be persisted (or the storage location is unusable).
    #[error("{0}")]
    Store(#[from] StoreError),

    /// The given id matches no catalog record.
    #[error("No fruit with id {id} in the catalog")]
    UnknownFruit { id: i64 },

    /// The given label matches no group under the chosen key.
    #[error("No {key} group named '{label}'")]
    UnknownGroup { key: String, label: String },
}

impl CliError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Catalog(_) => 2,
            CliError::Store(_) => 3,
            CliError::UnknownFruit { .. } | CliError::UnknownGroup { .. } => 4,
        }
    }

    /// Human-facing message, including the recovery action where one exists.
    pub fn render(&self) -> String {
        match self {
            // The catalog fetch has exactly one recovery: re-issue it.
            CliError::Catalog(err) => {
                format!("{err}\nThe catalog is unavailable. Re-run the command to retry the fetch.")
            }
            other => other.to_string(),
        }
    }
}
