//! # Catalog Error Types
//!
//! Failure categories for the catalog fetch. All of them mean the same
//! thing to the user (the catalog is unavailable) but the categories keep
//! logs and messages precise.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  reqwest transport error ──► CatalogError::Transport                   │
//! │  non-2xx status ───────────► CatalogError::Status                      │
//! │  unparseable payload ──────► CatalogError::Malformed                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  App error type ← surfaced as a full-view failure with a retry         │
//! │                   action; no automatic retry or backoff                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Catalog fetch errors. Recovered only by an explicit caller retry.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The endpoint answered with a non-success status.
    #[error("Catalog endpoint returned status {status}")]
    Status { status: u16 },

    /// The request never completed (DNS, connect, timeout, TLS).
    #[error("Catalog request failed: {0}")]
    Transport(String),

    /// The endpoint answered 2xx but the body is not a fruit array.
    #[error("Catalog payload is malformed: {0}")]
    Malformed(String),
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
