//! # Catalog State
//!
//! The session cache around the one-shot catalog fetch.
//!
//! ## Session Semantics
//! The catalog is fetched at most once per process and treated as immutable
//! afterward; every browse and add command reads the cached snapshot. A
//! failed fetch leaves the cache empty; the next attempt (the user's retry)
//! simply issues the same request again. Nothing cancels an in-flight load.

use tracing::debug;

use fruitjar_catalog::{CatalogClient, CatalogResult, CatalogSnapshot};

/// Session-scoped catalog cache.
pub struct CatalogState {
    client: CatalogClient,
    snapshot: Option<CatalogSnapshot>,
}

impl CatalogState {
    /// Creates state around the given client; nothing is fetched yet.
    pub fn new(client: CatalogClient) -> Self {
        CatalogState {
            client,
            snapshot: None,
        }
    }

    /// Returns the cached snapshot, fetching it on first use.
    ///
    /// ## Behavior
    /// - Cached: returns immediately, no network.
    /// - Not cached: performs the fetch; on success the snapshot is cached
    ///   for the rest of the session, on failure the error propagates and
    ///   the cache stays empty (so a retry re-issues the fetch).
    pub async fn ensure_loaded(&mut self) -> CatalogResult<&CatalogSnapshot> {
        let snapshot = match self.snapshot.take() {
            Some(snapshot) => {
                debug!("Catalog served from session cache");
                snapshot
            }
            // On failure the cache stays empty, so the next call retries.
            None => self.client.fetch().await?,
        };
        Ok(self.snapshot.insert(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_starts_without_snapshot() {
        let state = CatalogState::new(CatalogClient::with_url("http://localhost:1/"));
        assert!(state.snapshot.is_none());
    }
}
