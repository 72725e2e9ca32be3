//! # Catalog Client
//!
//! The one-shot fetch of the immutable fruit catalog.
//!
//! ## Fetch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Catalog Fetch                                     │
//! │                                                                         │
//! │  CatalogClient::fetch()                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GET <endpoint>  (no parameters)                                       │
//! │       │                                                                 │
//! │       ├── transport failure ────► Err(Transport)                       │
//! │       ├── non-2xx status ───────► Err(Status)                          │
//! │       └── 2xx ──► parse body                                           │
//! │                      ├── not a fruit array ──► Err(Malformed)          │
//! │                      └── ok ──► CatalogSnapshot { fruits, fetched_at } │
//! │                                                                         │
//! │  No automatic retry. A caller-initiated retry issues a new request;    │
//! │  nothing cancels an in-flight one.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The returned sequence is unmodified: structural parsing only, no
//! field-level validation, catalog order preserved.

use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::{debug, info};

use crate::error::{CatalogError, CatalogResult};
use fruitjar_core::Fruit;

/// Default catalog endpoint (the production deployment's fixed URL).
pub const DEFAULT_CATALOG_URL: &str =
    "https://wcz3qr33kmjvzotdqt65efniv40kokon.lambda-url.us-east-2.on.aws/";

// =============================================================================
// Snapshot
// =============================================================================

/// The catalog as fetched once per session, treated as immutable.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    /// The parsed records, in endpoint order.
    pub fruits: Vec<Fruit>,

    /// When the fetch completed.
    pub fetched_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    /// Looks up a record by its id.
    pub fn fruit_by_id(&self, id: i64) -> Option<&Fruit> {
        self.fruits.iter().find(|f| f.id == id)
    }
}

// =============================================================================
// Client
// =============================================================================

/// HTTP client for the catalog endpoint.
///
/// ## Usage
/// ```rust,ignore
/// let client = CatalogClient::new();
/// let snapshot = client.fetch().await?;
/// println!("{} fruits", snapshot.fruits.len());
/// ```
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    url: String,
}

impl CatalogClient {
    /// Creates a client against the default endpoint.
    pub fn new() -> Self {
        CatalogClient::with_url(DEFAULT_CATALOG_URL)
    }

    /// Creates a client against an explicit endpoint URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        CatalogClient {
            http: Client::new(),
            url: url.into(),
        }
    }

    /// The endpoint this client reads from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Performs one GET of the catalog.
    ///
    /// ## Behavior
    /// - Transport failure: [`CatalogError::Transport`]
    /// - Non-2xx status: [`CatalogError::Status`]
    /// - Unparseable body: [`CatalogError::Malformed`]
    /// - Success: the parsed records, order preserved, plus a timestamp
    pub async fn fetch(&self) -> CatalogResult<CatalogSnapshot> {
        debug!(url = %self.url, "Fetching fruit catalog");

        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|err| CatalogError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| CatalogError::Transport(err.to_string()))?;

        let fruits = parse_catalog(&body)?;
        let snapshot = CatalogSnapshot {
            fruits,
            fetched_at: Utc::now(),
        };

        info!(
            fruits = snapshot.fruits.len(),
            fetched_at = %snapshot.fetched_at,
            "Catalog fetched"
        );
        Ok(snapshot)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        CatalogClient::new()
    }
}

/// Parses a catalog payload into fruit records.
///
/// Structural parsing only; anything that deserializes as a fruit array is
/// accepted unmodified.
pub fn parse_catalog(body: &[u8]) -> CatalogResult<Vec<Fruit>> {
    serde_json::from_slice(body).map_err(|err| CatalogError::Malformed(err.to_string()))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"[
        {
            "name": "Apple",
            "id": 6,
            "family": "Rosaceae",
            "order": "Rosales",
            "genus": "Malus",
            "nutritions": {
                "calories": 52,
                "fat": 0.4,
                "sugar": 10.3,
                "carbohydrates": 11.4,
                "protein": 0.3
            }
        },
        {
            "name": "Banana",
            "id": 1,
            "family": "Musaceae",
            "order": "Zingiberales",
            "genus": "Musa",
            "nutritions": {
                "calories": 96,
                "fat": 0.2,
                "sugar": 17.2,
                "carbohydrates": 22,
                "protein": 1
            }
        }
    ]"#;

    #[test]
    fn test_parse_catalog_preserves_order() {
        let fruits = parse_catalog(PAYLOAD.as_bytes()).unwrap();
        assert_eq!(fruits.len(), 2);
        assert_eq!(fruits[0].name, "Apple");
        assert_eq!(fruits[1].name, "Banana");
        assert_eq!(fruits[1].nutrition.calories, 96.0);
    }

    #[test]
    fn test_parse_catalog_rejects_truncated_payload() {
        let err = parse_catalog(b"[{\"name\": \"App").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn test_parse_catalog_rejects_non_array() {
        let err = parse_catalog(b"{\"error\": \"nope\"}").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn test_snapshot_lookup_by_id() {
        let snapshot = CatalogSnapshot {
            fruits: parse_catalog(PAYLOAD.as_bytes()).unwrap(),
            fetched_at: Utc::now(),
        };
        assert_eq!(snapshot.fruit_by_id(1).unwrap().name, "Banana");
        assert!(snapshot.fruit_by_id(99).is_none());
    }

    #[test]
    fn test_client_defaults_to_production_endpoint() {
        let client = CatalogClient::new();
        assert_eq!(client.url(), DEFAULT_CATALOG_URL);

        let client = CatalogClient::with_url("http://localhost:9999/fruits");
        assert_eq!(client.url(), "http://localhost:9999/fruits");
    }
}
