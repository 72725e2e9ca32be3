//! # Jar Store
//!
//! The stateful core: owns the jar multiset, hydrates it from durable
//! storage at startup, and persists it after every mutating command.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Jar Store Lifecycle                               │
//! │                                                                         │
//! │  JarStore::new(storage)                                                │
//! │       │      entries = [], is_loading = true                           │
//! │       ▼                                                                 │
//! │  hydrate().await                                                        │
//! │       │                                                                 │
//! │       ├── Ok(Some(entries)) ──► restore persisted multiset             │
//! │       ├── Ok(None) ───────────► stay empty (first run)                 │
//! │       └── Err(Malformed/Io) ──► stay empty, warn (never crash)         │
//! │       │                                                                 │
//! │       ▼      is_loading = false  (always, exactly once)                │
//! │  commands: add_fruit / add_group / remove_fruit / set_quantity / clear │
//! │       │                                                                 │
//! │       └── each: mutate entries, then save the full sequence            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! The store is the single writer of jar state. Consumers hold read-only
//! derived views (summaries, quantities, totals) computed on demand.
//!
//! ## Hydration Contract
//! Load-then-merge is not supported: hydration replaces whatever is in
//! memory. Callers must not issue mutating commands while `is_loading` is
//! true; a mutation in that window would be overwritten when hydration
//! completes. The reference flow hydrates once, before any command.

use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::storage::JarStorage;
use fruitjar_core::{summarize_jar, Fruit, Jar, JarSummary};

/// The persistent jar store.
pub struct JarStore {
    jar: Jar,
    is_loading: bool,
    storage: Box<dyn JarStorage>,
}

impl JarStore {
    /// Creates a store with an empty jar and the given storage backend.
    ///
    /// The store starts in the loading state; call
    /// [`hydrate`](Self::hydrate) before issuing commands.
    pub fn new(storage: Box<dyn JarStorage>) -> Self {
        JarStore {
            jar: Jar::new(),
            is_loading: true,
            storage,
        }
    }

    /// Restores persisted entries, if any.
    ///
    /// ## Behavior
    /// - Persisted and well-formed: entries are replaced with the stored
    ///   multiset.
    /// - Nothing persisted: the jar stays empty.
    /// - Malformed or unreadable: the jar stays empty and a warning is
    ///   logged. Corrupt local state never fails the session.
    ///
    /// In every case `is_loading` ends false.
    pub async fn hydrate(&mut self) {
        match self.storage.load().await {
            Ok(Some(entries)) => {
                debug!(entries = entries.len(), "Hydrated jar from storage");
                self.jar = Jar::from_entries(entries);
            }
            Ok(None) => {
                debug!("No persisted jar state; starting empty");
            }
            Err(StoreError::Malformed(reason)) => {
                warn!(%reason, "Persisted jar is malformed; starting empty");
            }
            Err(err) => {
                warn!(error = %err, "Could not read persisted jar; starting empty");
            }
        }
        self.is_loading = false;
    }

    /// True until the hydration attempt has completed.
    ///
    /// Distinguishes "not yet restored" from "empty".
    #[inline]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    // =========================================================================
    // Commands
    // =========================================================================
    // Every command mutates the multiset, then writes the full entries
    // sequence to storage. The jar mutation itself cannot fail; the result
    // carries only persistence errors.

    /// Appends one entry (+1 quantity for that fruit's id).
    pub async fn add_fruit(&mut self, fruit: Fruit) -> StoreResult<()> {
        debug!(id = fruit.id, name = %fruit.name, "add_fruit");
        self.jar.add_fruit(fruit);
        self.persist().await
    }

    /// Appends a whole group of fruits, preserving order.
    pub async fn add_group(&mut self, fruits: Vec<Fruit>) -> StoreResult<()> {
        debug!(count = fruits.len(), "add_group");
        self.jar.add_group(fruits);
        self.persist().await
    }

    /// Removes ALL entries with the given id (full removal, not decrement).
    pub async fn remove_fruit(&mut self, id: i64) -> StoreResult<()> {
        debug!(id, "remove_fruit");
        self.jar.remove_fruit(id);
        self.persist().await
    }

    /// Adjusts the count of entries with `id` to exactly `n`.
    ///
    /// Unknown id with `n > 0` is a silent no-op (the store cannot
    /// fabricate a record it has never seen); the no-op is still followed
    /// by a persistence write, keeping command behavior uniform.
    pub async fn set_quantity(&mut self, id: i64, n: usize) -> StoreResult<()> {
        if n > 0 && self.jar.quantity(id) == 0 {
            debug!(id, n, "set_quantity for id not in jar; ignoring");
        } else {
            debug!(id, n, "set_quantity");
        }
        self.jar.set_quantity(id, n);
        self.persist().await
    }

    /// Empties the jar. Irreversible; no confirmation at this layer.
    pub async fn clear(&mut self) -> StoreResult<()> {
        debug!("clear");
        self.jar.clear();
        self.persist().await
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The raw entries sequence, duplicates and all.
    #[inline]
    pub fn entries(&self) -> &[Fruit] {
        self.jar.entries()
    }

    /// Count of entries with the given id.
    #[inline]
    pub fn quantity(&self, id: i64) -> usize {
        self.jar.quantity(id)
    }

    /// Sum of calories over every entry.
    #[inline]
    pub fn total_calories(&self) -> f64 {
        self.jar.total_calories()
    }

    /// Checks if the jar is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.jar.is_empty()
    }

    /// Grouped rows, chart slices, and grand total for the current entries.
    pub fn summary(&self) -> JarSummary {
        summarize_jar(self.jar.entries())
    }

    /// Writes the full entries sequence (and only the entries - the loading
    /// flag is runtime state, never persisted).
    async fn persist(&self) -> StoreResult<()> {
        self.storage.save(self.jar.entries()).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
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

    fn apple() -> Fruit {
        fruit(1, "Apple", 52.0)
    }

    fn banana() -> Fruit {
        fruit(2, "Banana", 96.0)
    }

    #[tokio::test]
    async fn test_store_starts_loading_then_hydrates_empty() {
        let mut store = JarStore::new(Box::new(MemoryStorage::empty()));
        assert!(store.is_loading());

        store.hydrate().await;

        assert!(!store.is_loading());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_hydrate_restores_persisted_multiset() {
        let seeded = MemoryStorage::seeded(vec![apple(), apple(), banana()]);
        let mut store = JarStore::new(Box::new(seeded));

        store.hydrate().await;

        assert!(!store.is_loading());
        assert_eq!(store.quantity(1), 2);
        assert_eq!(store.quantity(2), 1);
        assert_eq!(store.total_calories(), 2.0 * 52.0 + 96.0);
    }

    #[tokio::test]
    async fn test_every_command_persists_entries() {
        let backend = std::sync::Arc::new(MemoryStorage::empty());
        let mut store = JarStore::new(Box::new(backend.clone()));
        store.hydrate().await;

        store.add_fruit(apple()).await.unwrap();
        assert_eq!(backend.persisted().unwrap().len(), 1);

        store.add_group(vec![banana(), banana()]).await.unwrap();
        assert_eq!(backend.persisted().unwrap().len(), 3);

        store.set_quantity(2, 1).await.unwrap();
        assert_eq!(backend.persisted().unwrap().len(), 2);

        store.remove_fruit(1).await.unwrap();
        let persisted = backend.persisted().unwrap();
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].id, 2);
    }

    #[tokio::test]
    async fn test_round_trip_through_second_session() {
        // Session one: build up state.
        let mut first = JarStore::new(Box::new(MemoryStorage::empty()));
        first.hydrate().await;
        first.add_fruit(apple()).await.unwrap();
        first.add_fruit(apple()).await.unwrap();
        first.add_fruit(banana()).await.unwrap();

        // Session two: a fresh store hydrating from what session one saved.
        let handoff = MemoryStorage::seeded(first.entries().to_vec());
        let mut second = JarStore::new(Box::new(handoff));
        second.hydrate().await;

        assert_eq!(second.quantity(1), 2);
        assert_eq!(second.quantity(2), 1);
        assert_eq!(second.total_calories(), 2.0 * 52.0 + 96.0);
        assert_eq!(second.entries(), first.entries());
    }

    #[tokio::test]
    async fn test_clear_persists_empty_jar() {
        let seeded = MemoryStorage::seeded(vec![apple(), banana()]);
        let mut store = JarStore::new(Box::new(seeded));
        store.hydrate().await;

        store.clear().await.unwrap();

        assert!(store.is_empty());
        assert_eq!(store.total_calories(), 0.0);
    }

    #[tokio::test]
    async fn test_summary_agrees_with_queries() {
        let mut store = JarStore::new(Box::new(MemoryStorage::empty()));
        store.hydrate().await;
        store.add_fruit(apple()).await.unwrap();
        store.add_fruit(banana()).await.unwrap();
        store.add_fruit(apple()).await.unwrap();

        let summary = store.summary();
        assert_eq!(summary.total_calories, store.total_calories());
        let row = summary.grouped.iter().find(|g| g.fruit.id == 1).unwrap();
        assert_eq!(row.quantity, store.quantity(1));
    }

    #[tokio::test]
    async fn test_set_quantity_unknown_id_noops_but_persists() {
        let storage = MemoryStorage::empty();
        let mut store = JarStore::new(Box::new(storage));
        store.hydrate().await;
        store.add_fruit(banana()).await.unwrap();

        store.set_quantity(42, 5).await.unwrap();

        assert_eq!(store.quantity(42), 0);
        assert_eq!(store.quantity(2), 1);
    }

    /// Backend whose document is not an entries array at all.
    struct CorruptStorage;

    #[async_trait::async_trait]
    impl JarStorage for CorruptStorage {
        async fn load(&self) -> StoreResult<Option<Vec<Fruit>>> {
            Err(StoreError::Malformed("truncated document".to_string()))
        }

        async fn save(&self, _entries: &[Fruit]) -> StoreResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_malformed_state_degrades_to_empty_jar() {
        let mut store = JarStore::new(Box::new(CorruptStorage));

        store.hydrate().await;

        assert!(!store.is_loading());
        assert!(store.is_empty());
        assert_eq!(store.total_calories(), 0.0);
    }
}
