//! # Jar Multiset
//!
//! The jar is the user's selection of fruits, kept as an ordered multiset:
//! a plain sequence of catalog records where repeated ids denote repeated
//! selection. Quantity is derived by counting, never stored.
//!
//! ## Jar Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Jar Operations                                    │
//! │                                                                         │
//! │  User Action              Command                 Entries Change        │
//! │  ───────────              ───────                 ──────────────        │
//! │                                                                         │
//! │  Click Fruit ────────────► add_fruit(f) ────────► entries.push(f)      │
//! │                                                                         │
//! │  Add All In Group ───────► add_group(fs) ───────► entries.extend(fs)   │
//! │                                                                         │
//! │  Change Quantity ────────► set_quantity(id, n) ─► count(id) == n       │
//! │                                                                         │
//! │  Click Remove ───────────► remove_fruit(id) ────► drop every id match  │
//! │                                                                         │
//! │  Click Clear ────────────► clear() ─────────────► entries.clear()      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why a repeated list, not an id→count map?
//! The persisted document is the entries sequence itself (duplicates
//! allowed), so the in-memory representation matches the wire format exactly
//! and round-trips with no translation. All derived numbers are recomputed
//! on demand.

use serde::{Deserialize, Serialize};

use crate::types::Fruit;

/// The jar: an ordered multiset of selected fruits.
///
/// ## Invariants
/// - Entries with the same id are data-identical copies of one catalog
///   record (they were all cloned from it when added).
/// - Commands are total: semantically meaningless input (unknown id) is a
///   no-op, never an error or a panic.
/// - Insertion order is preserved; it drives the "first occurrence" order
///   of every derived grouping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Jar {
    entries: Vec<Fruit>,
}

impl Jar {
    /// Creates a new empty jar.
    pub fn new() -> Self {
        Jar {
            entries: Vec::new(),
        }
    }

    /// Creates a jar from an already-ordered entries sequence
    /// (used when restoring persisted state).
    pub fn from_entries(entries: Vec<Fruit>) -> Self {
        Jar { entries }
    }

    /// The raw entries sequence, duplicates and all.
    #[inline]
    pub fn entries(&self) -> &[Fruit] {
        &self.entries
    }

    /// Total number of entries (counting duplicates).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the jar is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries with the given id.
    pub fn quantity(&self, id: i64) -> usize {
        self.entries.iter().filter(|f| f.id == id).count()
    }

    /// Sum of calories over every entry.
    ///
    /// Each entry counts its own per-unit calories, so this equals the sum
    /// over distinct fruits of `quantity × calories-per-unit`.
    pub fn total_calories(&self) -> f64 {
        self.entries.iter().map(|f| f.nutrition.calories).sum()
    }

    /// Appends one entry, increasing that id's quantity by 1.
    pub fn add_fruit(&mut self, fruit: Fruit) {
        self.entries.push(fruit);
    }

    /// Appends a whole group of fruits, preserving their order.
    pub fn add_group(&mut self, fruits: impl IntoIterator<Item = Fruit>) {
        self.entries.extend(fruits);
    }

    /// Removes ALL entries with the given id.
    ///
    /// This is full removal, not a decrement. Unknown ids are a no-op.
    pub fn remove_fruit(&mut self, id: i64) {
        self.entries.retain(|f| f.id != id);
    }

    /// Adjusts the count of entries with `id` to exactly `n`.
    ///
    /// ## Behavior
    /// - `n == 0`: removes every entry with that id (same as
    ///   [`remove_fruit`](Self::remove_fruit)).
    /// - id not present and `n > 0`: no-op. The jar cannot fabricate a
    ///   record it has never seen; callers add new fruits via
    ///   [`add_fruit`](Self::add_fruit) or [`add_group`](Self::add_group).
    /// - `n > current`: appends `n - current` copies of the existing record
    ///   for that id (no catalog access needed).
    /// - `n < current`: removes `current - n` matching entries, most
    ///   recently added first. Copies are data-identical so the order is
    ///   unobservable to users, but last-in-first-out is the fixed policy.
    pub fn set_quantity(&mut self, id: i64, n: usize) {
        if n == 0 {
            self.remove_fruit(id);
            return;
        }

        let current = self.quantity(id);
        if current == 0 {
            // Unknown id: nothing to copy a record from.
            return;
        }

        if n > current {
            // current > 0, so a matching entry exists to copy from.
            let Some(template) = self.entries.iter().find(|f| f.id == id).cloned() else {
                return;
            };
            for _ in current..n {
                self.entries.push(template.clone());
            }
        } else {
            let mut excess = current - n;
            let mut index = self.entries.len();
            while excess > 0 && index > 0 {
                index -= 1;
                if self.entries[index].id == id {
                    self.entries.remove(index);
                    excess -= 1;
                }
            }
        }
    }

    /// Empties the jar. Irreversible; no confirmation at this layer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
