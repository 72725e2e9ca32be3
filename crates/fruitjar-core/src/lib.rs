//! # fruitjar-core: Pure Business Logic for Fruit Jar
//!
//! This crate is the **heart** of Fruit Jar. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Fruit Jar Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Terminal Adapter (apps/cli)                  │   │
//! │  │    list ──► show ──► add ──► set-quantity ──► jar              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ fruitjar-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐      ┌───────────┐      ┌─────────────────┐    │   │
//! │  │   │   types   │      │    jar    │      │    aggregate    │    │   │
//! │  │   │   Fruit   │      │    Jar    │      │    group_by     │    │   │
//! │  │   │ Nutrition │      │ multiset  │      │  summarize_jar  │    │   │
//! │  │   │ GroupKey  │      │ commands  │      │ nutrient_shares │    │   │
//! │  │   └───────────┘      └───────────┘      └─────────────────┘    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO FILE SYSTEM • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌────────────────────────────┬▼───────────────────────────────────┐   │
//! │  │   fruitjar-store           │   fruitjar-catalog                 │   │
//! │  │   (persistence layer)      │   (remote catalog loader)          │   │
//! │  └────────────────────────────┴────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Fruit, Nutrition, GroupKey)
//! - [`jar`] - The jar multiset and its commands
//! - [`aggregate`] - Grouping, totals, and percentage breakdowns
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Total Commands**: Jar commands never fail - meaningless input no-ops
//! 4. **Derived, Never Stored**: quantities, totals, and chart data are
//!    recomputed from the entries sequence on demand
//!
//! ## Example Usage
//!
//! ```rust
//! use fruitjar_core::{summarize_jar, Fruit, Jar, Nutrition};
//!
//! let apple = Fruit {
//!     id: 6,
//!     name: "Apple".to_string(),
//!     family: "Rosaceae".to_string(),
//!     order: "Rosales".to_string(),
//!     genus: "Malus".to_string(),
//!     nutrition: Nutrition { calories: 52.0, fat: 0.4, sugar: 10.3, carbohydrates: 11.4, protein: 0.3 },
//! };
//!
//! let mut jar = Jar::new();
//! jar.add_fruit(apple.clone());
//! jar.add_fruit(apple);
//! jar.set_quantity(6, 3);
//!
//! let summary = summarize_jar(jar.entries());
//! assert_eq!(summary.grouped[0].quantity, 3);
//! assert_eq!(summary.total_calories, 156.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod aggregate;
pub mod jar;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use fruitjar_core::Jar` instead of
// `use fruitjar_core::jar::Jar`

pub use aggregate::{
    group_by, nutrient_shares, summarize_jar, ChartSlice, FruitGroup, GroupedFruit, JarSummary,
    NutrientShare, ALL_FRUITS_LABEL,
};
pub use jar::Jar;
pub use types::{Fruit, GroupKey, Nutrition};
