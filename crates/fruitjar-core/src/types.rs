//! # Domain Types
//!
//! Core domain types used throughout Fruit Jar.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Fruit       │   │    Nutrition    │   │    GroupKey     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  calories       │   │  None           │       │
//! │  │  name           │   │  fat            │   │  Family         │       │
//! │  │  family         │   │  sugar          │   │  Order          │       │
//! │  │  order          │   │  carbohydrates  │   │  Genus          │       │
//! │  │  genus          │   │  protein        │   └─────────────────┘       │
//! │  │  nutrition      │   └─────────────────┘                             │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! The remote catalog endpoint (and therefore the persisted jar document,
//! which stores raw catalog records) spells the nutrition field
//! `"nutritions"`. The Rust field is `nutrition` with a serde rename so the
//! types round-trip against both without a translation layer.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Nutrition
// =============================================================================

/// Per-unit nutrition facts for a fruit.
///
/// All fields are non-negative; the remote catalog serves fractional values
/// (e.g. 0.4 g of fat), so everything is `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Nutrition {
    pub calories: f64,
    pub fat: f64,
    pub sugar: f64,
    pub carbohydrates: f64,
    pub protein: f64,
}

// =============================================================================
// Fruit
// =============================================================================

/// One record from the fruit catalog.
///
/// ## Identity
/// `id` is the stable identity key: unique within the catalog, and the only
/// field jar operations compare on. Everything else is display or grouping
/// data carried along with the record.
///
/// ## Immutability
/// The catalog is loaded once per session and never mutated; jar entries are
/// copies of catalog records taken at the time of adding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Fruit {
    /// Unique identifier within the catalog.
    pub id: i64,

    /// Display name shown in lists and on chart slices.
    pub name: String,

    /// Botanical family (grouping key).
    pub family: String,

    /// Botanical order (grouping key).
    pub order: String,

    /// Botanical genus (grouping key).
    pub genus: String,

    /// Per-unit nutrition facts.
    /// Wire name is `nutritions` (the catalog endpoint's spelling).
    #[serde(rename = "nutritions")]
    pub nutrition: Nutrition,
}

impl Fruit {
    /// Calories for a single entry of this fruit.
    #[inline]
    pub fn calories(&self) -> f64 {
        self.nutrition.calories
    }
}

// =============================================================================
// Group Key
// =============================================================================

/// Taxonomy field to group the catalog by.
///
/// `None` means "no grouping": the whole catalog is presented as a single
/// group in its original order. The key is a plain enumerated value; the
/// grouping logic needs no other context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GroupKey {
    None,
    Family,
    Order,
    Genus,
}

impl GroupKey {
    /// Returns the grouping field of `fruit` for this key, or `None` when
    /// no grouping is selected.
    pub fn field<'a>(&self, fruit: &'a Fruit) -> Option<&'a str> {
        match self {
            GroupKey::None => Option::None,
            GroupKey::Family => Some(&fruit.family),
            GroupKey::Order => Some(&fruit.order),
            GroupKey::Genus => Some(&fruit.genus),
        }
    }
}

impl Default for GroupKey {
    fn default() -> Self {
        GroupKey::None
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> Fruit {
        Fruit {
            id: 6,
            name: "Apple".to_string(),
            family: "Rosaceae".to_string(),
            order: "Rosales".to_string(),
            genus: "Malus".to_string(),
            nutrition: Nutrition {
                calories: 52.0,
                fat: 0.4,
                sugar: 10.3,
                carbohydrates: 11.4,
                protein: 0.3,
            },
        }
    }

    #[test]
    fn test_fruit_wire_format_uses_nutritions() {
        let json = serde_json::to_value(apple()).unwrap();
        assert!(json.get("nutritions").is_some());
        assert!(json.get("nutrition").is_none());
        assert_eq!(json["nutritions"]["calories"], 52.0);
    }

    #[test]
    fn test_fruit_round_trips_exactly() {
        let fruit = apple();
        let json = serde_json::to_string(&fruit).unwrap();
        let back: Fruit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fruit);
    }

    #[test]
    fn test_fruit_parses_catalog_payload() {
        // Shape served by the remote endpoint.
        let payload = r#"{
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
        }"#;
        let fruit: Fruit = serde_json::from_str(payload).unwrap();
        assert_eq!(fruit.id, 1);
        assert_eq!(fruit.name, "Banana");
        assert_eq!(fruit.nutrition.calories, 96.0);
    }

    #[test]
    fn test_group_key_field_selection() {
        let fruit = apple();
        assert_eq!(GroupKey::None.field(&fruit), Option::None);
        assert_eq!(GroupKey::Family.field(&fruit), Some("Rosaceae"));
        assert_eq!(GroupKey::Order.field(&fruit), Some("Rosales"));
        assert_eq!(GroupKey::Genus.field(&fruit), Some("Malus"));
    }

    #[test]
    fn test_group_key_default() {
        assert_eq!(GroupKey::default(), GroupKey::None);
    }
}
