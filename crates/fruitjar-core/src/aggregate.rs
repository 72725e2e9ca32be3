//! # Aggregation Engine
//!
//! Pure functions that turn a sequence of fruit records into the derived
//! views every consumer renders from: taxonomy groupings, per-fruit
//! quantities and subtotals, grand totals, and percentage breakdowns.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Derived Aggregations                               │
//! │                                                                         │
//! │  catalog ──► group_by(catalog, key) ──────► Vec<FruitGroup>            │
//! │                                              (browse view)              │
//! │                                                                         │
//! │  jar entries ──► summarize_jar(entries) ──► JarSummary                 │
//! │                                              ├── grouped (rows)         │
//! │                                              ├── chart_data (pie)       │
//! │                                              └── total_calories         │
//! │                                                                         │
//! │  one fruit ──► nutrient_shares(fruit) ────► Vec<NutrientShare>         │
//! │                                              (breakdown chart)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is deterministic and referentially transparent: same
//! input sequence, same output, no hidden state. Ordering is part of the
//! contract: groups follow first occurrence in the input, and rows within
//! a group keep the input order.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Fruit, GroupKey};

/// Label of the single group returned when no grouping key is selected.
pub const ALL_FRUITS_LABEL: &str = "All Fruits";

// =============================================================================
// Catalog Grouping
// =============================================================================

/// One group of catalog records sharing a taxonomy value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FruitGroup {
    /// The shared taxonomy value, or [`ALL_FRUITS_LABEL`] for no grouping.
    pub label: String,

    /// Records in this group, in catalog order.
    pub fruits: Vec<Fruit>,
}

/// Partitions `catalog` by the chosen taxonomy field.
///
/// ## Behavior
/// - `GroupKey::None`: one group labeled "All Fruits" holding the entire
///   catalog in its original order.
/// - Otherwise: one group per distinct field value. Group order follows the
///   first occurrence of each value in the catalog; records within a group
///   keep catalog order. Together the groups partition the catalog; every
///   record appears exactly once.
pub fn group_by(catalog: &[Fruit], key: GroupKey) -> Vec<FruitGroup> {
    if key == GroupKey::None {
        return vec![FruitGroup {
            label: ALL_FRUITS_LABEL.to_string(),
            fruits: catalog.to_vec(),
        }];
    }

    let mut groups: Vec<FruitGroup> = Vec::new();
    for fruit in catalog {
        // `key` is not None here, so `field` always yields a value.
        let label = key.field(fruit).unwrap_or_default();
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.fruits.push(fruit.clone()),
            None => groups.push(FruitGroup {
                label: label.to_string(),
                fruits: vec![fruit.clone()],
            }),
        }
    }
    groups
}

// =============================================================================
// Jar Summary
// =============================================================================

/// One distinct fruit in the jar with its derived quantity and subtotal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GroupedFruit {
    /// The catalog record (one representative copy).
    pub fruit: Fruit,

    /// Count of entries with this fruit's id.
    pub quantity: usize,

    /// `quantity × calories-per-unit`.
    pub total_calories: f64,
}

/// One slice of the jar's calorie pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChartSlice {
    /// Fruit display name.
    pub name: String,

    /// Calorie contribution of that fruit (quantity × per-unit calories).
    pub value: f64,
}

/// Everything the jar views render from, derived in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct JarSummary {
    /// One row per distinct fruit id, ordered by first occurrence in the
    /// entries sequence.
    pub grouped: Vec<GroupedFruit>,

    /// Pie-chart input, derived 1:1 from `grouped`.
    pub chart_data: Vec<ChartSlice>,

    /// Sum of calories over every raw entry. Consistent with the grouped
    /// rows: equals the sum of their `total_calories`.
    pub total_calories: f64,
}

/// Summarizes the jar multiset into rows, chart slices, and a grand total.
///
/// Entries with the same id are data-identical copies, so the first copy
/// stands in for the fruit in its row.
pub fn summarize_jar(entries: &[Fruit]) -> JarSummary {
    let mut grouped: Vec<GroupedFruit> = Vec::new();

    for entry in entries {
        match grouped.iter_mut().find(|g| g.fruit.id == entry.id) {
            Some(row) => {
                row.quantity += 1;
                row.total_calories = row.fruit.nutrition.calories * row.quantity as f64;
            }
            None => grouped.push(GroupedFruit {
                fruit: entry.clone(),
                quantity: 1,
                total_calories: entry.nutrition.calories,
            }),
        }
    }

    let chart_data = grouped
        .iter()
        .map(|row| ChartSlice {
            name: row.fruit.name.clone(),
            value: row.total_calories,
        })
        .collect();

    let total_calories = entries.iter().map(|f| f.nutrition.calories).sum();

    JarSummary {
        grouped,
        chart_data,
        total_calories,
    }
}

// =============================================================================
// Nutrient Shares
// =============================================================================

/// Percentage share of one nutrient within a fruit's breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NutrientShare {
    /// Nutrient name: "carbohydrates", "protein", "fat", or "sugar".
    pub label: String,

    /// Share of the four-nutrient sum, in percent.
    pub percent: f64,
}

/// Percentage breakdown of one fruit's macronutrients.
///
/// Shares of `{carbohydrates, protein, fat, sugar}` relative to their sum,
/// in that fixed order. A fruit whose four fields are all zero yields 0%
/// each, never NaN.
pub fn nutrient_shares(fruit: &Fruit) -> Vec<NutrientShare> {
    let n = &fruit.nutrition;
    let parts = [
        ("carbohydrates", n.carbohydrates),
        ("protein", n.protein),
        ("fat", n.fat),
        ("sugar", n.sugar),
    ];

    let sum: f64 = parts.iter().map(|(_, value)| value).sum();

    parts
        .iter()
        .map(|(label, value)| NutrientShare {
            label: label.to_string(),
            percent: if sum == 0.0 { 0.0 } else { value / sum * 100.0 },
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Nutrition;

    fn fruit(id: i64, name: &str, family: &str, calories: f64) -> Fruit {
        Fruit {
            id,
            name: name.to_string(),
            family: family.to_string(),
            order: "Rosales".to_string(),
            genus: name.to_string(),
            nutrition: Nutrition {
                calories,
                fat: 0.4,
                sugar: 10.0,
                carbohydrates: 11.0,
                protein: 0.3,
            },
        }
    }

    fn catalog() -> Vec<Fruit> {
        vec![
            fruit(1, "Apple", "Rosaceae", 52.0),
            fruit(2, "Banana", "Musaceae", 96.0),
            fruit(3, "Pear", "Rosaceae", 57.0),
            fruit(4, "Strawberry", "Rosaceae", 29.0),
        ]
    }

    #[test]
    fn test_group_by_none_returns_single_group_in_order() {
        let catalog = catalog();
        let groups = group_by(&catalog, GroupKey::None);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, ALL_FRUITS_LABEL);
        assert_eq!(groups[0].fruits, catalog);
    }

    #[test]
    fn test_group_by_family_partitions_catalog() {
        let catalog = catalog();
        let groups = group_by(&catalog, GroupKey::Family);

        // First-occurrence order: Rosaceae (Apple), then Musaceae (Banana).
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "Rosaceae");
        assert_eq!(groups[1].label, "Musaceae");

        let names: Vec<&str> = groups[0].fruits.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "Pear", "Strawberry"]);

        // Partition property: union of groups equals the catalog, once each.
        let total: usize = groups.iter().map(|g| g.fruits.len()).sum();
        assert_eq!(total, catalog.len());
        for record in &catalog {
            let occurrences: usize = groups
                .iter()
                .map(|g| g.fruits.iter().filter(|f| f.id == record.id).count())
                .sum();
            assert_eq!(occurrences, 1, "{} must appear exactly once", record.name);
        }
    }

    #[test]
    fn test_group_by_genus_partitions_catalog() {
        let catalog = catalog();
        let groups = group_by(&catalog, GroupKey::Genus);

        // Genus is unique per fruit here, so every group has one record.
        assert_eq!(groups.len(), 4);
        let total: usize = groups.iter().map(|g| g.fruits.len()).sum();
        assert_eq!(total, catalog.len());
    }

    #[test]
    fn test_summarize_jar_groups_by_first_occurrence() {
        let apple = fruit(1, "Apple", "Rosaceae", 52.0);
        let banana = fruit(2, "Banana", "Musaceae", 96.0);
        let entries = vec![apple.clone(), banana.clone(), apple.clone()];

        let summary = summarize_jar(&entries);

        assert_eq!(summary.grouped.len(), 2);
        assert_eq!(summary.grouped[0].fruit.name, "Apple");
        assert_eq!(summary.grouped[0].quantity, 2);
        assert_eq!(summary.grouped[0].total_calories, 104.0);
        assert_eq!(summary.grouped[1].quantity, 1);
    }

    #[test]
    fn test_summarize_jar_totals_are_consistent() {
        let entries = vec![
            fruit(1, "Apple", "Rosaceae", 52.0),
            fruit(2, "Banana", "Musaceae", 96.0),
            fruit(1, "Apple", "Rosaceae", 52.0),
            fruit(3, "Pear", "Rosaceae", 57.0),
        ];

        let summary = summarize_jar(&entries);

        let grouped_total: f64 = summary.grouped.iter().map(|g| g.total_calories).sum();
        assert_eq!(summary.total_calories, grouped_total);
        assert_eq!(summary.total_calories, 52.0 + 96.0 + 52.0 + 57.0);
    }

    #[test]
    fn test_summarize_jar_chart_data_mirrors_grouped() {
        let entries = vec![
            fruit(1, "Apple", "Rosaceae", 52.0),
            fruit(1, "Apple", "Rosaceae", 52.0),
            fruit(2, "Banana", "Musaceae", 96.0),
        ];

        let summary = summarize_jar(&entries);

        assert_eq!(summary.chart_data.len(), summary.grouped.len());
        for (slice, row) in summary.chart_data.iter().zip(&summary.grouped) {
            assert_eq!(slice.name, row.fruit.name);
            assert_eq!(slice.value, row.total_calories);
        }
    }

    #[test]
    fn test_summarize_jar_is_idempotent() {
        let entries = vec![
            fruit(1, "Apple", "Rosaceae", 52.0),
            fruit(2, "Banana", "Musaceae", 96.0),
            fruit(1, "Apple", "Rosaceae", 52.0),
        ];

        let first = summarize_jar(&entries);
        let second = summarize_jar(&entries);
        assert_eq!(first, second);
    }

    #[test]
    fn test_summarize_empty_jar() {
        let summary = summarize_jar(&[]);
        assert!(summary.grouped.is_empty());
        assert!(summary.chart_data.is_empty());
        assert_eq!(summary.total_calories, 0.0);
    }

    #[test]
    fn test_nutrient_shares_sum_to_one_hundred() {
        let fruit = fruit(1, "Apple", "Rosaceae", 52.0);
        let shares = nutrient_shares(&fruit);

        let labels: Vec<&str> = shares.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["carbohydrates", "protein", "fat", "sugar"]);

        let total: f64 = shares.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_nutrient_shares_all_zero_yields_zero_not_nan() {
        let mut zero = fruit(1, "Waterfruit", "Rosaceae", 0.0);
        zero.nutrition = Nutrition::default();

        let shares = nutrient_shares(&zero);
        for share in shares {
            assert_eq!(share.percent, 0.0);
        }
    }
}
