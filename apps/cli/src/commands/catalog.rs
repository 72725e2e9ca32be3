//! # Browse Commands
//!
//! Catalog browsing: the grouped listing and the single-fruit breakdown.
//!
//! ## Listing Display
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  $ fruitjar list --group-by family                                     │
//! │                                                                         │
//! │  Rosaceae (3)                                                           │
//! │    #6  Apple        52 kcal                                             │
//! │    #4  Pear         57 kcal                                             │
//! │    #3  Strawberry   29 kcal                                             │
//! │  Musaceae (1)                                                           │
//! │    #1  Banana       96 kcal                                             │
//! │                                                                         │
//! │  $ fruitjar list --table      (flat table, same records)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering is split from I/O: the `render_*` functions are pure and
//! return the final text, the command functions fetch state and print.

use crate::error::CliError;
use crate::state::CatalogState;
use fruitjar_core::{group_by, nutrient_shares, Fruit, FruitGroup, GroupKey};

/// How the catalog listing is laid out. Pure display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Collapsible-list style: group headers with indented rows.
    List,
    /// One flat table with a header row.
    Table,
}

/// Prints the catalog grouped by `key`.
pub async fn list(
    catalog: &mut CatalogState,
    key: GroupKey,
    mode: DisplayMode,
) -> Result<(), CliError> {
    let snapshot = catalog.ensure_loaded().await?;
    let groups = group_by(&snapshot.fruits, key);
    print!("{}", render_groups(&groups, mode));
    Ok(())
}

/// Prints one fruit's nutrition facts and macronutrient breakdown.
pub async fn show(catalog: &mut CatalogState, id: i64) -> Result<(), CliError> {
    let snapshot = catalog.ensure_loaded().await?;
    let fruit = snapshot
        .fruit_by_id(id)
        .ok_or(CliError::UnknownFruit { id })?;
    print!("{}", render_fruit(fruit));
    Ok(())
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders grouped catalog records in the chosen display mode.
pub fn render_groups(groups: &[FruitGroup], mode: DisplayMode) -> String {
    match mode {
        DisplayMode::List => {
            let mut out = String::new();
            for group in groups {
                out.push_str(&format!("{} ({})\n", group.label, group.fruits.len()));
                for fruit in &group.fruits {
                    out.push_str(&format!(
                        "  #{:<4} {:<20} {:>6.1} kcal\n",
                        fruit.id,
                        fruit.name,
                        fruit.nutrition.calories
                    ));
                }
            }
            out
        }
        DisplayMode::Table => {
            let mut out = format!(
                "{:<5} {:<20} {:<16} {:<16} {:<12} {:>8}\n",
                "ID", "NAME", "FAMILY", "ORDER", "GENUS", "KCAL"
            );
            for group in groups {
                for fruit in &group.fruits {
                    out.push_str(&format!(
                        "{:<5} {:<20} {:<16} {:<16} {:<12} {:>8.1}\n",
                        fruit.id,
                        fruit.name,
                        fruit.family,
                        fruit.order,
                        fruit.genus,
                        fruit.nutrition.calories
                    ));
                }
            }
            out
        }
    }
}

/// Renders one fruit's facts with the four-nutrient percentage breakdown.
pub fn render_fruit(fruit: &Fruit) -> String {
    let mut out = format!(
        "{} (id {})\n  family {} / order {} / genus {}\n\n",
        fruit.name, fruit.id, fruit.family, fruit.order, fruit.genus
    );
    out.push_str(&format!(
        "  {:<15} {:>6.1} kcal\n",
        "calories", fruit.nutrition.calories
    ));

    let grams = [
        ("carbohydrates", fruit.nutrition.carbohydrates),
        ("protein", fruit.nutrition.protein),
        ("fat", fruit.nutrition.fat),
        ("sugar", fruit.nutrition.sugar),
    ];
    for ((label, value), share) in grams.iter().zip(nutrient_shares(fruit)) {
        out.push_str(&format!(
            "  {:<15} {:>6.1} g    {:>5.1}%\n",
            label, value, share.percent
        ));
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
