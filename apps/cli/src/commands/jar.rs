//! # Jar Commands
//!
//! The jar's command surface on the terminal.
//!
//! ## Jar Display
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  $ fruitjar jar                                                         │
//! │                                                                         │
//! │  JAR                                                                    │
//! │    2 x Apple        104.0 kcal                                          │
//! │    1 x Banana        96.0 kcal                                          │
//! │  ──────────────────────────────                                         │
//! │  TOTAL              200.0 kcal                                          │
//! │                                                                         │
//! │  Calorie breakdown                                                      │
//! │    Apple   52.0%                                                        │
//! │    Banana  48.0%                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutating commands print a one-line confirmation with the derived
//! quantity, so the effect is visible without a second invocation.

use crate::error::CliError;
use crate::state::{CatalogState, JarState};
use fruitjar_core::{group_by, GroupKey, JarSummary};

/// Adds one fruit to the jar by catalog id.
pub async fn add(
    catalog: &mut CatalogState,
    jar: &mut JarState,
    id: i64,
) -> Result<(), CliError> {
    let snapshot = catalog.ensure_loaded().await?;
    let fruit = snapshot
        .fruit_by_id(id)
        .ok_or(CliError::UnknownFruit { id })?
        .clone();
    let name = fruit.name.clone();

    jar.store_mut().add_fruit(fruit).await?;
    println!("Added {} (quantity now {})", name, jar.store().quantity(id));
    Ok(())
}

/// Adds every fruit in one taxonomy group to the jar.
pub async fn add_group(
    catalog: &mut CatalogState,
    jar: &mut JarState,
    key: GroupKey,
    label: &str,
) -> Result<(), CliError> {
    let snapshot = catalog.ensure_loaded().await?;
    let groups = group_by(&snapshot.fruits, key);
    let group = groups
        .into_iter()
        .find(|g| g.label.eq_ignore_ascii_case(label))
        .ok_or_else(|| CliError::UnknownGroup {
            key: format!("{key:?}").to_lowercase(),
            label: label.to_string(),
        })?;

    let count = group.fruits.len();
    jar.store_mut().add_group(group.fruits).await?;
    println!("Added all of {} ({} fruits)", group.label, count);
    Ok(())
}

/// Removes ALL copies of a fruit from the jar.
pub async fn remove(jar: &mut JarState, id: i64) -> Result<(), CliError> {
    let removed = jar.store().quantity(id);
    jar.store_mut().remove_fruit(id).await?;
    let noun = if removed == 1 { "entry" } else { "entries" };
    println!("Removed {removed} {noun} of id {id}");
    Ok(())
}

/// Sets a fruit's quantity to exactly `n`.
pub async fn set_quantity(jar: &mut JarState, id: i64, n: usize) -> Result<(), CliError> {
    let known = jar.store().quantity(id) > 0;
    jar.store_mut().set_quantity(id, n).await?;

    if !known && n > 0 {
        // The documented no-op: quantity changes apply only to fruits
        // already in the jar.
        println!("Id {id} is not in the jar; add it first (nothing changed)");
    } else {
        println!("Quantity of id {id} is now {}", jar.store().quantity(id));
    }
    Ok(())
}

/// Empties the jar.
pub async fn clear(jar: &mut JarState) -> Result<(), CliError> {
    jar.store_mut().clear().await?;
    println!("Jar cleared");
    Ok(())
}

/// Prints the jar: grouped rows, total, and the calorie breakdown.
pub fn show(jar: &JarState) -> Result<(), CliError> {
    print!("{}", render_summary(&jar.store().summary()));
    Ok(())
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders the jar summary as text.
pub fn render_summary(summary: &JarSummary) -> String {
    if summary.grouped.is_empty() {
        return "The jar is empty\n".to_string();
    }

    let mut out = String::from("JAR\n");
    for row in &summary.grouped {
        out.push_str(&format!(
            "  {:>3} x {:<16} {:>8.1} kcal\n",
            row.quantity, row.fruit.name, row.total_calories
        ));
    }
    out.push_str(&format!(
        "{}\nTOTAL {:>23.1} kcal\n",
        "-".repeat(38),
        summary.total_calories
    ));

    // The pie chart, flattened: each slice's share of the total.
    out.push_str("\nCalorie breakdown\n");
    for slice in &summary.chart_data {
        let percent = if summary.total_calories == 0.0 {
            0.0
        } else {
            slice.value / summary.total_calories * 100.0
        };
        out.push_str(&format!("  {:<16} {:>5.1}%\n", slice.name, percent));
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
