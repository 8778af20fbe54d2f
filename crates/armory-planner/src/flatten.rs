//! Bill-of-materials flattening.
//!
//! Expands a recipe (or an arbitrary batch expressed as item -> quantity)
//! recursively into the total quantity of every *raw* material required,
//! multiplying quantities down each level. An auto turret that needs 70
//! electronics, each needing 3 silica pearls, contributes 210 pearls to
//! the flattened cost.

use std::collections::BTreeMap;

use armory_types::{ItemCatalog, ItemId};

use crate::error::PlanError;

/// Flatten a recipe into its total raw-material cost.
///
/// Every composite entry is expanded through its own recipe, recursively,
/// with the parent quantity multiplying each level below it. The result
/// contains only raw (and unknown, therefore raw) items. Pure: the input
/// map is not touched and iteration order does not affect the output.
pub fn flatten_cost(
    catalog: &ItemCatalog,
    recipe: &BTreeMap<ItemId, u64>,
) -> BTreeMap<ItemId, u64> {
    let mut cost = BTreeMap::new();
    for (item, quantity) in recipe {
        expand(catalog, item, *quantity, &mut cost);
    }
    cost
}

/// Flatten `count` crafts of a single composite item.
///
/// Convenience wrapper over [`flatten_cost`] for the common "what would N
/// of these cost me in raw materials" question.
///
/// # Errors
///
/// Returns [`PlanError::UncraftableTarget`] if the item is raw or unknown.
pub fn flatten_item_cost(
    catalog: &ItemCatalog,
    item: &ItemId,
    count: u64,
) -> Result<BTreeMap<ItemId, u64>, PlanError> {
    let recipe = catalog
        .recipe(item)
        .ok_or_else(|| PlanError::UncraftableTarget(item.clone()))?;
    let batch = recipe
        .iter()
        .map(|(sub, qty)| (sub.clone(), qty.saturating_mul(count)))
        .collect();
    Ok(flatten_cost(catalog, &batch))
}

/// Accumulate the raw cost of `multiplier` units of `item` into `cost`.
fn expand(
    catalog: &ItemCatalog,
    item: &ItemId,
    multiplier: u64,
    cost: &mut BTreeMap<ItemId, u64>,
) {
    match catalog.recipe(item) {
        None => {
            let slot = cost.entry(item.clone()).or_insert(0);
            *slot = slot.saturating_add(multiplier);
        }
        Some(recipe) => {
            if multiplier == 0 {
                return;
            }
            for (sub, qty) in recipe {
                expand(catalog, sub, qty.saturating_mul(multiplier), cost);
            }
        }
    }
}
