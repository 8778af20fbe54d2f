//! The two-phase crafting-plan resolver.
//!
//! Phase A answers "how many can I craft from the immediate ingredients I
//! already hold" with a single floor-min. Phase B then probes for *extra*
//! crafts, one at a time: any immediate ingredient that is short of stock
//! but has its own recipe may be produced on the fly from the remaining
//! ledger, recursively. An extra craft only counts when every one of its
//! ingredients was satisfied; a partially satisfiable attempt is discarded
//! whole and resolution stops.
//!
//! Each attempt strictly consumes ledger material, so resolution
//! terminates after at most O(total available material) steps without any
//! artificial iteration cap.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use armory_types::{ItemCatalog, ItemId};

use crate::error::PlanError;

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// The resolved plan for crafting as many of a target item as the ledger
/// allows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftingPlan {
    /// Maximum whole number of the target item producible (may be 0).
    pub craftable: u64,

    /// Quantity of each intermediate item that had to be crafted from its
    /// own sub-materials, rather than drawn from stock.
    ///
    /// Materialized in recipe-tree-depth ascending order, so an
    /// intermediate always appears after the intermediates it depends on.
    /// Items satisfied entirely from stock are absent.
    pub sub_components: Vec<(ItemId, u64)>,

    /// Quantity of each material actually consumed to reach `craftable`.
    ///
    /// Every item of the target's immediate recipe is always present, with
    /// value 0 when it ended up unused. Raw materials drawn while crafting
    /// intermediates on the fly are included under their own names.
    pub total_cost: BTreeMap<ItemId, u64>,
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Compute the crafting plan for `target` against the available materials.
///
/// The caller's `available` map is treated as read-only: the resolver
/// works on its own copy. Items missing from the map are treated as held
/// in quantity 0; no "unknown item" error exists.
///
/// # Errors
///
/// Returns [`PlanError::UncraftableTarget`] if `target` is raw or not
/// defined in the catalog.
pub fn compute_crafting_plan(
    catalog: &ItemCatalog,
    target: &ItemId,
    available: &BTreeMap<ItemId, u64>,
) -> Result<CraftingPlan, PlanError> {
    let recipe = catalog
        .recipe(target)
        .ok_or_else(|| PlanError::UncraftableTarget(target.clone()))?;

    // Working ledger: the caller's stock plus zero entries for every
    // immediate ingredient, so lookups below never miss.
    let mut ledger = available.clone();
    for item in recipe.keys() {
        ledger.entry(item.clone()).or_insert(0);
    }

    // Every immediate ingredient appears in the cost, even at 0.
    let mut total_cost: BTreeMap<ItemId, u64> =
        recipe.keys().map(|item| (item.clone(), 0)).collect();

    // Phase A: instant craftability from on-hand stock of the immediate
    // ingredients, origin (raw or composite) not considered.
    let instant = recipe
        .iter()
        .filter(|(_, qty)| **qty > 0)
        .map(|(item, qty)| {
            ledger
                .get(item)
                .copied()
                .unwrap_or(0)
                .checked_div(*qty)
                .unwrap_or(0)
        })
        .min()
        .unwrap_or(0);

    for (item, qty) in recipe {
        let used = qty.saturating_mul(instant);
        if let Some(slot) = total_cost.get_mut(item) {
            *slot = slot.saturating_add(used);
        }
        if let Some(held) = ledger.get_mut(item) {
            *held = held.saturating_sub(used);
        }
    }

    debug!(item = %target, instant, "instant craftability resolved");

    // Phase B: keep attempting one extra craft until an ingredient cannot
    // be satisfied. Each attempt runs against a snapshot and is committed
    // only when it succeeds in full.
    let mut sub_components: Vec<(ItemId, u64)> = Vec::new();
    let mut extra: u64 = 0;
    loop {
        let mut attempt = CraftAttempt::new(catalog, ledger.clone());
        match attempt.craft_one(recipe) {
            Ok(()) => {
                let consumed_nothing = attempt.consumed.is_empty();
                extra = extra.saturating_add(1);
                ledger = attempt.ledger;
                for (item, qty) in attempt.consumed {
                    let slot = total_cost.entry(item).or_insert(0);
                    *slot = slot.saturating_add(qty);
                }
                for (item, qty) in attempt.crafted {
                    bump(&mut sub_components, &item, qty);
                }
                // A craft that drew nothing from the ledger (an empty or
                // all-zero recipe) would repeat forever; stop after one.
                if consumed_nothing {
                    break;
                }
            }
            Err(shortfall) => {
                debug!(
                    item = %target,
                    blocked_on = %shortfall.item,
                    extra,
                    "no further craft possible"
                );
                break;
            }
        }
    }

    sub_components.sort_by_key(|(item, _)| catalog.depth(item));

    Ok(CraftingPlan {
        craftable: instant.saturating_add(extra),
        sub_components,
        total_cost,
    })
}

// ---------------------------------------------------------------------------
// Single-craft attempts
// ---------------------------------------------------------------------------

/// The ingredient that stopped an attempt: raw (or unknown) and short of
/// stock, or a composite whose own attempt bottomed out on one.
struct Shortfall {
    /// The item that could not be satisfied.
    item: ItemId,
}

/// Working state for one attempted extra craft of the target.
///
/// Owns a snapshot of the ledger; the caller commits the snapshot on
/// success and drops it on failure, so a failed attempt never leaks
/// partial consumption into the plan.
struct CraftAttempt<'a> {
    catalog: &'a ItemCatalog,
    /// Remaining materials, mutated as the attempt consumes them.
    ledger: BTreeMap<ItemId, u64>,
    /// Everything drawn from the ledger during this attempt.
    consumed: BTreeMap<ItemId, u64>,
    /// Intermediates produced on the fly, in first-crafted order.
    crafted: Vec<(ItemId, u64)>,
}

impl<'a> CraftAttempt<'a> {
    const fn new(catalog: &'a ItemCatalog, ledger: BTreeMap<ItemId, u64>) -> Self {
        Self {
            catalog,
            ledger,
            consumed: BTreeMap::new(),
            crafted: Vec::new(),
        }
    }

    /// Satisfy every ingredient of one craft of the given recipe.
    fn craft_one(&mut self, recipe: &BTreeMap<ItemId, u64>) -> Result<(), Shortfall> {
        for (item, qty) in recipe {
            if *qty > 0 {
                self.satisfy(item, *qty)?;
            }
        }
        Ok(())
    }

    /// Provide exactly `needed` units of `item`.
    ///
    /// Stock is consumed whole when it suffices; a short line is never
    /// partially drawn. Otherwise the item must be composite, and exactly
    /// `needed` units of it are produced one craft at a time through the
    /// same rule applied to its own recipe.
    fn satisfy(&mut self, item: &ItemId, needed: u64) -> Result<(), Shortfall> {
        let held = self.ledger.get(item).copied().unwrap_or(0);
        if held >= needed {
            if let Some(slot) = self.ledger.get_mut(item) {
                *slot = slot.saturating_sub(needed);
            }
            let used = self.consumed.entry(item.clone()).or_insert(0);
            *used = used.saturating_add(needed);
            return Ok(());
        }

        let catalog = self.catalog;
        let Some(recipe) = catalog.recipe(item) else {
            return Err(Shortfall { item: item.clone() });
        };

        for _ in 0..needed {
            for (sub, qty) in recipe {
                if *qty > 0 {
                    self.satisfy(sub, *qty)?;
                }
            }
        }
        bump(&mut self.crafted, item, needed);
        Ok(())
    }
}

/// Add `qty` under `item`, preserving first-insertion order.
fn bump(entries: &mut Vec<(ItemId, u64)>, item: &ItemId, qty: u64) {
    if let Some((_, count)) = entries.iter_mut().find(|(id, _)| id == item) {
        *count = count.saturating_add(qty);
    } else {
        entries.push((item.clone(), qty));
    }
}
