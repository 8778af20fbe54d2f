//! Integration tests for the planner against the standard item catalog.
//!
//! These mirror the scenarios the automation layers rely on: single-level
//! crafts, on-the-fly electronics production, exhausted ledgers, and the
//! three-level heavy-auto-turret chain.

// Integration tests use expect/unwrap extensively for clarity -- panicking
// on failure is the correct behavior in test code.
#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::too_many_lines,
    clippy::indexing_slicing
)]

use std::collections::BTreeMap;

use armory_catalog::standard::{
    AUTO_TURRET, C4_DETONATOR, CRYSTAL, ELECTRONICS, HEAVY_AUTO_TURRET, METAL_FOUNDATION,
    METAL_INGOT, ORGANIC_POLYMER, PASTE, SILICA_PEARL,
};
use armory_catalog::standard_catalog;
use armory_planner::{PlanError, compute_crafting_plan, flatten_item_cost};
use armory_types::ItemId;

/// Build an availability ledger from name/quantity pairs.
fn stock(entries: &[(&str, u64)]) -> BTreeMap<ItemId, u64> {
    entries
        .iter()
        .map(|(name, qty)| (ItemId::new(*name), *qty))
        .collect()
}

/// Build the expected `sub_components` ordering from name/quantity pairs.
fn subs(entries: &[(&str, u64)]) -> Vec<(ItemId, u64)> {
    entries
        .iter()
        .map(|(name, qty)| (ItemId::new(*name), *qty))
        .collect()
}

#[test]
fn foundation_plan_needs_no_sub_crafting() {
    let catalog = standard_catalog();
    let available = stock(&[(PASTE, 2000), (METAL_INGOT, 1500)]);

    let plan =
        compute_crafting_plan(&catalog, &ItemId::new(METAL_FOUNDATION), &available).unwrap();

    // 1500 ingots / 50 per craft binds at 30; paste is plentiful.
    assert_eq!(plan.craftable, 30);
    assert!(plan.sub_components.is_empty());
    assert_eq!(
        plan.total_cost,
        stock(&[(METAL_INGOT, 1500), (PASTE, 450)])
    );
}

#[test]
fn detonator_plan_crafts_missing_electronics() {
    let catalog = standard_catalog();
    let available = stock(&[
        (PASTE, 2000),
        (METAL_INGOT, 1500),
        (CRYSTAL, 150),
        (SILICA_PEARL, 2250),
        (ORGANIC_POLYMER, 500),
    ]);

    let plan = compute_crafting_plan(&catalog, &ItemId::new(C4_DETONATOR), &available).unwrap();

    // No electronics on hand, so every craft builds its 50 from pearls
    // and ingots; crystal and pearls both bind at 15 crafts.
    assert_eq!(plan.craftable, 15);
    assert_eq!(plan.sub_components, subs(&[(ELECTRONICS, 750)]));
    assert_eq!(
        plan.total_cost,
        stock(&[
            (PASTE, 225),
            (CRYSTAL, 150),
            (ELECTRONICS, 0),
            (METAL_INGOT, 900),
            (ORGANIC_POLYMER, 300),
            (SILICA_PEARL, 2250),
        ])
    );
}

#[test]
fn detonator_plan_with_unsatisfiable_electronics_is_zero() {
    let catalog = standard_catalog();
    // 49 electronics cannot cover even one craft, and with no pearls none
    // can be produced; crystal would bind at 0 extra anyway.
    let available = stock(&[
        (PASTE, 2000),
        (METAL_INGOT, 1500),
        (CRYSTAL, 150),
        (ELECTRONICS, 49),
        (ORGANIC_POLYMER, 500),
    ]);

    let plan = compute_crafting_plan(&catalog, &ItemId::new(C4_DETONATOR), &available).unwrap();

    assert_eq!(plan.craftable, 0);
    assert!(plan.sub_components.is_empty());
    // Every immediate ingredient is present in the cost, all at zero.
    assert_eq!(
        plan.total_cost,
        stock(&[
            (PASTE, 0),
            (CRYSTAL, 0),
            (ELECTRONICS, 0),
            (METAL_INGOT, 0),
            (ORGANIC_POLYMER, 0),
        ])
    );
}

#[test]
fn raw_target_is_an_error() {
    let catalog = standard_catalog();
    let result = compute_crafting_plan(
        &catalog,
        &ItemId::new(METAL_INGOT),
        &stock(&[(PASTE, 200)]),
    );
    assert_eq!(
        result,
        Err(PlanError::UncraftableTarget(ItemId::new(METAL_INGOT)))
    );
}

#[test]
fn heavy_turret_plan_orders_sub_components_by_depth() {
    let catalog = standard_catalog();
    let available = stock(&[
        (METAL_INGOT, 2550),
        (PASTE, 550),
        (CRYSTAL, 200),
        (ELECTRONICS, 70),
        (SILICA_PEARL, 8000),
        (ORGANIC_POLYMER, 10000),
        (AUTO_TURRET, 1),
    ]);

    let plan =
        compute_crafting_plan(&catalog, &ItemId::new(HEAVY_AUTO_TURRET), &available).unwrap();

    assert_eq!(plan.craftable, 3);
    // Electronics (depth 1) before the auto turret (depth 2) that needs
    // them: the stocked turret covers the first craft, two are built.
    assert_eq!(
        plan.sub_components,
        subs(&[(ELECTRONICS, 670), (AUTO_TURRET, 2)])
    );
}

#[test]
fn heavy_turret_plan_with_no_turret_stock() {
    let catalog = standard_catalog();
    let available = stock(&[
        (METAL_INGOT, 2550),
        (PASTE, 600),
        (CRYSTAL, 200),
        (ELECTRONICS, 70),
        (SILICA_PEARL, 8000),
        (ORGANIC_POLYMER, 10000),
    ]);

    let plan =
        compute_crafting_plan(&catalog, &ItemId::new(HEAVY_AUTO_TURRET), &available).unwrap();

    // All three turrets are built on the fly; the extra 50 paste funds
    // the third one's own paste line.
    assert_eq!(plan.craftable, 3);
    assert_eq!(
        plan.sub_components,
        subs(&[(ELECTRONICS, 740), (AUTO_TURRET, 3)])
    );
}

#[test]
fn caller_ledger_is_never_mutated_and_plans_are_idempotent() {
    let catalog = standard_catalog();
    let available = stock(&[
        (PASTE, 2000),
        (METAL_INGOT, 1500),
        (CRYSTAL, 150),
        (SILICA_PEARL, 2250),
        (ORGANIC_POLYMER, 500),
    ]);
    let snapshot = available.clone();

    let first = compute_crafting_plan(&catalog, &ItemId::new(C4_DETONATOR), &available).unwrap();
    let second = compute_crafting_plan(&catalog, &ItemId::new(C4_DETONATOR), &available).unwrap();

    assert_eq!(first, second);
    assert_eq!(available, snapshot);
}

#[test]
fn more_stock_never_reduces_the_plan() {
    let catalog = standard_catalog();
    let base = stock(&[(PASTE, 2000), (METAL_INGOT, 1500)]);
    let baseline = compute_crafting_plan(&catalog, &ItemId::new(METAL_FOUNDATION), &base)
        .unwrap()
        .craftable;

    for (name, bonus) in [(PASTE, 1), (METAL_INGOT, 50), (PASTE, 10_000)] {
        let mut richer = base.clone();
        let slot = richer.entry(ItemId::new(name)).or_insert(0);
        *slot = slot.saturating_add(bonus);
        let improved = compute_crafting_plan(&catalog, &ItemId::new(METAL_FOUNDATION), &richer)
            .unwrap()
            .craftable;
        assert!(improved >= baseline, "extra {name} reduced the plan");
    }
}

#[test]
fn missing_ledger_entries_are_treated_as_zero() {
    let catalog = standard_catalog();
    // Nothing on hand at all: valid input, zero output.
    let plan =
        compute_crafting_plan(&catalog, &ItemId::new(METAL_FOUNDATION), &BTreeMap::new())
            .unwrap();
    assert_eq!(plan.craftable, 0);
    assert!(plan.sub_components.is_empty());
    assert_eq!(plan.total_cost, stock(&[(METAL_INGOT, 0), (PASTE, 0)]));
}

#[test]
fn flattened_heavy_turret_cost_reaches_raw_materials() {
    let catalog = standard_catalog();
    let flat = flatten_item_cost(&catalog, &ItemId::new(HEAVY_AUTO_TURRET), 1).unwrap();

    // Auto turret: 50 paste, 20 polymer, 140 ingots, 70 electronics
    // (210 pearls, 70 ingots). Heavy: 150 paste, 400 ingots, 200
    // electronics (600 pearls, 200 ingots).
    assert_eq!(
        flat,
        stock(&[
            (PASTE, 200),
            (ORGANIC_POLYMER, 20),
            (METAL_INGOT, 810),
            (SILICA_PEARL, 810),
        ])
    );
}
