//! Item content for the Armory crafting engine.
//!
//! The planner is catalog-agnostic; this crate is the content layer that
//! feeds it. It provides two sources of [`ItemCatalog`] data:
//!
//! - [`standard`] -- The built-in standard item set: raw materials and the
//!   crafted goods built from them, with per-craft quantities.
//! - [`file`] -- A YAML catalog format for loading item definitions from
//!   data files instead of code.
//!
//! Both sources produce the same [`ItemCatalog`] type and can be mixed by
//! inserting file-loaded items into the standard set (duplicates are
//! rejected by the catalog itself).
//!
//! [`ItemCatalog`]: armory_types::ItemCatalog

pub mod file;
pub mod standard;

// Re-export primary entry points at crate root.
pub use file::{CatalogFile, CatalogFileError};
pub use standard::standard_catalog;
