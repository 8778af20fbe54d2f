//! Shared item and catalog types for the Armory crafting engine.
//!
//! This crate is the single source of truth for the data model the planner
//! operates on: item identity, recipes, and the catalog that ties them into
//! a crafting DAG.
//!
//! # Modules
//!
//! - [`item`] -- The [`ItemId`] identity newtype and the [`Item`] definition
//! - [`catalog`] -- The [`ItemCatalog`] recipe DAG and its queries
//! - [`error`] -- The [`CatalogError`] type for catalog construction and
//!   validation failures
//!
//! # Identity
//!
//! Two items are the same item iff they have the same name. [`ItemId`]
//! wraps the name and is the only equality the engine ever uses; display
//! and search metadata on [`Item`] never participate in identity.

pub mod catalog;
pub mod error;
pub mod item;

// Re-export all public types at crate root for convenience.
pub use catalog::ItemCatalog;
pub use error::CatalogError;
pub use item::{Item, ItemId};
