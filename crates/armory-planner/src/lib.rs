//! Crafting-cost resolution for the Armory engine.
//!
//! Given an item catalog (a recipe DAG) and a ledger of on-hand materials,
//! this crate answers the one question the automation layers keep asking:
//! *how many of this can I make, what do I have to craft along the way,
//! and what will it cost me?*
//!
//! # Modules
//!
//! - [`flatten`] -- Bill-of-materials expansion down to raw materials
//! - [`plan`] -- The two-phase crafting-plan resolver
//! - [`error`] -- The [`PlanError`] type for precondition violations
//!
//! # Contract
//!
//! Both operations are pure: they never mutate the caller's availability
//! map, hold no state between calls, and are deterministic for identical
//! inputs. Missing availability entries are treated as zero, never as an
//! error. The catalog is assumed acyclic; validating untrusted content is
//! the caller's job (see `ItemCatalog::validate_acyclic`).

pub mod error;
pub mod flatten;
pub mod plan;

// Re-export primary entry points at crate root.
pub use error::PlanError;
pub use flatten::{flatten_cost, flatten_item_cost};
pub use plan::{CraftingPlan, compute_crafting_plan};
