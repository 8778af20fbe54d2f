//! Error types for the `armory-planner` crate.
//!
//! The planner has exactly one failure mode: being asked to craft an item
//! that has no recipe. Everything else -- missing availability entries,
//! unsatisfiable recipes, empty ledgers -- is a valid input with a valid
//! (possibly zero) answer.

use armory_types::ItemId;

/// Errors that can occur during crafting-plan resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// The target item has no recipe and cannot be crafted.
    ///
    /// Raised for raw items and for items the catalog does not define.
    #[error("{0} has no recipe and cannot be crafted")]
    UncraftableTarget(ItemId),
}
