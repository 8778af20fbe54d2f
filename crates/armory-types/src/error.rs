//! Error types for the `armory-types` crate.
//!
//! All fallible catalog operations return [`CatalogError`] through the
//! standard [`Result`] type alias.

use crate::item::ItemId;

/// Errors that can occur while building or validating an item catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// An item with the same name was inserted twice.
    #[error("duplicate item: {0}")]
    DuplicateItem(ItemId),

    /// An item was found inside its own recipe expansion.
    #[error("cyclic recipe detected at {0}")]
    CyclicRecipe(ItemId),
}
