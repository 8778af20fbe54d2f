//! Item identity and definition.
//!
//! An [`Item`] is an immutable value: a unique name, some display and
//! search metadata owned by UI layers, and an optional recipe. Items with
//! no recipe are *raw* -- terminal nodes of the crafting DAG. Items with a
//! recipe are *composite* and can be produced from their sub-items.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Unique identifier for an item: its display name.
///
/// Equality, ordering, and hashing are all by name, so an `ItemId` can key
/// a [`BTreeMap`] deterministically. Two items are the same item iff their
/// identifiers are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an identifier from an item name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Return the item name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A single item definition.
///
/// The `search_name` and `stack_size` fields are carried for the inventory
/// layers that render and search items; the planner ignores them entirely.
/// The `recipe` maps each required sub-item to its quantity per single
/// craft. `None` means the item is raw and cannot be crafted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// The item's unique identifier (its display name).
    pub id: ItemId,
    /// Lowercase fragment used to search for the item in an inventory.
    pub search_name: String,
    /// Maximum units per inventory stack.
    pub stack_size: u32,
    /// Required sub-items and quantity per craft; `None` for raw items.
    pub recipe: Option<BTreeMap<ItemId, u64>>,
}

impl Item {
    /// Create a raw (uncraftable) item definition.
    pub fn raw(
        id: impl Into<ItemId>,
        search_name: impl Into<String>,
        stack_size: u32,
    ) -> Self {
        Self {
            id: id.into(),
            search_name: search_name.into(),
            stack_size,
            recipe: None,
        }
    }

    /// Create a composite item definition from its recipe entries.
    pub fn composite<I, R>(
        id: impl Into<ItemId>,
        search_name: impl Into<String>,
        stack_size: u32,
        recipe: R,
    ) -> Self
    where
        I: Into<ItemId>,
        R: IntoIterator<Item = (I, u64)>,
    {
        Self {
            id: id.into(),
            search_name: search_name.into(),
            stack_size,
            recipe: Some(
                recipe
                    .into_iter()
                    .map(|(id, qty)| (id.into(), qty))
                    .collect(),
            ),
        }
    }

    /// Return whether this item has no recipe.
    pub const fn is_raw(&self) -> bool {
        self.recipe.is_none()
    }
}
