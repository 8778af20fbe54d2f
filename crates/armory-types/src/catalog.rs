//! The item catalog: the static recipe DAG the planner resolves against.
//!
//! An [`ItemCatalog`] maps item identifiers to their definitions. Viewed as
//! item -> required-sub-items, the recipes form a directed acyclic graph;
//! raw items are the leaves. The planner assumes acyclicity rather than
//! checking it on every call -- callers loading untrusted content can run
//! [`ItemCatalog::validate_acyclic`] once after construction.
//!
//! Items referenced by a recipe but never defined in the catalog are
//! treated as raw. This mirrors the implicit-zero policy of the
//! availability ledger: the engine never raises for an unknown item, it
//! simply cannot craft it.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::item::{Item, ItemId};

/// The set of item definitions forming the crafting DAG.
///
/// Load-once, read-many: the catalog is built by a content layer at
/// startup and then only queried. All queries are by [`ItemId`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCatalog {
    /// All item definitions, keyed by identifier.
    items: BTreeMap<ItemId, Item>,
}

impl ItemCatalog {
    /// Create a new empty catalog.
    pub const fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Return the number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Return whether the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert an item definition.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateItem`] if an item with the same
    /// identifier is already present.
    pub fn insert(&mut self, item: Item) -> Result<(), CatalogError> {
        if self.items.contains_key(&item.id) {
            return Err(CatalogError::DuplicateItem(item.id));
        }
        self.items.insert(item.id.clone(), item);
        Ok(())
    }

    /// Look up an item definition by identifier.
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    /// Return whether the catalog defines the given item.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.contains_key(id)
    }

    /// Return the recipe for an item, or `None` for raw or unknown items.
    pub fn recipe(&self, id: &ItemId) -> Option<&BTreeMap<ItemId, u64>> {
        self.items.get(id).and_then(|item| item.recipe.as_ref())
    }

    /// Return whether an item has no recipe.
    ///
    /// Unknown items are raw: they cannot be crafted.
    pub fn is_raw(&self, id: &ItemId) -> bool {
        self.recipe(id).is_none()
    }

    /// Iterate over all item definitions in identifier order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Return the recipe-tree depth of an item.
    ///
    /// Raw and unknown items have depth 0; a composite item has depth
    /// `1 + max(depth of its sub-items)`. The planner uses this metric
    /// only to order crafted sub-components for presentation.
    ///
    /// Recurses through the recipe graph: on a cyclic catalog this does
    /// not terminate. Run [`validate_acyclic`] first when the content is
    /// untrusted.
    ///
    /// [`validate_acyclic`]: ItemCatalog::validate_acyclic
    pub fn depth(&self, id: &ItemId) -> u32 {
        self.recipe(id).map_or(0, |recipe| {
            recipe
                .keys()
                .map(|sub| self.depth(sub))
                .max()
                .unwrap_or(0)
                .saturating_add(1)
        })
    }

    /// Verify that no item appears, directly or transitively, within its
    /// own recipe.
    ///
    /// This is an opt-in guard for untrusted content. The planner itself
    /// never runs it: a cyclic catalog handed to the planner is a
    /// precondition violation, not a recoverable input.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CyclicRecipe`] naming the first item found
    /// inside its own expansion.
    pub fn validate_acyclic(&self) -> Result<(), CatalogError> {
        let mut settled: BTreeSet<&ItemId> = BTreeSet::new();
        for id in self.items.keys() {
            let mut path: BTreeSet<&ItemId> = BTreeSet::new();
            self.visit(id, &mut path, &mut settled)?;
        }
        Ok(())
    }

    /// Depth-first walk with an explicit path set for back-edge detection.
    fn visit<'a>(
        &'a self,
        id: &'a ItemId,
        path: &mut BTreeSet<&'a ItemId>,
        settled: &mut BTreeSet<&'a ItemId>,
    ) -> Result<(), CatalogError> {
        if settled.contains(id) {
            return Ok(());
        }
        if !path.insert(id) {
            return Err(CatalogError::CyclicRecipe(id.clone()));
        }
        if let Some(recipe) = self.recipe(id) {
            for sub in recipe.keys() {
                self.visit(sub, path, settled)?;
            }
        }
        path.remove(id);
        settled.insert(id);
        Ok(())
    }
}
