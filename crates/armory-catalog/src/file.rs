//! YAML catalog loading.
//!
//! Item content can live in a data file instead of code. The format is a
//! flat list of item entries; composite items carry an inline
//! name -> quantity recipe mapping:
//!
//! ```yaml
//! items:
//!   - name: Silica Pearl
//!     search_name: pearls
//!   - name: Ingot
//!     search_name: ingot
//!     stack_size: 300
//!   - name: Electronics
//!     search_name: electronics
//!     recipe:
//!       Silica Pearl: 3
//!       Ingot: 1
//! ```
//!
//! Loading builds an [`ItemCatalog`] and rejects duplicate names; it does
//! not validate acyclicity, which callers with untrusted content should do
//! themselves via [`ItemCatalog::validate_acyclic`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use armory_types::{CatalogError, Item, ItemCatalog, ItemId};

/// Errors that can occur when loading a catalog file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogFileError {
    /// Failed to read the catalog file from disk.
    #[error("failed to read catalog file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse catalog YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The parsed content violates a catalog invariant.
    #[error("invalid catalog content: {source}")]
    Catalog {
        /// The underlying catalog error.
        #[from]
        source: CatalogError,
    },
}

impl From<serde_yml::Error> for CatalogFileError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// A single item entry in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemEntry {
    /// The item's unique display name.
    pub name: String,

    /// Lowercase inventory search fragment; defaults to the name lowercased.
    #[serde(default)]
    pub search_name: Option<String>,

    /// Maximum units per inventory stack.
    #[serde(default = "default_stack_size")]
    pub stack_size: u32,

    /// Recipe entries (sub-item name -> quantity per craft); absent for
    /// raw items.
    #[serde(default)]
    pub recipe: Option<BTreeMap<String, u64>>,
}

/// Default stack size for entries that omit it.
const fn default_stack_size() -> u32 {
    100
}

/// Top-level catalog file structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogFile {
    /// All item entries, in file order.
    #[serde(default)]
    pub items: Vec<ItemEntry>,
}

impl CatalogFile {
    /// Load and build a catalog from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogFileError::Io`] if the file cannot be read,
    /// [`CatalogFileError::Yaml`] if the content is not valid YAML, or
    /// [`CatalogFileError::Catalog`] if it contains duplicate item names.
    pub fn from_file(path: &Path) -> Result<ItemCatalog, CatalogFileError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and build a catalog from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogFileError::Yaml`] if the string is not valid YAML,
    /// or [`CatalogFileError::Catalog`] on duplicate item names.
    pub fn parse(yaml: &str) -> Result<ItemCatalog, CatalogFileError> {
        let file: Self = serde_yml::from_str(yaml)?;
        file.build()
    }

    /// Build an [`ItemCatalog`] from the parsed entries.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogFileError::Catalog`] on duplicate item names.
    pub fn build(self) -> Result<ItemCatalog, CatalogFileError> {
        let mut catalog = ItemCatalog::new();
        for entry in self.items {
            let search_name = entry
                .search_name
                .unwrap_or_else(|| entry.name.to_lowercase());
            let item = match entry.recipe {
                None => Item::raw(entry.name, search_name, entry.stack_size),
                Some(recipe) => Item::composite(
                    entry.name,
                    search_name,
                    entry.stack_size,
                    recipe.into_iter().map(|(name, qty)| (ItemId::new(name), qty)),
                ),
            };
            catalog.insert(item)?;
        }
        Ok(catalog)
    }
}
