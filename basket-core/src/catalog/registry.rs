//! The immutable item registry

use rand::seq::SliceRandom;
use rand::Rng;
use std::path::Path;
use tracing::debug;

use super::{CatalogItem, CatalogManifest, ItemId};
use crate::error::CatalogError;

/// Category reported for names that are not in the catalog
pub const UNCATEGORIZED: &str = "Uncategorized";

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.yml");

/// Read-only registry of purchasable items
///
/// Share it with `Arc<Catalog>`; there are no mutation operations.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    seasonal: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog from a manifest, validating it first
    pub fn from_manifest(manifest: CatalogManifest) -> Result<Self, CatalogError> {
        manifest.validate()?;
        debug!(
            "Catalog ready: {} items, {} seasonal",
            manifest.items.len(),
            manifest.seasonal.len()
        );
        Ok(Self {
            items: manifest.items,
            seasonal: manifest.seasonal,
        })
    }

    /// Parse and validate a catalog from YAML
    pub fn from_yaml(content: &str) -> Result<Self, CatalogError> {
        Self::from_manifest(CatalogManifest::from_yaml(content)?)
    }

    /// Load a catalog file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// The catalog shipped with the crate
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml(BUILTIN_CATALOG)
    }

    /// Main catalog items, in data order
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Seasonal items, disjoint from [`Self::items`]
    pub fn seasonal_items(&self) -> &[CatalogItem] {
        &self.seasonal
    }

    /// Find an item by canonical name or translation (case-insensitive, exact)
    ///
    /// Main items are searched before seasonal ones.
    pub fn lookup(&self, name: &str) -> Option<&CatalogItem> {
        self.all().find(|item| item.matches(name))
    }

    /// Find an item by id
    pub fn get(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.all().find(|item| &item.id == id)
    }

    /// Category of the named item, or [`UNCATEGORIZED`]
    pub fn categorize(&self, name: &str) -> &str {
        self.lookup(name)
            .map(|item| item.category.as_str())
            .unwrap_or(UNCATEGORIZED)
    }

    /// `n` distinct main-catalog items chosen without replacement
    ///
    /// Returns the whole catalog (shuffled) when `n` exceeds its size. The
    /// order depends on `rng`; pass a seeded generator for reproducible output.
    pub fn sample_random<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<&CatalogItem> {
        self.items.choose_multiple(rng, n).collect()
    }

    /// Number of main catalog items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn all(&self) -> impl Iterator<Item = &CatalogItem> + '_ {
        self.items.iter().chain(self.seasonal.iter())
    }
}
