//! Catalog data file parsing and validation

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::CatalogItem;
use crate::error::CatalogError;
use crate::language::Language;

/// On-disk catalog document (`catalog.yml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogManifest {
    /// Main catalog
    pub items: Vec<CatalogItem>,

    /// Seasonal items, disjoint from `items`
    #[serde(default)]
    pub seasonal: Vec<CatalogItem>,
}

impl CatalogManifest {
    /// Parse a manifest from YAML (not validated)
    pub fn from_yaml(content: &str) -> Result<Self, CatalogError> {
        serde_yaml_ng::from_str(content).map_err(|source| CatalogError::Parse { source })
    }

    /// Validate the manifest
    ///
    /// Ids must be unique across both lists (which also keeps the lists
    /// disjoint), every item needs a name, a non-negative price, a maximum of
    /// at least 1, and one translation slot per non-base language.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();

        for item in self.items.iter().chain(&self.seasonal) {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: item.id.to_string(),
                });
            }

            let invalid = |reason: &str| CatalogError::InvalidItem {
                id: item.id.to_string(),
                reason: reason.to_string(),
            };

            if item.id.as_str().trim().is_empty() {
                return Err(invalid("id is empty"));
            }
            if item.name.trim().is_empty() {
                return Err(invalid("name is empty"));
            }
            if item.price < Decimal::ZERO {
                return Err(invalid("price is negative"));
            }
            if item.max_stock == 0 {
                return Err(invalid("maxStock must be at least 1"));
            }
            if item.translations.len() != Language::translation_slots() {
                return Err(CatalogError::InvalidItem {
                    id: item.id.to_string(),
                    reason: format!(
                        "expected {} translations, found {}",
                        Language::translation_slots(),
                        item.translations.len()
                    ),
                });
            }
        }

        Ok(())
    }
}
