//! Catalog item types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::language::Language;

/// Stable identity of a catalog item
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A purchasable item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Stable id, unique across main and seasonal items
    pub id: ItemId,

    /// Canonical name, in the base language
    pub name: String,

    /// Category label ("Dairy", "Produce", ...)
    pub category: String,

    /// Unit price
    pub price: Decimal,

    /// Whether the item can currently be added
    pub in_stock: bool,

    /// Maximum quantity of this item on one list
    pub max_stock: u32,

    /// Related items offered as substitutes
    #[serde(default)]
    pub alternatives: Vec<String>,

    /// Localized names, one per non-base language in [`Language::ALL`] order
    #[serde(default)]
    pub translations: Vec<String>,
}

impl CatalogItem {
    /// Case-insensitive match against the canonical name or any translation
    pub fn matches(&self, name: &str) -> bool {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return false;
        }

        self.name.to_lowercase() == wanted
            || self
                .translations
                .iter()
                .any(|translation| translation.to_lowercase() == wanted)
    }

    /// Name to show a user of `language`
    ///
    /// Falls back to the canonical name when the translation slot is missing
    /// or blank.
    pub fn display_name(&self, language: Language) -> &str {
        language
            .translation_index()
            .and_then(|index| self.translations.get(index))
            .map(String::as_str)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(self.name.as_str())
    }

    /// Translation for `language`, `None` for the base language
    pub fn translation(&self, language: Language) -> Option<&str> {
        language
            .translation_index()
            .and_then(|index| self.translations.get(index))
            .map(String::as_str)
    }
}
