//! Shopping list state machine
//!
//! A [`ShoppingList`] is a value. Every operation borrows the current
//! snapshot and returns a new one (or a [`Rejection`]); the receiver is never
//! modified, so a caller holding an older snapshot keeps seeing exactly what
//! it saw before.
//!
//! Invariants kept by every operation:
//! - entries are unique by item id, in order of first add
//! - `1 <= quantity <= max_stock` for every entry
//! - a rejected operation leaves no trace

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, CatalogItem, ItemId};
use crate::error::Rejection;
use crate::language::Language;

/// One line of the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    pub item_id: ItemId,
    pub quantity: u32,
}

/// Display-ready view of a list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListLine {
    pub item_id: ItemId,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

/// Ordered, duplicate-free list of entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    entries: Vec<ListEntry>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of `item`
    ///
    /// Out-of-stock items are refused whatever the quantity. Quantities below
    /// 1 are [`Rejection::InvalidQuantity`]. An existing entry grows in place;
    /// a new one is appended. Either way the resulting quantity may not exceed
    /// `item.max_stock`.
    pub fn add(&self, item: &CatalogItem, quantity: i64) -> Result<Self, Rejection> {
        if !item.in_stock {
            debug!("Rejected add of '{}': out of stock", item.name);
            return Err(Rejection::NotAvailable {
                item: item.name.clone(),
            });
        }
        if quantity < 1 {
            debug!("Rejected add of '{}': quantity {}", item.name, quantity);
            return Err(Rejection::InvalidQuantity {
                item: item.name.clone(),
            });
        }

        let mut entries = self.entries.clone();
        match entries.iter_mut().find(|entry| entry.item_id == item.id) {
            Some(entry) => {
                let combined = i64::from(entry.quantity).saturating_add(quantity);
                entry.quantity = check_max(item, combined)?;
            }
            None => {
                let quantity = check_max(item, quantity)?;
                entries.push(ListEntry {
                    item_id: item.id.clone(),
                    quantity,
                });
            }
        }

        Ok(Self { entries })
    }

    /// Remove the entry for the item `name` refers to
    ///
    /// `name` may be the canonical name or any translation, in any case. Names
    /// that do not resolve, and items not on the list, leave it unchanged.
    pub fn remove(&self, catalog: &Catalog, name: &str) -> Self {
        match catalog.lookup(name) {
            Some(item) => self.remove_item(&item.id),
            None => self.clone(),
        }
    }

    /// Remove the entry for `id`, if present
    pub fn remove_item(&self, id: &ItemId) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|entry| &entry.item_id != id)
                .cloned()
                .collect(),
        }
    }

    /// Change the quantity of the item `name` refers to by `delta`
    ///
    /// - unknown name or item not on the list: unchanged
    /// - result below 1: unchanged (entries only leave through `remove`)
    /// - result above `max_stock`: [`Rejection::MaxStockExceeded`]
    pub fn adjust_quantity(
        &self,
        catalog: &Catalog,
        name: &str,
        delta: i64,
    ) -> Result<Self, Rejection> {
        let Some(item) = catalog.lookup(name) else {
            return Ok(self.clone());
        };
        let Some(position) = self.position(&item.id) else {
            return Ok(self.clone());
        };

        let current = i64::from(self.entries[position].quantity);
        let updated = current.saturating_add(delta);
        if updated < 1 {
            debug!(
                "Ignoring adjustment of '{}' to {}: quantities stay at 1 or more",
                item.name, updated
            );
            return Ok(self.clone());
        }
        let quantity = check_max(item, updated)?;

        let mut entries = self.entries.clone();
        entries[position].quantity = quantity;
        Ok(Self { entries })
    }

    /// Sum of `price * quantity`, rounded to cents
    ///
    /// Entries whose item is missing from `catalog` contribute nothing.
    pub fn total(&self, catalog: &Catalog) -> Decimal {
        let total = self
            .entries
            .iter()
            .filter_map(|entry| {
                catalog
                    .get(&entry.item_id)
                    .map(|item| item.price * Decimal::from(entry.quantity))
            })
            .sum::<Decimal>();
        round_cents(total)
    }

    /// Entries in order of first add
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.position(id).is_some()
    }

    /// Quantity of `id` on the list, if present
    pub fn quantity_of(&self, id: &ItemId) -> Option<u32> {
        self.position(id).map(|position| self.entries[position].quantity)
    }

    /// Entries joined with catalog data, names in `language`
    pub fn lines(&self, catalog: &Catalog, language: Language) -> Vec<ListLine> {
        self.entries
            .iter()
            .filter_map(|entry| {
                let item = catalog.get(&entry.item_id)?;
                Some(ListLine {
                    item_id: entry.item_id.clone(),
                    name: item.display_name(language).to_string(),
                    category: item.category.clone(),
                    quantity: entry.quantity,
                    unit_price: item.price,
                    line_total: round_cents(item.price * Decimal::from(entry.quantity)),
                })
            })
            .collect()
    }

    fn position(&self, id: &ItemId) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.item_id == id)
    }
}

fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `requested` as a list quantity, if it is within `item.max_stock`
fn check_max(item: &CatalogItem, requested: i64) -> Result<u32, Rejection> {
    match u32::try_from(requested) {
        Ok(quantity) if quantity <= item.max_stock => Ok(quantity),
        _ => {
            debug!(
                "Rejected '{}': {} exceeds maximum of {}",
                item.name, requested, item.max_stock
            );
            Err(Rejection::MaxStockExceeded {
                item: item.name.clone(),
                requested: requested.unsigned_abs(),
                max: item.max_stock,
            })
        }
    }
}
