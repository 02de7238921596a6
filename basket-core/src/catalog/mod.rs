//! Basket Catalog - the read-only registry of purchasable items
//!
//! The catalog is loaded once per process (embedded data or a YAML file) and
//! never changes afterwards. It answers three questions:
//!
//! - which item does a name refer to ([`Catalog::lookup`], case-insensitive,
//!   canonical name or any translation)
//! - what is seasonal right now ([`Catalog::seasonal_items`])
//! - what could we suggest ([`Catalog::sample_random`])
//!
//! # Data shape
//!
//! ```text
//! catalog.yml
//!     ├── items:     ← main catalog (sampled for suggestions)
//!     └── seasonal:  ← fixed secondary list, disjoint from `items`
//! ```

mod item;
mod manifest;
mod registry;

pub use item::{CatalogItem, ItemId};
pub use manifest::CatalogManifest;
pub use registry::{Catalog, UNCATEGORIZED};

#[cfg(test)]
mod tests;
