//! Item phrase resolution
//!
//! Exact, case-insensitive matching only. Near misses (plurals, typos,
//! alternatives like "almond milk") are reported as [`ItemNotFound`] rather
//! than guessed at.

use tracing::debug;

use crate::catalog::{Catalog, CatalogItem};
use crate::error::ItemNotFound;

/// Map an item phrase in any supported language to its catalog item
pub fn resolve<'a>(phrase: &str, catalog: &'a Catalog) -> Result<&'a CatalogItem, ItemNotFound> {
    let phrase = phrase.trim();
    if phrase.is_empty() {
        debug!("Empty item phrase");
        return Err(ItemNotFound {
            phrase: String::new(),
        });
    }

    catalog.lookup(phrase).ok_or_else(|| {
        debug!("No catalog item matches '{}'", phrase);
        ItemNotFound {
            phrase: phrase.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_canonical_and_translations() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(resolve("milk", &catalog).unwrap().name, "Milk");
        assert_eq!(resolve("leche", &catalog).unwrap().name, "Milk");
        assert_eq!(resolve(" Lait ", &catalog).unwrap().name, "Milk");
    }

    #[test]
    fn test_empty_phrase_is_not_found() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            resolve("   ", &catalog).unwrap_err(),
            ItemNotFound {
                phrase: String::new()
            }
        );
    }

    #[test]
    fn test_near_misses_are_not_corrected() {
        let catalog = Catalog::builtin().unwrap();
        for phrase in ["apple", "chese", "almond milk", "2 milk"] {
            let err = resolve(phrase, &catalog).unwrap_err();
            assert_eq!(err.phrase, phrase);
        }
    }
}
