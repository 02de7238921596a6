//! Item suggestions
//!
//! Seasonal items first, then a random sample of the main catalog. The
//! random source is a parameter so tests can seed it.

use rand::Rng;
use serde::Serialize;

use crate::catalog::{Catalog, CatalogItem, ItemId};
use crate::language::Language;

/// One suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub item_id: ItemId,
    /// Canonical name; what gets added when the suggestion is taken
    pub name: String,
    /// Name in the requested language
    pub label: String,
    pub seasonal: bool,
}

impl Suggestion {
    fn new(item: &CatalogItem, language: Language, seasonal: bool) -> Self {
        Self {
            item_id: item.id.clone(),
            name: item.name.clone(),
            label: item.display_name(language).to_string(),
            seasonal,
        }
    }
}

/// Seasonal items followed by `count` distinct random catalog items
pub fn suggest<R: Rng + ?Sized>(
    catalog: &Catalog,
    language: Language,
    count: usize,
    rng: &mut R,
) -> Vec<Suggestion> {
    let seasonal = catalog
        .seasonal_items()
        .iter()
        .map(|item| Suggestion::new(item, language, true));
    let sampled = catalog
        .sample_random(count, rng)
        .into_iter()
        .map(|item| Suggestion::new(item, language, false));

    seasonal.chain(sampled).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seasonal_first_then_sample() {
        let catalog = Catalog::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let suggestions = suggest(&catalog, Language::Es, 3, &mut rng);
        assert_eq!(suggestions.len(), 5);

        assert_eq!(suggestions[0].label, "Calabaza");
        assert_eq!(suggestions[0].name, "Pumpkin");
        assert!(suggestions[0].seasonal);
        assert_eq!(suggestions[1].label, "Arándanos");
        assert!(suggestions[2..].iter().all(|s| !s.seasonal));
    }

    #[test]
    fn test_sampled_labels_match_language() {
        let catalog = Catalog::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        for suggestion in suggest(&catalog, Language::Fr, 10, &mut rng) {
            let item = catalog.get(&suggestion.item_id).unwrap();
            assert_eq!(suggestion.label, item.display_name(Language::Fr));
            assert_eq!(suggestion.name, item.name);
        }
    }
}
