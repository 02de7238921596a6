//! Tests for the catalog module

#[cfg(test)]
mod integration_tests {
    use crate::catalog::{Catalog, ItemId, UNCATEGORIZED};
    use crate::error::CatalogError;
    use crate::language::Language;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal::Decimal;
    use std::collections::HashSet;
    use std::str::FromStr;

    fn builtin() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = builtin();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.seasonal_items().len(), 2);

        let milk = catalog.lookup("Milk").unwrap();
        assert_eq!(milk.id, ItemId::new("1"));
        assert_eq!(milk.price, Decimal::from_str("3.99").unwrap());
        assert_eq!(milk.max_stock, 10);
        assert!(milk.in_stock);

        let chicken = catalog.lookup("chicken").unwrap();
        assert!(!chicken.in_stock);
    }

    #[test]
    fn test_seasonal_disjoint_from_main() {
        let catalog = builtin();
        let main: HashSet<_> = catalog.items().iter().map(|i| &i.id).collect();
        for item in catalog.seasonal_items() {
            assert!(!main.contains(&item.id));
        }
    }

    /// Resolving by canonical name and by each translation gives one id
    #[test]
    fn test_lookup_by_every_name_gives_same_item() {
        let catalog = builtin();
        for item in catalog.items().iter().chain(catalog.seasonal_items()) {
            assert_eq!(catalog.lookup(&item.name).unwrap().id, item.id);
            assert_eq!(
                catalog.lookup(&item.name.to_uppercase()).unwrap().id,
                item.id
            );
            for translation in &item.translations {
                assert_eq!(
                    catalog.lookup(translation).unwrap().id,
                    item.id,
                    "translation {translation}"
                );
            }
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = builtin();
        assert!(catalog.lookup("milks").is_none());
        assert!(catalog.lookup("mil").is_none());
        assert!(catalog.lookup("almond milk").is_none());
        assert!(catalog.lookup("").is_none());
        assert!(catalog.lookup("   ").is_none());
    }

    #[test]
    fn test_lookup_finds_seasonal_items() {
        let catalog = builtin();
        assert_eq!(catalog.lookup("citrouille").unwrap().name, "Pumpkin");
        assert_eq!(catalog.lookup("arándanos").unwrap().name, "Cranberries");
    }

    #[test]
    fn test_get_by_id() {
        let catalog = builtin();
        assert_eq!(catalog.get(&ItemId::new("7")).unwrap().name, "Cheese");
        assert_eq!(catalog.get(&ItemId::new("12")).unwrap().name, "Cranberries");
        assert!(catalog.get(&ItemId::new("99")).is_none());
    }

    #[test]
    fn test_categorize() {
        let catalog = builtin();
        assert_eq!(catalog.categorize("queso"), "Dairy");
        assert_eq!(catalog.categorize("Bananes"), "Produce");
        assert_eq!(catalog.categorize("caviar"), UNCATEGORIZED);
    }

    #[test]
    fn test_display_names_in_builtin_data() {
        let catalog = builtin();
        let eggs = catalog.lookup("eggs").unwrap();
        assert_eq!(eggs.display_name(Language::Es), "Huevos");
        assert_eq!(eggs.display_name(Language::Fr), "Œufs");
    }

    #[test]
    fn test_sample_random_cardinality_and_membership() {
        let catalog = builtin();
        let mut rng = StdRng::seed_from_u64(7);

        for n in [0, 1, 3, 10] {
            let sample = catalog.sample_random(n, &mut rng);
            assert_eq!(sample.len(), n);

            let ids: HashSet<_> = sample.iter().map(|i| &i.id).collect();
            assert_eq!(ids.len(), n, "items must be distinct");
            for item in &sample {
                assert!(catalog.items().iter().any(|i| i.id == item.id));
            }
        }
    }

    #[test]
    fn test_sample_random_caps_at_catalog_size() {
        let catalog = builtin();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(catalog.sample_random(50, &mut rng).len(), catalog.len());
    }

    #[test]
    fn test_sample_random_reproducible_with_seed() {
        let catalog = builtin();
        let first: Vec<_> = catalog
            .sample_random(3, &mut StdRng::seed_from_u64(42))
            .into_iter()
            .map(|i| i.id.clone())
            .collect();
        let second: Vec<_> = catalog
            .sample_random(3, &mut StdRng::seed_from_u64(42))
            .into_iter()
            .map(|i| i.id.clone())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let yaml = r#"
items:
  - { id: "1", name: Milk, category: Dairy, price: "1.00", inStock: true, maxStock: 2, translations: [Leche, Lait] }
seasonal:
  - { id: "1", name: Pumpkin, category: Produce, price: "1.00", inStock: true, maxStock: 2, translations: [Calabaza, Citrouille] }
"#;
        match Catalog::from_yaml(yaml) {
            Err(CatalogError::DuplicateId { id }) => assert_eq!(id, "1"),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_items_rejected() {
        let zero_max = r#"
items:
  - { id: "1", name: Milk, category: Dairy, price: "1.00", inStock: true, maxStock: 0, translations: [Leche, Lait] }
"#;
        assert!(matches!(
            Catalog::from_yaml(zero_max),
            Err(CatalogError::InvalidItem { .. })
        ));

        let missing_translation = r#"
items:
  - { id: "1", name: Milk, category: Dairy, price: "1.00", inStock: true, maxStock: 3, translations: [Leche] }
"#;
        let err = Catalog::from_yaml(missing_translation).unwrap_err();
        assert!(err.to_string().contains("expected 2 translations"));

        let negative_price = r#"
items:
  - { id: "1", name: Milk, category: Dairy, price: "-1.00", inStock: true, maxStock: 3, translations: [Leche, Lait] }
"#;
        assert!(Catalog::from_yaml(negative_price).is_err());
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        assert!(matches!(
            Catalog::from_yaml("items: [ {"),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("store.yml");
        std::fs::write(
            &path,
            r#"
items:
  - { id: "a", name: Coffee, category: Drinks, price: "7.50", inStock: true, maxStock: 4, translations: [Café, Café] }
"#,
        )
        .unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.seasonal_items().is_empty());
        assert_eq!(catalog.lookup("CAFÉ").unwrap().name, "Coffee");

        assert!(matches!(
            Catalog::load(&temp_dir.path().join("missing.yml")),
            Err(CatalogError::Read { .. })
        ));
    }
}
