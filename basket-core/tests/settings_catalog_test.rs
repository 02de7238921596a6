//! Settings discovery with external catalog files

mod common;

use basket_core::{ErrorKind, Language, Session, Settings};
use common::{init_test_logging, SMALL_STORE_YAML};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_config_with_external_catalog() {
    init_test_logging();
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("store.yml"), SMALL_STORE_YAML).unwrap();
    let config_path = temp_dir.path().join("config.yml");
    std::fs::write(
        &config_path,
        "languages: [en, fr]\nsuggestion_count: 1\ncatalog_path: store.yml\n",
    )
    .unwrap();

    let settings = Settings::load(Some(&config_path)).unwrap();
    let catalog = Arc::new(settings.catalog().unwrap());
    assert_eq!(catalog.len(), 2);

    let mut session = Session::new(catalog, &settings);
    session.handle_command("add 3 coffee").unwrap();

    let err = session.handle_command("add coffee").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MaxStockExceeded);

    let err = session.handle_command("get tea").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotAvailable);

    // Spanish is disabled, so a Spanish command is read with English keywords
    let err = session.handle_command("añadir sidra").unwrap_err();
    assert_eq!(session.language(), Language::En);
    assert_eq!(err.kind(), ErrorKind::ItemNotFound);

    session.handle_command("ajouter cidre").unwrap();
    assert_eq!(session.language(), Language::Fr);

    let suggestions = session.suggestions(&mut rand::thread_rng());
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].label, "Cidre");
}

#[test]
fn test_missing_catalog_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yml");
    std::fs::write(&config_path, "catalog_path: nowhere.yml\n").unwrap();

    let settings = Settings::load(Some(&config_path)).unwrap();
    let err = settings.catalog().unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load catalog"));
}

#[test]
fn test_invalid_config_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yml");
    std::fs::write(&config_path, "fallback_language: klingon\n").unwrap();

    let err = Settings::load(Some(&config_path)).unwrap_err();
    assert!(format!("{err:#}").contains("config.yml"));
}
