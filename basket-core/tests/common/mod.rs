//! Test helper functions for integration tests
//!
//! Shared across test files using the tests/common/ pattern.

use basket_core::{Catalog, Session, Settings};
use std::sync::{Arc, Once};

/// Initialize logging for tests (only once per test run)
static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Built-in catalog behind an `Arc`, ready to share between sessions
#[allow(dead_code)]
pub fn builtin_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::builtin().expect("built-in catalog must load"))
}

/// Fresh session over the built-in catalog with default settings
#[allow(dead_code)]
pub fn new_session() -> Session {
    init_test_logging();
    Session::new(builtin_catalog(), &Settings::default())
}

/// Small store catalog used by file-based tests
#[allow(dead_code)]
pub const SMALL_STORE_YAML: &str = r#"
items:
  - id: coffee
    name: Coffee
    category: Drinks
    price: "7.50"
    inStock: true
    maxStock: 3
    alternatives: [Tea]
    translations: [Café, Café]
  - id: tea
    name: Tea
    category: Drinks
    price: "4.25"
    inStock: false
    maxStock: 5
    translations: [Té, Thé]
seasonal:
  - id: cider
    name: Cider
    category: Drinks
    price: "5.00"
    inStock: true
    maxStock: 2
    translations: [Sidra, Cidre]
"#;
