//! Basket core library exports
//!
//! Turns short natural-language shopping commands ("add 2 milk",
//! "añadir 3 leche", "supprimer pain") into validated mutations of an
//! in-memory shopping list backed by a stock-limited catalog.
//!
//! # Pipeline
//!
//! ```text
//! raw text
//!    │
//!    ├── language::LanguageDetector   ← lexical scoring, falls back to `en`
//!    ├── parser::parse                ← {action, item phrase, quantity}
//!    ├── resolver::resolve            ← phrase → CatalogItem
//!    └── list::ShoppingList           ← add / remove under stock limits
//!            │
//!            ▼
//!     new list snapshot or CommandError
//! ```
//!
//! [`session::Session`] wires the stages together for one user.

pub mod catalog;
pub mod config;
pub mod error;
pub mod language;
pub mod list;
pub mod messages;
pub mod normalize;
pub mod parser;
pub mod resolver;
pub mod session;
pub mod suggestions;

pub use catalog::{Catalog, CatalogItem, ItemId};
pub use config::Settings;
pub use error::{CatalogError, CommandError, ErrorKind, ItemNotFound, Rejection};
pub use language::{Language, LanguageDetector};
pub use list::{ListEntry, ShoppingList};
pub use parser::{Action, ParsedCommand};
pub use session::{CommandOutcome, Session, SharedSession};
