//! One user's shopping session
//!
//! A [`Session`] owns the current list snapshot and display language and runs
//! the full pipeline for each command:
//!
//! ```text
//! text ─► detect ─► parse ─► resolve ─► add / remove ─► new snapshot
//! ```
//!
//! A failed command leaves the list exactly as it was. Sessions are plain
//! owned values; to serve several callers wrap each one in its own mutex
//! ([`SharedSession`]). Sessions never share list state with each other.

use rand::Rng;
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

use crate::catalog::{Catalog, ItemId};
use crate::config::Settings;
use crate::error::CommandError;
use crate::language::{Language, LanguageDetector};
use crate::list::ShoppingList;
use crate::parser::{self, Action, ParsedCommand};
use crate::resolver;
use crate::suggestions::{self, Suggestion};

/// A session behind its own lock
pub type SharedSession = Arc<Mutex<Session>>;

/// Result of a successfully applied command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOutcome {
    pub command: ParsedCommand,
    pub item_id: ItemId,
    /// Canonical name of the resolved item
    pub item_name: String,
    /// List after the command
    pub list: ShoppingList,
}

/// Pipeline and state for one user
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Arc<Catalog>,
    detector: LanguageDetector,
    list: ShoppingList,
    language: Language,
    suggestion_count: usize,
}

impl Session {
    /// Start an empty session
    pub fn new(catalog: Arc<Catalog>, settings: &Settings) -> Self {
        Self {
            catalog,
            detector: LanguageDetector::from_settings(settings),
            list: ShoppingList::new(),
            language: settings.fallback_language,
            suggestion_count: settings.suggestion_count,
        }
    }

    /// Start an empty session over the built-in catalog and default settings
    pub fn with_defaults() -> Result<Self, crate::error::CatalogError> {
        Ok(Self::new(Arc::new(Catalog::builtin()?), &Settings::default()))
    }

    /// Move the session behind a mutex
    pub fn into_shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }

    /// Interpret and apply a free-text command
    ///
    /// The session language follows the detected language of every command,
    /// whether or not the command succeeds.
    pub fn handle_command(&mut self, text: &str) -> Result<CommandOutcome, CommandError> {
        let language = self.detector.detect(text);
        self.language = language;

        let command = parser::parse(text, language);
        let catalog = Arc::clone(&self.catalog);
        let item = resolver::resolve(&command.item, &catalog)?;

        let list = match command.action {
            Action::Add => self
                .list
                .add(item, command.quantity)
                .map_err(|rejection| CommandError::rejected(&command.item, rejection))?,
            Action::Remove => self.list.remove_item(&item.id),
        };

        info!(
            "Applied {} {} x{} ({})",
            command.action, item.name, command.quantity, language
        );
        self.list = list.clone();

        Ok(CommandOutcome {
            item_id: item.id.clone(),
            item_name: item.name.clone(),
            command,
            list,
        })
    }

    /// Add an item by name without command parsing (typed entry, suggestions)
    pub fn add_item(&mut self, name: &str, quantity: u32) -> Result<&ShoppingList, CommandError> {
        let item = resolver::resolve(name, &self.catalog)?;
        self.list = self
            .list
            .add(item, i64::from(quantity))
            .map_err(|rejection| CommandError::rejected(name.trim(), rejection))?;
        Ok(&self.list)
    }

    /// Remove an item by name; unknown names and absent items are no-ops
    pub fn remove_item(&mut self, name: &str) -> &ShoppingList {
        self.list = self.list.remove(&self.catalog, name);
        &self.list
    }

    /// Change an item's quantity by `delta` (never below 1)
    pub fn adjust_quantity(
        &mut self,
        name: &str,
        delta: i64,
    ) -> Result<&ShoppingList, CommandError> {
        self.list = self
            .list
            .adjust_quantity(&self.catalog, name, delta)
            .map_err(|rejection| CommandError::rejected(name.trim(), rejection))?;
        Ok(&self.list)
    }

    /// Current list snapshot
    pub fn list(&self) -> &ShoppingList {
        &self.list
    }

    /// Replace the list, e.g. to restore an earlier snapshot
    pub fn restore(&mut self, list: ShoppingList) {
        self.list = list;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Language of the last command (or the one set explicitly)
    pub fn language(&self) -> Language {
        self.language
    }

    /// Set the display language
    ///
    /// Languages that are not enabled are replaced by the fallback; the
    /// language actually set is returned.
    pub fn set_language(&mut self, language: Language) -> Language {
        self.language = if self.detector.is_enabled(language) {
            language
        } else {
            debug!(
                "Language {} not enabled, using {}",
                language,
                self.detector.fallback()
            );
            self.detector.fallback()
        };
        self.language
    }

    /// Total of the current list
    pub fn total(&self) -> Decimal {
        self.list.total(&self.catalog)
    }

    /// Seasonal and random suggestions in the session language
    pub fn suggestions<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Suggestion> {
        suggestions::suggest(&self.catalog, self.language, self.suggestion_count, rng)
    }
}
