//! Supported languages
//!
//! Every keyword table, catalog translation slot and message set is keyed by
//! [`Language`]. Tags from outside (config files, CLI flags) are normalized
//! through [`FromStr`] and anything outside the enumeration is rejected there,
//! so nothing downstream has to index by raw strings.
//!
//! The declaration order (`en`, `es`, `fr`) is also the order of the
//! translation slots in catalog data and the detector's tie-break order.

mod detector;
mod keywords;

pub use detector::{LanguageDetector, LanguageScore};
pub use keywords::ActionKeywords;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A language the command engine understands
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
}

/// A language tag outside the supported set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported language tag: '{0}' (expected one of: en, es, fr)")]
pub struct UnsupportedLanguage(pub String);

impl Language {
    /// All supported languages, in tie-break and translation-slot order
    pub const ALL: [Language; 3] = [Language::En, Language::Es, Language::Fr];

    /// Language of canonical catalog names; also the universal fallback
    pub const BASE: Language = Language::En;

    /// Two-letter tag
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
        }
    }

    /// Endonym, for display
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Fr => "Français",
        }
    }

    /// Index into [`crate::CatalogItem::translations`], `None` for the base language
    pub fn translation_index(self) -> Option<usize> {
        match self {
            Language::En => None,
            Language::Es => Some(0),
            Language::Fr => Some(1),
        }
    }

    /// Number of translation slots every catalog item carries
    pub fn translation_slots() -> usize {
        Self::ALL.len() - 1
    }

    /// Add/remove keywords for this language
    pub fn keywords(self) -> &'static ActionKeywords {
        keywords::for_language(self)
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    /// Accepts `es`, `ES`, `es-MX`, `es_MX`; only the primary subtag counts
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            "fr" => Ok(Language::Fr),
            _ => Err(UnsupportedLanguage(s.to_string())),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = UnsupportedLanguage;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.code().to_string()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
