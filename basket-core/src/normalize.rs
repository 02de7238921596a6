//! Command text normalization
//!
//! Commands come from typing or from a speech-to-text engine, so they arrive
//! with mixed case, stray whitespace and sentence punctuation ("Add 2 milk.").
//! Everything downstream (detection, parsing, keyword matching) works on the
//! normalized token sequence produced here.

use tracing::trace;

/// Characters stripped from both ends of every token
const EDGE_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '"', '\'', '¡', '¿', '«', '»', '(', ')', '“', '”',
];

/// Normalizer for free-text shopping commands
///
/// Handles:
/// - Upper/lower case (everything is lower-cased)
/// - Tabs, newlines and runs of spaces
/// - Punctuation glued to the start or end of a word
pub struct CommandNormalizer;

impl CommandNormalizer {
    /// Lower-case `text` and split it into cleaned tokens
    ///
    /// # Examples
    /// ```
    /// # use basket_core::normalize::CommandNormalizer;
    /// assert_eq!(CommandNormalizer::tokens("Add  2 Milk."), vec!["add", "2", "milk"]);
    /// assert_eq!(CommandNormalizer::tokens("¿quitar   pan?"), vec!["quitar", "pan"]);
    /// assert!(CommandNormalizer::tokens(" ... ").is_empty());
    /// ```
    pub fn tokens(text: &str) -> Vec<String> {
        let tokens: Vec<String> = text
            .to_lowercase()
            .split_whitespace()
            .map(|token| token.trim_matches(EDGE_PUNCTUATION))
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();

        trace!("Tokenized command: '{}' → {:?}", text, tokens);
        tokens
    }

    /// Tokens joined back with single spaces
    pub fn normalize(text: &str) -> String {
        Self::tokens(text).join(" ")
    }

    /// Number of alphabetic characters, used to decide whether text is long
    /// enough to say anything about its language
    pub fn letter_count(text: &str) -> usize {
        text.chars().filter(|c| c.is_alphabetic()).count()
    }
}
