//! Command parsing
//!
//! Turns normalized command text into a [`ParsedCommand`]. Parsing never
//! fails: text with no recognizable structure becomes "add 1 of <text>", and
//! it is item resolution that reports anything unusable.
//!
//! Steps, for the language the command was detected in:
//! 1. Lower-case and tokenize ([`CommandNormalizer`])
//! 2. Action: any remove keyword anywhere → Remove, otherwise Add. Remove
//!    keywords are checked first, so a command containing both is a Remove
//! 3. Quantity: the first token that is an integer, removed from the token
//!    list; 1 if there is none. Any value is kept, so the list can reject
//!    zero, negative and oversized quantities itself
//! 4. Item phrase: what is left after dropping every add/remove keyword

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::language::Language;
use crate::normalize::CommandNormalizer;

/// What a command asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Add,
    Remove,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Add => f.write_str("add"),
            Action::Remove => f.write_str("remove"),
        }
    }
}

/// Structured form of one command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCommand {
    pub action: Action,
    /// Item phrase with keywords and quantity removed; may be empty
    pub item: String,
    /// As written; 1 when the command has no number. Integers too large for
    /// `i64` saturate.
    pub quantity: i64,
    pub language: Language,
}

/// Parse `text` using the keywords of `language`
pub fn parse(text: &str, language: Language) -> ParsedCommand {
    let keywords = language.keywords();
    let mut tokens = CommandNormalizer::tokens(text);

    let action = if keywords.contains_remove(&tokens) {
        Action::Remove
    } else {
        Action::Add
    };

    let position = tokens
        .iter()
        .position(|token| parse_quantity(token).is_some());
    let quantity = position
        .and_then(|index| parse_quantity(&tokens.remove(index)))
        .unwrap_or(1);

    let mut remaining = Vec::with_capacity(tokens.len());
    let mut index = 0;
    while index < tokens.len() {
        match keywords.match_at(&tokens[index..]) {
            Some(len) => index += len,
            None => {
                remaining.push(tokens[index].as_str());
                index += 1;
            }
        }
    }
    let item = remaining.join(" ").trim().to_string();

    let command = ParsedCommand {
        action,
        item,
        quantity,
        language,
    };
    debug!("Parsed '{}' ({}) as {:?}", text, language, command);
    command
}

/// Integer value of `token`, saturating when it is out of `i64` range
fn parse_quantity(token: &str) -> Option<i64> {
    let digits = token.strip_prefix(['-', '+']).unwrap_or(token);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    Some(token.parse::<i64>().unwrap_or(if token.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    }))
}
