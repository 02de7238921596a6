//! Lexical language detection
//!
//! Two signals are combined per language:
//!
//! - **Lexicon hits**: tokens that are action keywords or common function
//!   words of the language. One hit outweighs the whole trigram signal.
//! - **Trigram overlap**: the input's character-trigram distribution compared
//!   with a reference profile built from an embedded text sample. The overlap
//!   is the sum of per-trigram minima of the two relative frequencies, so it
//!   lies in `[0, 1]`.
//!
//! The reference model is built once per process and never changes, so
//! detection is a pure function of the input and the detector settings.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use tracing::{debug, trace};

use super::Language;
use crate::config::{DetectorSettings, Settings};
use crate::normalize::CommandNormalizer;

/// Common function words per language, excluding words shared between them
/// ("la", "de", "un") which say nothing about the language.
fn function_words(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => &[
            "the", "and", "some", "please", "my", "from", "of", "to", "with", "more", "i",
            "list", "for",
        ],
        Language::Es => &[
            "el", "los", "las", "del", "una", "unos", "unas", "por", "favor", "mi", "lista",
            "más", "y", "con", "para",
        ],
        Language::Fr => &[
            "le", "les", "des", "du", "une", "et", "avec", "pour", "ma", "liste", "s'il",
            "vous", "plaît", "je",
        ],
    }
}

fn reference_text(language: Language) -> &'static str {
    match language {
        Language::En => include_str!("../../data/profiles/en.txt"),
        Language::Es => include_str!("../../data/profiles/es.txt"),
        Language::Fr => include_str!("../../data/profiles/fr.txt"),
    }
}

/// Relative frequencies of character trigrams
///
/// `BTreeMap` keeps the summation order fixed, so scores are bit-for-bit
/// reproducible.
#[derive(Debug, Default)]
struct TrigramProfile {
    frequencies: BTreeMap<String, f64>,
}

impl TrigramProfile {
    fn from_tokens(tokens: &[String]) -> Self {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for token in tokens {
            for trigram in trigrams(token) {
                *counts.entry(trigram).or_default() += 1;
            }
        }

        let total: usize = counts.values().sum();
        if total == 0 {
            return Self::default();
        }

        let frequencies = counts
            .into_iter()
            .map(|(trigram, count)| (trigram, count as f64 / total as f64))
            .collect();
        Self { frequencies }
    }

    fn overlap(&self, other: &TrigramProfile) -> f64 {
        other
            .frequencies
            .iter()
            .filter_map(|(trigram, theirs)| {
                self.frequencies
                    .get(trigram)
                    .map(|ours| ours.min(*theirs))
            })
            .sum()
    }

    fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

/// Space-padded trigrams over the letters of one token
fn trigrams(token: &str) -> Vec<String> {
    let letters: Vec<char> = token
        .chars()
        .filter(|c| c.is_alphabetic() || *c == '\'')
        .collect();
    if letters.is_empty() {
        return Vec::new();
    }

    let padded: Vec<char> = std::iter::once(' ')
        .chain(letters)
        .chain(std::iter::once(' '))
        .collect();
    padded.windows(3).map(|w| w.iter().collect()).collect()
}

static PROFILES: Lazy<Vec<(Language, TrigramProfile)>> = Lazy::new(|| {
    Language::ALL
        .iter()
        .map(|&language| {
            let tokens = CommandNormalizer::tokens(reference_text(language));
            (language, TrigramProfile::from_tokens(&tokens))
        })
        .collect()
});

/// Per-language score breakdown, for diagnostics
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageScore {
    pub language: Language,
    pub lexicon_hits: usize,
    pub trigram_overlap: f64,
    pub score: f64,
}

/// Scores text against the supported languages
#[derive(Debug, Clone)]
pub struct LanguageDetector {
    enabled: Vec<Language>,
    fallback: Language,
    settings: DetectorSettings,
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new(Language::ALL.to_vec(), Language::BASE, DetectorSettings::default())
    }
}

impl LanguageDetector {
    /// Create a detector that only answers with `enabled` languages
    ///
    /// An empty `enabled` set means only the fallback is ever returned.
    pub fn new(enabled: Vec<Language>, fallback: Language, settings: DetectorSettings) -> Self {
        Self {
            enabled,
            fallback,
            settings,
        }
    }

    /// Create a detector from loaded settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.languages.clone(),
            settings.fallback_language,
            settings.detector.clone(),
        )
    }

    /// Language returned when detection is inconclusive
    pub fn fallback(&self) -> Language {
        self.fallback
    }

    /// Whether `language` may be returned by [`Self::detect`]
    pub fn is_enabled(&self, language: Language) -> bool {
        self.enabled.contains(&language)
    }

    /// Best-guess language of `text`
    ///
    /// Returns the fallback for text with fewer than `min_chars` letters, for
    /// text that scores zero everywhere, and when the best guess is not enabled.
    /// Ties go to the language declared first in [`Language::ALL`].
    pub fn detect(&self, text: &str) -> Language {
        let tokens = CommandNormalizer::tokens(text);
        let letters: usize = tokens
            .iter()
            .map(|t| CommandNormalizer::letter_count(t))
            .sum();
        if letters < self.settings.min_chars {
            debug!(
                "Text too short for detection ({} letters), using {}",
                letters, self.fallback
            );
            return self.fallback;
        }

        let scores = self.score_tokens(&tokens);
        let best = scores.iter().fold(None::<&LanguageScore>, |best, candidate| {
            match best {
                Some(current) if current.score >= candidate.score => Some(current),
                _ => Some(candidate),
            }
        });

        let detected = match best {
            Some(best) if best.score > 0.0 && self.is_enabled(best.language) => best.language,
            Some(best) => {
                debug!(
                    "Best guess {} (score {:.4}) not usable, using {}",
                    best.language, best.score, self.fallback
                );
                self.fallback
            }
            None => self.fallback,
        };

        debug!("Detected language {} for '{}'", detected, text);
        detected
    }

    /// Score breakdown for every language in [`Language::ALL`]
    pub fn scores(&self, text: &str) -> Vec<LanguageScore> {
        self.score_tokens(&CommandNormalizer::tokens(text))
    }

    fn score_tokens(&self, tokens: &[String]) -> Vec<LanguageScore> {
        let input = TrigramProfile::from_tokens(tokens);

        PROFILES
            .iter()
            .map(|(language, profile)| {
                let lexicon_hits = lexicon_hits(*language, tokens);
                let trigram_overlap = if input.is_empty() {
                    0.0
                } else {
                    profile.overlap(&input)
                };
                let score = self.settings.lexicon_weight * lexicon_hits as f64 + trigram_overlap;

                trace!(
                    "Language {}: {} lexicon hits, trigram overlap {:.4}, score {:.4}",
                    language,
                    lexicon_hits,
                    trigram_overlap,
                    score
                );

                LanguageScore {
                    language: *language,
                    lexicon_hits,
                    trigram_overlap,
                    score,
                }
            })
            .collect()
    }
}

fn lexicon_hits(language: Language, tokens: &[String]) -> usize {
    let keyword_hits = language.keywords().hits(tokens);
    let word_hits = tokens
        .iter()
        .filter(|token| function_words(language).contains(&token.as_str()))
        .count();
    keyword_hits + word_hits
}
