//! Action keyword tables
//!
//! Keywords are lower case. Multi-word keywords ("take off", "avoir besoin")
//! match as contiguous token sequences.

use super::Language;

/// Keywords that mark a command's action in one language
#[derive(Debug)]
pub struct ActionKeywords {
    pub add: &'static [&'static str],
    pub remove: &'static [&'static str],
}

static ENGLISH: ActionKeywords = ActionKeywords {
    add: &["add", "buy", "get", "need", "want"],
    remove: &["remove", "delete", "take off"],
};

static SPANISH: ActionKeywords = ActionKeywords {
    add: &["añadir", "comprar", "obtener", "necesitar", "querer"],
    remove: &["quitar", "eliminar", "borrar"],
};

static FRENCH: ActionKeywords = ActionKeywords {
    add: &["ajouter", "acheter", "obtenir", "avoir besoin", "vouloir"],
    remove: &["supprimer", "enlever", "retirer"],
};

pub(super) fn for_language(language: Language) -> &'static ActionKeywords {
    match language {
        Language::En => &ENGLISH,
        Language::Es => &SPANISH,
        Language::Fr => &FRENCH,
    }
}

impl ActionKeywords {
    /// Add and remove keywords together
    pub fn all(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.add.iter().chain(self.remove.iter()).copied()
    }

    /// Length in tokens of the longest keyword starting at `tokens[0]`, if any
    ///
    /// Longest match wins so "take off" is consumed whole.
    pub fn match_at(&self, tokens: &[String]) -> Option<usize> {
        self.all()
            .filter_map(|keyword| sequence_len_at(tokens, keyword))
            .max()
    }

    /// Whether any remove keyword appears anywhere in `tokens`
    pub fn contains_remove(&self, tokens: &[String]) -> bool {
        contains_any(tokens, self.remove)
    }

    /// Whether any add keyword appears anywhere in `tokens`
    pub fn contains_add(&self, tokens: &[String]) -> bool {
        contains_any(tokens, self.add)
    }

    /// Number of token positions where some keyword of this language starts
    pub fn hits(&self, tokens: &[String]) -> usize {
        (0..tokens.len())
            .filter(|&i| self.match_at(&tokens[i..]).is_some())
            .count()
    }
}

fn contains_any(tokens: &[String], keywords: &[&str]) -> bool {
    (0..tokens.len()).any(|i| {
        keywords
            .iter()
            .any(|keyword| sequence_len_at(&tokens[i..], keyword).is_some())
    })
}

/// Token count of `keyword` if `tokens` starts with it
fn sequence_len_at(tokens: &[String], keyword: &str) -> Option<usize> {
    let words: Vec<&str> = keyword.split_whitespace().collect();
    if words.is_empty() || tokens.len() < words.len() {
        return None;
    }

    words
        .iter()
        .zip(tokens)
        .all(|(word, token)| *word == token.as_str())
        .then_some(words.len())
}
