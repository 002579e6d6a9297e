use crate::constants::DEFAULT_ALLOWED_WORD_CHARS;
use std::collections::HashSet;

/// Allow-list over individual characters. Anything outside the set is stripped
/// from words before they are counted.
#[derive(Debug, Clone)]
pub struct CharFilter {
    allowed_chars: HashSet<char>,
}

impl CharFilter {
    /// Filter configuration for Russian text documents: Cyrillic letters
    /// (without `ё`), ASCII digits, and the hyphen.
    pub fn russian_word_chars() -> Self {
        Self::from_allowed_chars(DEFAULT_ALLOWED_WORD_CHARS)
    }

    /// Builds a filter from an arbitrary set of allowed characters.
    pub fn from_allowed_chars(allowed_chars: &str) -> Self {
        CharFilter {
            allowed_chars: allowed_chars.chars().collect(),
        }
    }

    /// Whether `c` may appear in a word.
    pub fn is_allowed(&self, c: char) -> bool {
        self.allowed_chars.contains(&c)
    }

    /// Strips disallowed characters from `word`, preserving the order of the
    /// characters that remain. May return an empty string.
    pub fn filter_word(&self, word: &str) -> String {
        word.chars().filter(|c| self.is_allowed(*c)).collect()
    }
}

impl Default for CharFilter {
    fn default() -> Self {
        Self::russian_word_chars()
    }
}
