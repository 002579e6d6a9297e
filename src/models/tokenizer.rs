use crate::models::CharFilter;
use crate::types::Token;

/// Splits a text document into words, keeping only allow-listed characters.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    char_filter: CharFilter,
}

impl Tokenizer {
    /// Tokenizer configuration for Russian text documents.
    pub fn russian_text_parser() -> Self {
        Self::with_char_filter(CharFilter::russian_word_chars())
    }

    /// Builds a tokenizer over a custom character allow-list.
    pub fn with_char_filter(char_filter: CharFilter) -> Self {
        Tokenizer { char_filter }
    }

    /// Tokenizer function to split the text into individual tokens.
    ///
    /// Splits on runs of whitespace, strips disallowed characters from each
    /// unit, and drops units with no allowed characters left. Duplicates are
    /// retained and tokens keep their original text order.
    ///
    /// Note: This explicitly does not modify the case of the text; callers
    /// lower-case the document before tokenizing.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .map(|word| self.char_filter.filter_word(word))
            .filter(|word| !word.is_empty())
            .collect()
    }
}
