mod constants;
pub mod models;
pub use constants::{
    DEFAULT_ALLOWED_WORD_CHARS, MAX_TRACKED_WORD_LENGTH, MIN_TRACKED_WORD_LENGTH,
    PUNCTUATION_MARKS,
};
pub use models::{
    write_statistics_report, write_word_frequency_report, CharFilter, Error, Tokenizer,
};
pub mod types;
mod utils;
pub use types::{
    StatLabel, StatisticsReport, TextAnalysis, Token, TokenRef, WordFrequency, WordFrequencyMap,
};
pub use utils::{calculate_text_statistics, count_word_frequencies};

/// Runs the full counting pipeline over one text document using the default
/// Russian allow-list: lower-case, tokenize, count word frequencies, and
/// derive the ordered statistics report.
pub fn analyze_text(text: &str) -> TextAnalysis {
    analyze_text_with_custom_filter(text, CharFilter::russian_word_chars())
}

/// Same pipeline as [`analyze_text`], with a caller-supplied character
/// allow-list.
pub fn analyze_text_with_custom_filter(text: &str, char_filter: CharFilter) -> TextAnalysis {
    // The document is lower-cased once, up front; both tokenization and
    // punctuation counting run over the lower-cased text.
    let text = text.to_lowercase();

    let tokenizer = Tokenizer::with_char_filter(char_filter);
    let words = tokenizer.tokenize(&text);

    let word_frequencies = count_word_frequencies(&words);
    let statistics = calculate_text_statistics(&text, &word_frequencies);

    TextAnalysis {
        word_frequencies,
        statistics,
    }
}
