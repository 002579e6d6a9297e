use std::collections::HashMap;
use std::fmt;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the basic units used for processing text.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents the total number of occurrences of a distinct word within a text document.
pub type WordFrequency = usize;

/// Represents a map of distinct words to their frequency counts within a text document.
/// The key is the `Token`, and the value is the `WordFrequency`. The map itself carries
/// no ordering; consumers sort explicitly when order matters.
pub type WordFrequencyMap = HashMap<Token, WordFrequency>;

/// An ordered list of statistics entries. Order is the report order: punctuation marks
/// first, then word lengths ascending, then the unique-word count last.
pub type StatisticsReport = Vec<(StatLabel, usize)>;

/// A label for a single entry in the statistics report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatLabel {
    /// A literal punctuation mark counted as a substring of the source text.
    Punctuation(&'static str),
    /// A word length, in characters.
    WordLength(usize),
    /// The number of distinct words in the document.
    UniqueWords,
}

impl fmt::Display for StatLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatLabel::Punctuation(mark) => write!(f, "{}", mark),
            StatLabel::WordLength(length) => write!(f, "{}", length),
            StatLabel::UniqueWords => write!(f, "unique_words"),
        }
    }
}

/// Full result of the counting pipeline for one text document.
#[derive(Debug)]
pub struct TextAnalysis {
    pub word_frequencies: WordFrequencyMap,
    pub statistics: StatisticsReport,
}
