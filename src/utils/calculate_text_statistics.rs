use crate::constants::{MAX_TRACKED_WORD_LENGTH, MIN_TRACKED_WORD_LENGTH, PUNCTUATION_MARKS};
use crate::types::{StatLabel, StatisticsReport, WordFrequencyMap};

/// Builds the ordered statistics report for a text document.
///
/// Takes the full lower-cased source text (punctuation is counted over the raw
/// text, not over tokens) and the word frequency map produced from it.
///
/// Report order: punctuation marks in `PUNCTUATION_MARKS` order, then word
/// lengths 1..=20 ascending, then the distinct-word count under `unique_words`.
/// Punctuation marks are counted as non-overlapping literal substrings,
/// independently per mark, so a `...` contributes three occurrences of `.` as
/// well as one occurrence of `...`.
pub fn calculate_text_statistics(
    text: &str,
    word_frequencies: &WordFrequencyMap,
) -> StatisticsReport {
    let mut statistics =
        StatisticsReport::with_capacity(PUNCTUATION_MARKS.len() + MAX_TRACKED_WORD_LENGTH + 1);

    for mark in PUNCTUATION_MARKS {
        statistics.push((StatLabel::Punctuation(mark), text.matches(mark).count()));
    }

    for length in MIN_TRACKED_WORD_LENGTH..=MAX_TRACKED_WORD_LENGTH {
        // Word length is measured in characters, not bytes.
        let total = word_frequencies
            .iter()
            .filter(|(word, _)| word.chars().count() == length)
            .map(|(_, count)| count)
            .sum();
        statistics.push((StatLabel::WordLength(length), total));
    }

    statistics.push((StatLabel::UniqueWords, word_frequencies.len()));

    statistics
}
