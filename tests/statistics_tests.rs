use test_utils::stat_value;
use text_stats::{
    calculate_text_statistics, StatLabel, WordFrequencyMap, MAX_TRACKED_WORD_LENGTH,
    MIN_TRACKED_WORD_LENGTH, PUNCTUATION_MARKS,
};

#[cfg(test)]
mod statistics_tests {
    use super::*;

    #[test]
    fn test_report_order_is_fixed() {
        let statistics = calculate_text_statistics("", &WordFrequencyMap::new());

        let expected_labels: Vec<StatLabel> = PUNCTUATION_MARKS
            .into_iter()
            .map(StatLabel::Punctuation)
            .chain((MIN_TRACKED_WORD_LENGTH..=MAX_TRACKED_WORD_LENGTH).map(StatLabel::WordLength))
            .chain(std::iter::once(StatLabel::UniqueWords))
            .collect();

        let actual_labels: Vec<StatLabel> =
            statistics.iter().map(|(label, _)| *label).collect();
        assert_eq!(actual_labels, expected_labels);
    }

    #[test]
    fn test_empty_text_is_all_zeros() {
        let statistics = calculate_text_statistics("", &WordFrequencyMap::new());

        assert_eq!(statistics.len(), PUNCTUATION_MARKS.len() + MAX_TRACKED_WORD_LENGTH + 1);
        assert!(statistics.iter().all(|(_, count)| *count == 0));
    }

    #[test]
    fn test_punctuation_counts() {
        let text = "кот, собака; кот! собака? \"кот\".";
        let statistics = calculate_text_statistics(text, &WordFrequencyMap::new());

        assert_eq!(stat_value(&statistics, StatLabel::Punctuation(",")), 1);
        assert_eq!(stat_value(&statistics, StatLabel::Punctuation(";")), 1);
        assert_eq!(stat_value(&statistics, StatLabel::Punctuation("!")), 1);
        assert_eq!(stat_value(&statistics, StatLabel::Punctuation("?")), 1);
        assert_eq!(stat_value(&statistics, StatLabel::Punctuation("\"")), 2);
        assert_eq!(stat_value(&statistics, StatLabel::Punctuation(".")), 1);
        assert_eq!(stat_value(&statistics, StatLabel::Punctuation("...")), 0);
    }

    #[test]
    fn test_ellipsis_and_period_counted_independently() {
        // An ellipsis is three periods as far as the period counter is
        // concerned; the two marks are tallied over the same text without
        // deduplication.
        let text = "а... б.";
        let statistics = calculate_text_statistics(text, &WordFrequencyMap::new());

        assert_eq!(stat_value(&statistics, StatLabel::Punctuation(".")), 4);
        assert_eq!(stat_value(&statistics, StatLabel::Punctuation("...")), 1);
    }

    #[test]
    fn test_word_length_buckets() {
        let mut word_frequencies = WordFrequencyMap::new();
        word_frequencies.insert("и".to_string(), 1);
        word_frequencies.insert("до".to_string(), 2);
        word_frequencies.insert("кот".to_string(), 3);
        word_frequencies.insert("тик".to_string(), 4);

        let statistics = calculate_text_statistics("", &word_frequencies);

        assert_eq!(stat_value(&statistics, StatLabel::WordLength(1)), 1);
        assert_eq!(stat_value(&statistics, StatLabel::WordLength(2)), 2);
        assert_eq!(stat_value(&statistics, StatLabel::WordLength(3)), 7);
        for length in 4..=MAX_TRACKED_WORD_LENGTH {
            assert_eq!(stat_value(&statistics, StatLabel::WordLength(length)), 0);
        }
        assert_eq!(stat_value(&statistics, StatLabel::UniqueWords), 4);
    }

    #[test]
    fn test_word_length_is_measured_in_characters() {
        // Cyrillic letters are two bytes each in UTF-8; lengths are counted in
        // characters.
        let mut word_frequencies = WordFrequencyMap::new();
        word_frequencies.insert("украинская".to_string(), 1);

        let statistics = calculate_text_statistics("", &word_frequencies);

        assert_eq!(stat_value(&statistics, StatLabel::WordLength(10)), 1);
        assert_eq!(stat_value(&statistics, StatLabel::WordLength(20)), 0);
    }

    #[test]
    fn test_words_longer_than_twenty_chars_land_in_no_bucket() {
        let mut word_frequencies = WordFrequencyMap::new();
        word_frequencies.insert("а".repeat(21), 5);
        word_frequencies.insert("б".repeat(20), 2);

        let statistics = calculate_text_statistics("", &word_frequencies);

        for length in MIN_TRACKED_WORD_LENGTH..MAX_TRACKED_WORD_LENGTH {
            assert_eq!(stat_value(&statistics, StatLabel::WordLength(length)), 0);
        }
        assert_eq!(stat_value(&statistics, StatLabel::WordLength(20)), 2);
        // The over-long word still counts as a distinct word.
        assert_eq!(stat_value(&statistics, StatLabel::UniqueWords), 2);
    }

    #[test]
    fn test_unique_words_is_last_entry() {
        let mut word_frequencies = WordFrequencyMap::new();
        word_frequencies.insert("кот".to_string(), 3);

        let statistics = calculate_text_statistics("кот", &word_frequencies);

        let (label, count) = statistics.last().expect("report should not be empty");
        assert_eq!(*label, StatLabel::UniqueWords);
        assert_eq!(*count, 1);
    }
}
