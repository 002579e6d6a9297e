/// Characters that count as part of a word: the Russian alphabet (without `ё`),
/// ASCII digits, and the hyphen. Input text is lower-cased before filtering, but
/// both cases are kept in the set so the filter is usable on raw text as well.
pub const DEFAULT_ALLOWED_WORD_CHARS: &str =
    "абвгдежзийклмнопрстуфхцчшщъыьэюяАБВГДЕЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ0123456789-";

/// Punctuation marks tallied by the statistics report, in report order.
/// `.` and `...` are counted independently over the same text.
pub const PUNCTUATION_MARKS: [&str; 7] = [".", ",", ";", "?", "!", "\"", "..."];

/// Shortest word length tracked by the statistics histogram.
pub const MIN_TRACKED_WORD_LENGTH: usize = 1;

/// Longest word length tracked by the statistics histogram. Longer words are
/// still counted in the frequency report but land in no length bucket.
pub const MAX_TRACKED_WORD_LENGTH: usize = 20;
