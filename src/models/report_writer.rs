use crate::models::Error;
use crate::types::{StatisticsReport, WordFrequencyMap};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the word frequency report to `dest`, overwriting any existing file.
///
/// Entries are sorted by frequency (descending), then by word (ascending) for
/// deterministic output. The secondary ordering is an implementation detail,
/// not a guarantee. One line per entry, formatted as `"{word}: {count}"`.
pub fn write_word_frequency_report(
    dest: &Path,
    word_frequencies: &WordFrequencyMap,
) -> Result<(), Error> {
    let mut sorted_entries: Vec<_> = word_frequencies.iter().collect();
    sorted_entries.sort_by(|a, b| {
        b.1.cmp(a.1) // Sort by frequency (descending)
            .then_with(|| a.0.cmp(b.0)) // Secondary sort by word (ascending)
    });

    let mut writer = BufWriter::new(File::create(dest)?);
    for (word, count) in sorted_entries {
        writeln!(writer, "{}: {}", word, count)?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes the statistics report to `dest`, overwriting any existing file.
///
/// Entries are emitted in the order given, one line per entry, formatted as
/// `"{label}: {count}"`. The statistics report is already ordered by its
/// producer; no re-sorting happens here.
pub fn write_statistics_report(dest: &Path, statistics: &StatisticsReport) -> Result<(), Error> {
    let mut writer = BufWriter::new(File::create(dest)?);
    for (label, count) in statistics {
        writeln!(writer, "{}: {}", label, count)?;
    }
    writer.flush()?;

    Ok(())
}
