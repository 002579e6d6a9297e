use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use structopt::StructOpt;
use text_stats::{analyze_text, write_statistics_report, write_word_frequency_report};

/// Directory the report files are written into, created on demand.
const OUTPUT_DIR: &str = "result";

#[derive(StructOpt, Debug)]
#[structopt(
    name = "text-stats",
    about = "Generates word frequency and punctuation statistics reports for a text file."
)]
struct Opt {
    /// Path to the input text file
    input_file: PathBuf,
}

/// Derives a report file path under `OUTPUT_DIR` from the input file's name,
/// replacing a trailing `.txt` with the given suffix.
fn report_file_path(input_file: &Path, suffix: &str) -> PathBuf {
    let file_name = input_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.strip_suffix(".txt").unwrap_or(&file_name);

    Path::new(OUTPUT_DIR).join(format!("{}{}", stem, suffix))
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let opt = Opt::from_args();

    // Read the input text as UTF-8
    let text = match fs::read_to_string(&opt.input_file) {
        Ok(text) => text,
        Err(e) => {
            error!(
                "Failed to read input file {}: {}",
                opt.input_file.display(),
                e
            );
            process::exit(1);
        }
    };

    let analysis = analyze_text(&text);

    if let Err(e) = fs::create_dir_all(OUTPUT_DIR) {
        error!("Failed to create output directory {}: {}", OUTPUT_DIR, e);
        process::exit(1);
    }

    let words_file = report_file_path(&opt.input_file, "_words.txt");
    if let Err(e) = write_word_frequency_report(&words_file, &analysis.word_frequencies) {
        error!(
            "Failed to write word frequency report {}: {}",
            words_file.display(),
            e
        );
        process::exit(1);
    }

    let stats_file = report_file_path(&opt.input_file, "_stat.txt");
    if let Err(e) = write_statistics_report(&stats_file, &analysis.statistics) {
        error!(
            "Failed to write statistics report {}: {}",
            stats_file.display(),
            e
        );
        process::exit(1);
    }

    info!(
        "Reports written to {} and {}",
        words_file.display(),
        stats_file.display()
    );
}
