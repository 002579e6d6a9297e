use std::fs;
use std::path::{Path, PathBuf};
use text_stats::{StatLabel, StatisticsReport};

/// Utility to load a fixture document from the integration test files directory.
pub fn load_test_file(file_name: &str) -> String {
    let path = Path::new("tests").join("test_files").join(file_name);
    fs::read_to_string(&path).expect("Failed to read test file")
}

/// Returns a writable path for a report file produced during a test. Paths are
/// namespaced per process so parallel test runs do not collide.
pub fn temp_report_path(file_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("text-stats-test-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("Failed to create temp report directory");
    dir.join(file_name)
}

/// Reads a report file back as its individual lines.
pub fn read_report_lines(path: &Path) -> Vec<String> {
    let content = fs::read_to_string(path).expect("Failed to read report file");
    content.lines().map(|line| line.to_string()).collect()
}

/// Looks up a single statistics report entry by label.
pub fn stat_value(statistics: &StatisticsReport, label: StatLabel) -> usize {
    statistics
        .iter()
        .find(|(entry_label, _)| *entry_label == label)
        .map(|(_, count)| *count)
        .expect("Statistics report is missing the requested label")
}
