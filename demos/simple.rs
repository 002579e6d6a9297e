use text_stats::analyze_text;

fn main() {
    env_logger::init();

    let text = "Кот, кот! КОТ?";

    let analysis = analyze_text(text);

    println!("Word frequencies for the given text \"{}\"", text);
    let mut sorted_entries: Vec<_> = analysis.word_frequencies.iter().collect();
    sorted_entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (word, frequency) in sorted_entries {
        println!("{}: {}", word, frequency);
    }

    println!();
    println!("Statistics:");
    for (label, count) in &analysis.statistics {
        println!("{}: {}", label, count);
    }
}
