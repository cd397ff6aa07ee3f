//! Output formatting module

use anyhow::Result;
use verba_core::Summary;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the summary of a single input
    fn format_summary(&mut self, source: &str, summary: &Summary) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Render a ratio with two decimals, or `n/a` when undefined
pub(crate) fn ratio(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        "n/a".to_string()
    }
}

/// Labelled metric rows shared by the text and markdown formatters
pub(crate) fn metric_rows(summary: &Summary) -> Vec<(&'static str, String)> {
    let counts = &summary.counts;
    let averages = &summary.averages;
    let readability = &summary.readability;

    vec![
        ("Sentences", counts.sentences.to_string()),
        ("Words", counts.words.to_string()),
        ("Unique words", counts.unique_words.to_string()),
        ("Characters", counts.characters.to_string()),
        (
            "Characters (excluding spaces)",
            counts.characters_excluding_spaces.to_string(),
        ),
        ("Syllables", counts.syllables.to_string()),
        (
            "Average characters per word",
            ratio(averages.characters_per_word),
        ),
        (
            "Average characters per sentence",
            ratio(averages.characters_per_sentence),
        ),
        (
            "Average words per sentence",
            ratio(averages.words_per_sentence),
        ),
        ("Flesch reading ease", ratio(readability.reading_ease)),
        ("Flesch-Kincaid grade level", ratio(readability.grade_level)),
    ]
}
