//! Heuristic English syllable estimation
//!
//! Counting is driven entirely by a data table: an exception map of
//! irregular words, two ordered lists of corrective patterns and a vowel
//! set. The default table is embedded in the crate; custom tables share the
//! same TOML schema.

pub mod config;
pub mod counter;
pub(crate) mod tables;

use std::sync::LazyLock;

use regex::Regex;

pub use config::SyllableConfig;
pub use counter::{syllables, SyllableCounter};

/// Leading or trailing Unicode punctuation
static SURROUNDING_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\p{P}+|\p{P}+$").unwrap_or_else(|e| panic!("punctuation pattern: {e}"))
});

/// Lowercase `word` and strip surrounding punctuation
pub(crate) fn normalize(word: &str) -> String {
    let lowered = word.to_lowercase();
    SURROUNDING_PUNCTUATION.replace_all(&lowered, "").into_owned()
}
