//! Descriptive statistics and readability scores for English text
//!
//! This crate segments a block of text into sentences, words and grapheme
//! clusters, counts and compares them, and feeds a heuristic syllable
//! counter into the Flesch readability formulas.
//!
//! # Architecture
//!
//! - **Syllable layer**: a data-driven estimator built from an embedded TOML
//!   table (irregular words plus ordered corrective patterns)
//! - **Analysis layer**: immutable [`TextAnalysis`] values and the derived
//!   [`Summary`] snapshot
//! - **Helpers**: grapheme case mapping and occurrence-table ordering
//!
//! # Example
//!
//! ```rust
//! use verba_core::{LengthUnit, TextAnalysis};
//!
//! let analysis = TextAnalysis::new("Hello. Hallo? Hoi!");
//!
//! assert_eq!(analysis.sentence_count(), 3);
//! assert_eq!(analysis.word_count(false), 3);
//! assert_eq!(analysis.average_words_per_sentence(), 1.0);
//! assert!((analysis.average_characters(LengthUnit::Word) - 4.33).abs() < 0.01);
//! ```
//!
//! Degenerate input is not an error: an empty text has zero words and zero
//! sentences, so every ratio over them is NaN.
//!
//! ```rust
//! use verba_core::TextAnalysis;
//!
//! assert!(TextAnalysis::new("").flesch_reading_ease().is_nan());
//! ```

pub mod analysis;
pub mod casing;
pub mod error;
pub mod sorting;
pub mod syllable;

pub use analysis::{
    flesch_kincaid_grade_level, flesch_reading_ease, AnalyzeExt, LengthUnit, Occurrence,
    Percentage, Readability, Summary, SummaryOptions, TextAnalysis,
};
pub use error::{Error, Result};
pub use sorting::{sort_entries, SortDirection, SortOption, SortedEntries};
pub use syllable::{syllables, SyllableConfig, SyllableCounter};
