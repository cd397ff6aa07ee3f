//! Text segmentation and metrics
//!
//! [`TextAnalysis`] segments its input once into sentences, words and
//! grapheme clusters and answers counting, frequency, average and
//! readability queries from those sequences.

pub mod readability;
pub mod segment;
pub mod summary;
pub mod text;

pub use readability::{flesch_kincaid_grade_level, flesch_reading_ease, Readability};
pub use summary::{Averages, Counts, Occurrence, Summary, SummaryOptions};
pub use text::{AnalyzeExt, LengthUnit, Percentage, TextAnalysis};
