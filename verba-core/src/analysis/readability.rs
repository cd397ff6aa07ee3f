//! Flesch readability formulas
//!
//! Both scores are linear in average sentence length and average syllables
//! per word. Empty input divides by zero and yields NaN or infinite scores.

use serde::Serialize;

/// Flesch Reading Ease; higher is easier
pub fn flesch_reading_ease(words_per_sentence: f64, syllables_per_word: f64) -> f64 {
    206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word
}

/// Flesch-Kincaid Grade Level; approximate US school grade
pub fn flesch_kincaid_grade_level(words_per_sentence: f64, syllables_per_word: f64) -> f64 {
    0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59
}

/// Both readability scores for one text
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Readability {
    /// Flesch Reading Ease
    pub reading_ease: f64,
    /// Flesch-Kincaid Grade Level
    pub grade_level: f64,
}

impl Readability {
    /// Scores from raw counts
    pub fn from_counts(words: usize, sentences: usize, syllables: usize) -> Self {
        let words_per_sentence = words as f64 / sentences as f64;
        let syllables_per_word = syllables as f64 / words as f64;

        Self {
            reading_ease: flesch_reading_ease(words_per_sentence, syllables_per_word),
            grade_level: flesch_kincaid_grade_level(words_per_sentence, syllables_per_word),
        }
    }

    /// Whether both scores are finite numbers
    pub fn is_defined(&self) -> bool {
        self.reading_ease.is_finite() && self.grade_level.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_ease_formula() {
        let score = flesch_reading_ease(10.0, 1.5);
        assert!((score - (206.835 - 10.15 - 126.9)).abs() < 1e-9);
    }

    #[test]
    fn test_grade_level_formula() {
        let score = flesch_kincaid_grade_level(10.0, 1.5);
        assert!((score - (3.9 + 17.7 - 15.59)).abs() < 1e-9);
    }

    #[test]
    fn test_from_counts() {
        let readability = Readability::from_counts(2, 1, 3);
        assert!((readability.reading_ease - (206.835 - 2.03 - 126.9)).abs() < 1e-9);
        assert!((readability.grade_level - (0.78 + 17.7 - 15.59)).abs() < 1e-9);
        assert!(readability.is_defined());
    }

    #[test]
    fn test_degenerate_counts_are_undefined() {
        let no_words = Readability::from_counts(0, 0, 0);
        assert!(no_words.reading_ease.is_nan());
        assert!(no_words.grade_level.is_nan());
        assert!(!no_words.is_defined());

        let no_sentences = Readability::from_counts(3, 0, 3);
        assert!(no_sentences.reading_ease.is_infinite());
        assert!(!no_sentences.is_defined());
    }
}
