//! Serializable snapshot of every metric for one text

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::readability::Readability;
use super::text::{LengthUnit, TextAnalysis};
use crate::sorting::{sort_entries, SortDirection, SortOption};
use crate::syllable::SyllableCounter;

/// Options controlling the occurrence tables in a [`Summary`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryOptions {
    /// Count occurrences case-sensitively
    pub case_sensitive: bool,
    /// Keep only the first `top` rows of each table (None = all)
    pub top: Option<usize>,
    /// Table ordering
    pub sort: SortOption,
    pub direction: SortDirection,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            top: Some(10),
            sort: SortOption::Value,
            direction: SortDirection::Descending,
        }
    }
}

/// A single occurrence table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub token: String,
    pub count: usize,
}

/// Count-based metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub sentences: usize,
    pub words: usize,
    pub unique_words: usize,
    pub characters: usize,
    pub characters_excluding_spaces: usize,
    pub syllables: usize,
}

/// Ratio metrics; NaN or infinite values serialize as `null`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Averages {
    pub characters_per_word: f64,
    pub characters_per_sentence: f64,
    pub words_per_sentence: f64,
}

/// Every metric for one text, computed eagerly
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub counts: Counts,
    pub averages: Averages,
    pub readability: Readability,
    pub word_occurrences: Vec<Occurrence>,
    pub character_occurrences: Vec<Occurrence>,
}

impl TextAnalysis {
    /// Summarize using the shared syllable counter
    pub fn summary(&self, options: &SummaryOptions) -> Summary {
        self.summary_with(SyllableCounter::shared(), options)
    }

    /// Summarize using `counter`
    pub fn summary_with(&self, counter: &SyllableCounter, options: &SummaryOptions) -> Summary {
        let counts = Counts {
            sentences: self.sentence_count(),
            words: self.word_count(false),
            unique_words: self.word_count(true),
            characters: self.character_count(true),
            characters_excluding_spaces: self.character_count(false),
            syllables: self.syllable_count_with(counter),
        };

        let averages = Averages {
            characters_per_word: self.average_characters(LengthUnit::Word),
            characters_per_sentence: self.average_characters(LengthUnit::Sentence),
            words_per_sentence: self.average_words_per_sentence(),
        };

        let readability = Readability::from_counts(counts.words, counts.sentences, counts.syllables);

        Summary {
            counts,
            averages,
            readability,
            word_occurrences: table(self.word_occurrences(options.case_sensitive), options),
            character_occurrences: table(
                self.character_occurrences(options.case_sensitive),
                options,
            ),
        }
    }
}

/// Sorted, truncated occurrence rows; equal counts keep ascending token order
fn table(occurrences: HashMap<String, usize>, options: &SummaryOptions) -> Vec<Occurrence> {
    let by_token: BTreeMap<String, usize> = occurrences.into_iter().collect();
    sort_entries(by_token, options.sort, options.direction)
        .into_iter()
        .take(options.top.unwrap_or(usize::MAX))
        .map(|(token, count)| Occurrence { token, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let summary = TextAnalysis::new("Hello, world!").summary(&SummaryOptions::default());
        assert_eq!(
            summary.counts,
            Counts {
                sentences: 1,
                words: 2,
                unique_words: 2,
                characters: 13,
                characters_excluding_spaces: 12,
                syllables: 3,
            }
        );
        assert_eq!(summary.averages.characters_per_word, 5.0);
        assert_eq!(summary.averages.characters_per_sentence, 13.0);
        assert_eq!(summary.averages.words_per_sentence, 2.0);
    }

    #[test]
    fn test_summary_tables_sorted_and_truncated() {
        let options = SummaryOptions {
            top: Some(1),
            ..SummaryOptions::default()
        };
        let summary = TextAnalysis::new("b a b").summary(&options);
        assert_eq!(
            summary.word_occurrences,
            vec![Occurrence {
                token: "b".to_string(),
                count: 2
            }]
        );
        assert_eq!(summary.character_occurrences.len(), 1);
    }

    #[test]
    fn test_summary_untruncated_by_key() {
        let options = SummaryOptions {
            top: None,
            sort: SortOption::Key,
            direction: SortDirection::Ascending,
            case_sensitive: true,
        };
        let summary = TextAnalysis::new("b A a").summary(&options);
        let tokens: Vec<&str> = summary
            .word_occurrences
            .iter()
            .map(|o| o.token.as_str())
            .collect();
        assert_eq!(tokens, vec!["A", "a", "b"]);
    }

    #[test]
    fn test_equal_counts_ordered_by_token() {
        let options = SummaryOptions {
            top: None,
            ..SummaryOptions::default()
        };
        let summary = TextAnalysis::new("d c b a c").summary(&options);
        let tokens: Vec<&str> = summary
            .word_occurrences
            .iter()
            .map(|o| o.token.as_str())
            .collect();
        assert_eq!(tokens, vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn test_empty_summary_serializes_null_ratios() {
        let summary = TextAnalysis::new("").summary(&SummaryOptions::default());
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["averages"]["words_per_sentence"].is_null());
        assert!(json["readability"]["reading_ease"].is_null());
        assert_eq!(json["counts"]["words"], 0);
    }
}
