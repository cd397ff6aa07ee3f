//! Immutable text analysis

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::readability::Readability;
use super::segment;
use crate::casing;
use crate::syllable::SyllableCounter;

/// Percentage in the range `0.0..=100.0` (NaN for empty input)
pub type Percentage = f64;

/// Unit for average character counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Word,
    Sentence,
}

/// Statistics over a block of text
///
/// Sentences, words and characters are segmented once at construction; every
/// query is computed on demand from them. Equality, ordering and hashing
/// consider only the original input.
#[derive(Debug, Clone)]
pub struct TextAnalysis {
    input: String,
    sentences: Vec<String>,
    words: Vec<String>,
    characters: Vec<String>,
}

impl TextAnalysis {
    /// Analyze `input`
    pub fn new(input: impl Into<String>) -> Self {
        let input = input.into();
        let sentences = segment::sentences(&input);
        let words = segment::words(&input);
        let characters = segment::characters(&input);

        tracing::trace!(
            sentences = sentences.len(),
            words = words.len(),
            characters = characters.len(),
            "segmented input"
        );

        Self {
            input,
            sentences,
            words,
            characters,
        }
    }

    /// The original input, exactly as given
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Grapheme clusters of the whole input
    pub fn characters(&self) -> &[String] {
        &self.characters
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Number of words, or of distinct case-folded words when `unique`
    pub fn word_count(&self, unique: bool) -> usize {
        if unique {
            self.word_occurrences(false).len()
        } else {
            self.words.len()
        }
    }

    /// Number of characters, optionally excluding space characters
    pub fn character_count(&self, including_spaces: bool) -> usize {
        if including_spaces {
            self.characters.len()
        } else {
            self.characters.iter().filter(|c| c.as_str() != " ").count()
        }
    }

    /// Total syllables across all words using the shared counter
    pub fn syllable_count(&self) -> usize {
        self.syllable_count_with(SyllableCounter::shared())
    }

    /// Total syllables across all words using `counter`
    pub fn syllable_count_with(&self, counter: &SyllableCounter) -> usize {
        self.words.iter().map(|word| counter.count(word)).sum()
    }

    /// Occurrence count of every word, case-folded unless `case_sensitive`
    pub fn word_occurrences(&self, case_sensitive: bool) -> HashMap<String, usize> {
        count_folded(&self.words, case_sensitive, str::to_lowercase)
    }

    /// Occurrence count of every character, case-folded unless `case_sensitive`
    pub fn character_occurrences(&self, case_sensitive: bool) -> HashMap<String, usize> {
        count_folded(&self.characters, case_sensitive, casing::lowercase)
    }

    /// Occurrences of `word`; 0 when absent
    pub fn word_occurrence(&self, word: &str, case_sensitive: bool) -> usize {
        let target = if case_sensitive {
            word.to_string()
        } else {
            word.to_lowercase()
        };
        self.word_occurrences(case_sensitive)
            .get(&target)
            .copied()
            .unwrap_or(0)
    }

    /// Occurrences of the grapheme `character`; 0 when absent
    pub fn character_occurrence(&self, character: &str, case_sensitive: bool) -> usize {
        let target = casing::fold(character, case_sensitive);
        self.characters
            .iter()
            .filter(|c| casing::fold(c.as_str(), case_sensitive) == target)
            .count()
    }

    /// Syllables for every distinct case-folded word using the shared counter
    pub fn word_syllables(&self) -> HashMap<String, usize> {
        self.word_syllables_with(SyllableCounter::shared())
    }

    /// Syllables for every distinct case-folded word using `counter`
    pub fn word_syllables_with(&self, counter: &SyllableCounter) -> HashMap<String, usize> {
        self.word_occurrences(false)
            .into_keys()
            .map(|word| {
                let syllables = counter.count(&word);
                (word, syllables)
            })
            .collect()
    }

    /// Share of words equal to `word`, as a percentage of `word_count(false)`
    pub fn word_frequency(&self, word: &str, case_sensitive: bool) -> Percentage {
        self.word_occurrence(word, case_sensitive) as f64 / self.word_count(false) as f64 * 100.0
    }

    /// Share of characters equal to `character`, as a percentage of
    /// `character_count(including_spaces)`
    pub fn character_frequency(
        &self,
        character: &str,
        case_sensitive: bool,
        including_spaces: bool,
    ) -> Percentage {
        self.character_occurrence(character, case_sensitive) as f64
            / self.character_count(including_spaces) as f64
            * 100.0
    }

    /// Average number of characters per word or per sentence
    pub fn average_characters(&self, per: LengthUnit) -> f64 {
        match per {
            LengthUnit::Word => {
                segment::concatenated_length(&self.words) as f64 / self.word_count(false) as f64
            }
            // A single sentence is measured against the whole input
            LengthUnit::Sentence if self.sentences.len() > 1 => {
                segment::concatenated_length(&self.sentences) as f64
                    / self.sentence_count() as f64
            }
            LengthUnit::Sentence => {
                self.character_count(true) as f64 / self.sentence_count() as f64
            }
        }
    }

    pub fn average_words_per_sentence(&self) -> f64 {
        self.word_count(false) as f64 / self.sentence_count() as f64
    }

    /// Flesch Reading Ease using the shared counter
    pub fn flesch_reading_ease(&self) -> f64 {
        self.readability().reading_ease
    }

    /// Flesch Reading Ease using `counter`
    pub fn flesch_reading_ease_with(&self, counter: &SyllableCounter) -> f64 {
        self.readability_with(counter).reading_ease
    }

    /// Flesch-Kincaid Grade Level using the shared counter
    pub fn flesch_kincaid_grade_level(&self) -> f64 {
        self.readability().grade_level
    }

    /// Flesch-Kincaid Grade Level using `counter`
    pub fn flesch_kincaid_grade_level_with(&self, counter: &SyllableCounter) -> f64 {
        self.readability_with(counter).grade_level
    }

    /// Both readability scores using the shared counter
    pub fn readability(&self) -> Readability {
        self.readability_with(SyllableCounter::shared())
    }

    /// Both readability scores using `counter`
    pub fn readability_with(&self, counter: &SyllableCounter) -> Readability {
        Readability::from_counts(
            self.word_count(false),
            self.sentence_count(),
            self.syllable_count_with(counter),
        )
    }
}

fn count_folded(
    items: &[String],
    case_sensitive: bool,
    fold: impl Fn(&str) -> String,
) -> HashMap<String, usize> {
    let mut occurrences = HashMap::new();
    for item in items {
        let key = if case_sensitive {
            item.clone()
        } else {
            fold(item.as_str())
        };
        *occurrences.entry(key).or_insert(0) += 1;
    }
    occurrences
}

impl PartialEq for TextAnalysis {
    fn eq(&self, other: &Self) -> bool {
        self.input == other.input
    }
}

impl Eq for TextAnalysis {}

impl PartialOrd for TextAnalysis {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TextAnalysis {
    fn cmp(&self, other: &Self) -> Ordering {
        self.input.cmp(&other.input)
    }
}

impl Hash for TextAnalysis {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.input.hash(state);
    }
}

impl fmt::Display for TextAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextAnalysis({:?})", self.input)
    }
}

impl From<&str> for TextAnalysis {
    fn from(input: &str) -> Self {
        Self::new(input)
    }
}

impl From<String> for TextAnalysis {
    fn from(input: String) -> Self {
        Self::new(input)
    }
}

/// Convenience constructor on string slices
pub trait AnalyzeExt {
    /// Analyze this text
    fn analysed(&self) -> TextAnalysis;
}

impl AnalyzeExt for str {
    fn analysed(&self) -> TextAnalysis {
        TextAnalysis::new(self)
    }
}
