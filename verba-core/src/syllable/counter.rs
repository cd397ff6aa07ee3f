//! Heuristic syllable counter

use std::sync::OnceLock;

use unicode_segmentation::UnicodeSegmentation;

use super::config::SyllableConfig;
use super::normalize;
use super::tables::{ExceptionTable, PatternList, VowelSet};
use crate::error::Result;

/// Process-wide counter built from the embedded table
static SHARED: OnceLock<SyllableCounter> = OnceLock::new();

/// Rule-based syllable estimator
///
/// Counting is a pure function of the word and the compiled tables, so a
/// single counter can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct SyllableCounter {
    name: String,
    exceptions: ExceptionTable,
    add: PatternList,
    subtract: PatternList,
    vowels: VowelSet,
}

impl SyllableCounter {
    /// Compile a counter from a validated table
    pub fn from_config(config: &SyllableConfig) -> Result<Self> {
        config.validate()?;

        let add = PatternList::compile(&config.patterns.add)?;
        let subtract = PatternList::compile(&config.patterns.subtract)?;

        tracing::debug!(
            table = %config.metadata.name,
            add = add.len(),
            subtract = subtract.len(),
            exceptions = config.exceptions.len(),
            "compiled syllable table"
        );

        Ok(Self {
            name: config.metadata.name.clone(),
            exceptions: ExceptionTable::new(config.exceptions.clone()),
            add,
            subtract,
            vowels: VowelSet::new(&config.vowels.chars),
        })
    }

    /// Counter for the embedded English table
    ///
    /// # Panics
    ///
    /// Panics on first use if the embedded table fails to parse or compile.
    /// The table is a compile-time constant, so this only happens on a broken
    /// build.
    pub fn shared() -> &'static SyllableCounter {
        SHARED.get_or_init(|| {
            SyllableConfig::embedded()
                .and_then(|config| Self::from_config(&config))
                .unwrap_or_else(|e| panic!("embedded syllable table is invalid: {e}"))
        })
    }

    /// Estimate the syllables in a single word
    ///
    /// Empty input yields 0, a single grapheme yields 1, and every other word
    /// yields at least 1.
    pub fn count(&self, word: &str) -> usize {
        let length = word.graphemes(true).count();
        if length <= 1 {
            return length;
        }

        let normalized = normalize(word);
        if let Some(count) = self.exceptions.get(&normalized) {
            return count;
        }

        let stem = normalized.strip_suffix('e').unwrap_or(&normalized);

        let added = self.vowel_groups(stem) + self.add.matching(stem);
        let subtracted = self.subtract.matching(stem);

        if added > subtracted {
            added - subtracted
        } else {
            1
        }
    }

    /// Explicit override for `word`, if the table lists one
    pub fn exception(&self, word: &str) -> Option<usize> {
        self.exceptions.get(&normalize(word))
    }

    /// Number of runs of consecutive vowels
    fn vowel_groups(&self, word: &str) -> usize {
        let mut groups = 0;
        let mut previous_is_vowel = false;

        for grapheme in word.graphemes(true) {
            let is_vowel = self.vowels.contains(grapheme);
            if is_vowel && !previous_is_vowel {
                groups += 1;
            }
            previous_is_vowel = is_vowel;
        }

        groups
    }

    /// Table name from the configuration metadata
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }

    pub fn add_pattern_count(&self) -> usize {
        self.add.len()
    }

    pub fn subtract_pattern_count(&self) -> usize {
        self.subtract.len()
    }
}

/// Syllables in `word` according to the shared English counter
pub fn syllables(word: &str) -> usize {
    SyllableCounter::shared().count(word)
}
