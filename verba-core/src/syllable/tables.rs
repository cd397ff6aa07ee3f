//! Compiled runtime tables for syllable estimation
//!
//! Patterns are compiled once when a counter is built and reused for every
//! lookup afterwards.

use std::collections::{HashMap, HashSet};

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};

/// Ordered list of compiled corrective patterns
#[derive(Debug, Clone)]
pub struct PatternList {
    patterns: Vec<Regex>,
}

impl PatternList {
    /// Compile patterns in order, case-insensitive with line anchors
    pub fn compile(sources: &[String]) -> Result<Self> {
        let patterns = sources
            .iter()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .multi_line(true)
                    .build()
                    .map_err(|source| Error::InvalidPattern {
                        pattern: pattern.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Number of patterns that match anywhere in `word`
    ///
    /// Each pattern contributes at most once regardless of how many times it
    /// matches.
    #[inline]
    pub fn matching(&self, word: &str) -> usize {
        self.patterns.iter().filter(|re| re.is_match(word)).count()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Irregular words with explicit syllable counts
#[derive(Debug, Clone, Default)]
pub struct ExceptionTable {
    entries: HashMap<String, usize>,
}

impl ExceptionTable {
    pub fn new(entries: HashMap<String, usize>) -> Self {
        Self { entries }
    }

    /// Override for an already normalized word
    #[inline]
    pub fn get(&self, normalized: &str) -> Option<usize> {
        self.entries.get(normalized).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Vowel graphemes for the vowel-group scan
#[derive(Debug, Clone)]
pub struct VowelSet {
    vowels: HashSet<char>,
}

impl VowelSet {
    pub fn new(chars: &str) -> Self {
        Self {
            vowels: chars.chars().collect(),
        }
    }

    /// Whether a grapheme cluster is exactly one vowel
    #[inline]
    pub fn contains(&self, grapheme: &str) -> bool {
        let mut chars = grapheme.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => self.vowels.contains(&ch),
            _ => false,
        }
    }
}
