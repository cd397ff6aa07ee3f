//! Syllable table schema
//!
//! This module defines the TOML schema for syllable tables. The default
//! English table is embedded at compile time; callers may supply their own.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::normalize;
use crate::error::{Error, Result};

/// Embedded default table
pub(crate) const EMBEDDED_TABLE: &str = include_str!("../../configs/syllables.toml");

/// Root syllable table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyllableConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub vowels: Vowels,
    pub patterns: Patterns,
    #[serde(default)]
    pub exceptions: HashMap<String, usize>,
}

/// Table metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Characters counted as vowels for the vowel-group scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vowels {
    pub chars: String,
}

impl Default for Vowels {
    fn default() -> Self {
        Self {
            chars: "aeiouy".to_string(),
        }
    }
}

/// Ordered corrective patterns
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Patterns {
    #[serde(default)]
    pub add: Vec<String>,
    #[serde(default)]
    pub subtract: Vec<String>,
}

impl SyllableConfig {
    /// TOML source of the embedded default table
    pub fn embedded_source() -> &'static str {
        EMBEDDED_TABLE
    }

    /// The default English table shipped with the crate
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_TABLE)
    }

    /// Parse and validate a table from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: SyllableConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a table from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading syllable table");
        Self::from_toml_str(&content)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.metadata.name.trim().is_empty() {
            return Err(Error::Configuration("metadata.name is empty".to_string()));
        }

        if self.vowels.chars.is_empty() {
            return Err(Error::Configuration("vowel set is empty".to_string()));
        }

        for (word, &count) in &self.exceptions {
            if count == 0 {
                return Err(Error::Configuration(format!(
                    "exception `{word}` must map to at least one syllable"
                )));
            }
            // Lookups happen after normalization, so un-normalized keys could never match
            if word.is_empty() || normalize(word) != *word {
                return Err(Error::Configuration(format!(
                    "exception `{word}` is not normalized (expected lowercase without surrounding punctuation)"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[metadata]
name = "minimal"

[patterns]
add = ["ia"]
"#;

    #[test]
    fn test_embedded_table_parses() {
        let config = SyllableConfig::embedded().unwrap();
        assert_eq!(config.metadata.name, "english");
        assert_eq!(config.vowels.chars, "aeiouy");
        assert_eq!(config.patterns.add.len(), 25);
        assert_eq!(config.patterns.subtract.len(), 15);
        assert_eq!(config.exceptions.get("queue"), Some(&1));
        assert_eq!(config.exceptions.get("propitiatory"), Some(&6));
    }

    #[test]
    fn test_embedded_source_roundtrips() {
        let source = SyllableConfig::embedded_source();
        assert!(source.contains("[exceptions]"));
        let config = SyllableConfig::from_toml_str(source).unwrap();
        assert_eq!(config.exceptions.len(), 67);
    }

    #[test]
    fn test_minimal_table_uses_defaults() {
        let config = SyllableConfig::from_toml_str(MINIMAL).unwrap();
        assert_eq!(config.vowels.chars, "aeiouy");
        assert!(config.patterns.subtract.is_empty());
        assert!(config.exceptions.is_empty());
    }

    #[test]
    fn test_missing_patterns_section_is_parse_error() {
        let result = SyllableConfig::from_toml_str("[metadata]\nname = \"x\"\n");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_rejects_zero_exception() {
        let toml_str = format!("{MINIMAL}\n[exceptions]\n\"queue\" = 0\n");
        let result = SyllableConfig::from_toml_str(&toml_str);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_rejects_unnormalized_exception() {
        let toml_str = format!("{MINIMAL}\n[exceptions]\n\"Queue\" = 1\n");
        let result = SyllableConfig::from_toml_str(&toml_str);
        assert!(matches!(result, Err(Error::Configuration(_))));

        let toml_str = format!("{MINIMAL}\n[exceptions]\n\"queue.\" = 1\n");
        assert!(SyllableConfig::from_toml_str(&toml_str).is_err());
    }

    #[test]
    fn test_rejects_empty_vowels() {
        let toml_str = format!("{MINIMAL}\n[vowels]\nchars = \"\"\n");
        let result = SyllableConfig::from_toml_str(&toml_str);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_from_file_missing() {
        let result = SyllableConfig::from_file(Path::new("/nonexistent/syllables.toml"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_from_file_roundtrip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("table.toml");
        fs::write(&path, MINIMAL).unwrap();

        let config = SyllableConfig::from_file(&path).unwrap();
        assert_eq!(config.metadata.name, "minimal");
        assert_eq!(config.patterns.add, vec!["ia".to_string()]);
    }
}
