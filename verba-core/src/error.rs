//! Error types for verba-core
//!
//! Analysis itself never fails: degenerate input yields NaN or infinite
//! ratios instead. Errors only arise while loading or compiling a syllable
//! table.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for table loading and compilation
#[derive(Debug, Error)]
pub enum Error {
    /// Table contents are structurally valid TOML but semantically wrong
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A syllable pattern failed to compile
    #[error("Invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern as written in the table
        pattern: String,
        /// Underlying regex compilation error
        #[source]
        source: regex::Error,
    },

    /// The table is not valid TOML or does not match the schema
    #[error("Failed to parse syllable table: {0}")]
    Parse(#[from] toml::de::Error),

    /// The table file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for verba-core operations
pub type Result<T> = std::result::Result<T, Error>;
