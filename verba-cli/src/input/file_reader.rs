//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A text to analyze and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputText {
    /// Display name: the file path, or `<text>` for inline input
    pub source: String,
    pub content: String,
}

impl InputText {
    /// Inline text passed on the command line
    pub fn inline(content: impl Into<String>) -> Self {
        Self {
            source: "<text>".to_string(),
            content: content.into(),
        }
    }
}

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }

    /// Read every file into an [`InputText`], in order
    pub fn read_all(paths: &[PathBuf]) -> Result<Vec<InputText>> {
        paths
            .iter()
            .map(|path| -> Result<InputText> {
                log::debug!(
                    "Reading {} ({} bytes)",
                    path.display(),
                    Self::file_size(path)?
                );
                Ok(InputText {
                    source: path.display().to_string(),
                    content: Self::read_text(path)?,
                })
            })
            .collect()
    }
}
