//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use verba_core::{SyllableConfig, SyllableCounter};

use super::init_logging;
use crate::error::CliError;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Syllable table to validate
    #[arg(short = 'c', long, value_name = "FILE")]
    pub syllable_config: PathBuf,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        println!(
            "Validating syllable table: {}",
            self.syllable_config.display()
        );

        match load(&self.syllable_config) {
            Ok(counter) => {
                println!("✓ Table is valid");
                println!("  Name: {}", counter.name());
                println!("  Exceptions: {}", counter.exception_count());
                println!("  Add patterns: {}", counter.add_pattern_count());
                println!("  Subtract patterns: {}", counter.subtract_pattern_count());
                Ok(())
            }
            Err(e) => {
                println!("✗ Table is invalid");
                Err(CliError::SyllableTable(e.to_string()).into())
            }
        }
    }
}

/// Parse, validate, and compile the table
fn load(path: &std::path::Path) -> verba_core::Result<SyllableCounter> {
    let config = SyllableConfig::from_file(path)?;
    SyllableCounter::from_config(&config)
}
