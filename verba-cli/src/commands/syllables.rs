//! Syllables command implementation

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;
use verba_core::SyllableCounter;

use super::{init_logging, syllable_counter};

/// Arguments for the syllables command
#[derive(Debug, Args)]
pub struct SyllablesArgs {
    /// Words to estimate
    #[arg(required = true, value_name = "WORD")]
    pub words: Vec<String>,

    /// Custom syllable table (TOML)
    #[arg(long, value_name = "FILE")]
    pub syllable_config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SyllablesArgs {
    /// Execute the syllables command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let counter = syllable_counter(self.syllable_config.as_deref())?;
        let stdout = io::stdout();
        write_counts(&mut stdout.lock(), &counter, &self.words)
    }
}

/// One `word<TAB>count` line per word
fn write_counts<W: Write>(writer: &mut W, counter: &SyllableCounter, words: &[String]) -> Result<()> {
    for word in words {
        writeln!(writer, "{}\t{}", word, counter.count(word))?;
    }
    Ok(())
}
