//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use std::borrow::Cow;
use std::path::Path;
use verba_core::{SyllableConfig, SyllableCounter};

use crate::error::CliError;

pub mod analyze;
pub mod generate_config;
pub mod syllables;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute statistics and readability scores for text files
    Analyze(analyze::AnalyzeArgs),

    /// Estimate syllables for individual words
    Syllables(syllables::SyllablesArgs),

    /// Validate a syllable table file
    Validate(validate::ValidateArgs),

    /// Write the built-in syllable table as an editable template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when commands run inside tests
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

/// The shared counter, or one compiled from a custom table
pub(crate) fn syllable_counter(path: Option<&Path>) -> Result<Cow<'static, SyllableCounter>> {
    match path {
        None => Ok(Cow::Borrowed(SyllableCounter::shared())),
        Some(path) => {
            log::info!("Loading syllable table from {}", path.display());
            let counter = SyllableConfig::from_file(path)
                .and_then(|config| SyllableCounter::from_config(&config))
                .map_err(|e| CliError::SyllableTable(e.to_string()))?;
            Ok(Cow::Owned(counter))
        }
    }
}
