//! Generate-config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use verba_core::SyllableConfig;

use crate::error::CliError;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Where to write the template
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        write_template(&self.output, self.force)?;

        println!("✓ Syllable table written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("  1. Edit exceptions and patterns to suit your corpus");
        println!(
            "  2. Check it with: verba validate -c {}",
            self.output.display()
        );
        println!(
            "  3. Use it with: verba analyze -i <FILES> --syllable-config {}",
            self.output.display()
        );
        Ok(())
    }
}

fn write_template(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::ConfigError(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ))
        .into());
    }

    fs::write(path, SyllableConfig::embedded_source())
        .with_context(|| format!("Failed to write template: {}", path.display()))
}
