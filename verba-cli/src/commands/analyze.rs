//! Analyze command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use verba_core::{SortDirection, SortOption, Summary, SummaryOptions, SyllableCounter, TextAnalysis};

use super::{init_logging, syllable_counter};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, InputText};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob)
    #[arg(
        short,
        long,
        value_name = "FILE/PATTERN",
        required_unless_present = "text",
        conflicts_with = "text"
    )]
    pub input: Vec<String>,

    /// Analyze this text instead of files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, otherwise text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Count word and character occurrences case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Rows per occurrence table (0 = all)
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Order occurrence tables by key or value
    #[arg(long, value_name = "key|value")]
    pub sort: Option<SortOption>,

    /// Occurrence table direction
    #[arg(long, value_name = "ascending|descending")]
    pub direction: Option<SortDirection>,

    /// Custom syllable table (TOML)
    #[arg(long, value_name = "FILE")]
    pub syllable_config: Option<PathBuf>,

    /// Analyze files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text report
    Text,
    /// JSON array with one summary per input
    Json,
    /// Markdown tables
    Markdown,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting text analysis");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let format = self.resolve_format(&config)?;
        let options = self.summary_options(&config);
        let counter = syllable_counter(self.syllable_config.as_deref())?;

        let inputs = self.collect_inputs()?;
        let summaries = self.summarize(&inputs, &counter, &options, &config)?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        for (input, summary) in inputs.iter().zip(&summaries) {
            formatter.format_summary(&input.source, summary)?;
        }
        formatter.finish()?;

        log::info!("Analyzed {} input(s)", inputs.len());
        Ok(())
    }

    /// Command-line format, falling back to the configured default
    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }

        OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
            anyhow::Error::from(CliError::ConfigError(format!(
                "unknown output format: {}",
                config.output.default_format
            )))
        })
    }

    /// Occurrence table options; flags override config
    fn summary_options(&self, config: &CliConfig) -> SummaryOptions {
        let top = self.top.unwrap_or(config.output.top);

        SummaryOptions {
            case_sensitive: self.case_sensitive || config.output.case_sensitive,
            top: (top > 0).then_some(top),
            sort: self.sort.unwrap_or(config.output.sort),
            direction: self.direction.unwrap_or(config.output.direction),
        }
    }

    fn collect_inputs(&self) -> Result<Vec<InputText>> {
        if let Some(text) = &self.text {
            return Ok(vec![InputText::inline(text.as_str())]);
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to analyze", files.len());
        FileReader::read_all(&files)
    }

    fn summarize(
        &self,
        inputs: &[InputText],
        counter: &SyllableCounter,
        options: &SummaryOptions,
        config: &CliConfig,
    ) -> Result<Vec<Summary>> {
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(inputs.len() as u64);

        let analyze = |input: &InputText| {
            let summary = TextAnalysis::new(input.content.as_str()).summary_with(counter, options);
            progress.file_completed(&input.source);
            summary
        };

        let summaries = if self.parallel && inputs.len() > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(config.performance.worker_threads)
                .build()
                .context("Failed to build thread pool")?;
            log::debug!("Analyzing on {} threads", pool.current_num_threads());
            pool.install(|| inputs.par_iter().map(analyze).collect())
        } else {
            inputs.iter().map(analyze).collect()
        };

        progress.finish();
        Ok(summaries)
    }
}
