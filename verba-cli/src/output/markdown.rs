//! Markdown output formatter

use super::{metric_rows, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use verba_core::{Occurrence, Summary};

/// Markdown formatter - outputs metrics and occurrences as tables
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    report_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            report_count: 0,
        }
    }

    fn write_table(&mut self, title: &str, header: &str, rows: &[Occurrence]) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "### {title}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| {header} | Count |")?;
        writeln!(self.writer, "|---|---:|")?;
        for row in rows {
            writeln!(self.writer, "| {} | {} |", cell(&row.token), row.count)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Escape a token for a table cell; whitespace is shown as code
fn cell(token: &str) -> String {
    if token.trim().is_empty() {
        format!("`{token:?}`")
    } else {
        token.replace('|', "\\|")
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_summary(&mut self, source: &str, summary: &Summary) -> Result<()> {
        self.report_count += 1;

        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|---|---:|")?;
        for (label, value) in metric_rows(summary) {
            writeln!(self.writer, "| {label} | {value} |")?;
        }
        writeln!(self.writer)?;

        self.write_table("Word occurrences", "Word", &summary.word_occurrences)?;
        self.write_table(
            "Character occurrences",
            "Character",
            &summary.character_occurrences,
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total inputs: {}*", self.report_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
