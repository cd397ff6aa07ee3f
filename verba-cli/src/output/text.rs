//! Plain text output formatter

use super::{metric_rows, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use verba_core::{Occurrence, Summary};

/// Plain text formatter - outputs an aligned report per input
pub struct TextFormatter<W: Write> {
    writer: W,
    reports: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, reports: 0 }
    }

    fn write_table(&mut self, title: &str, rows: &[Occurrence], quote: bool) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }

        writeln!(self.writer)?;
        writeln!(self.writer, "{title}:")?;
        for row in rows {
            if quote {
                writeln!(self.writer, "  {:<20} {}", format!("{:?}", row.token), row.count)?;
            } else {
                writeln!(self.writer, "  {:<20} {}", row.token, row.count)?;
            }
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_summary(&mut self, source: &str, summary: &Summary) -> Result<()> {
        if self.reports > 0 {
            writeln!(self.writer)?;
        }
        self.reports += 1;

        writeln!(self.writer, "== {source} ==")?;
        for (label, value) in metric_rows(summary) {
            writeln!(self.writer, "{:<32} {:>10}", format!("{label}:"), value)?;
        }

        self.write_table("Word occurrences", &summary.word_occurrences, false)?;
        // Characters are quoted so whitespace stays visible
        self.write_table("Character occurrences", &summary.character_occurrences, true)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
