//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use verba_core::Summary;

/// JSON formatter - outputs one summary per input as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    reports: Vec<Report>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct Report {
    /// Where the text came from
    pub source: String,
    /// Every metric for the text
    #[serde(flatten)]
    pub summary: Summary,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            reports: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_summary(&mut self, source: &str, summary: &Summary) -> Result<()> {
        self.reports.push(Report {
            source: source.to_string(),
            summary: summary.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.reports)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
