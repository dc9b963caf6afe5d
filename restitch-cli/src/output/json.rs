//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use restitch_core::Reduction;
use serde::Serialize;
use std::io::{self, Write};

/// Serializable view of a completed reduction
#[derive(Debug, Serialize)]
struct ReductionReport<'a> {
    text: &'a str,
    input_fragments: usize,
    passes: usize,
    containments_removed: usize,
    overlap_merges: usize,
}

impl<'a> From<&'a Reduction> for ReductionReport<'a> {
    fn from(reduction: &'a Reduction) -> Self {
        Self {
            text: &reduction.text,
            input_fragments: reduction.stats.input_fragments,
            passes: reduction.stats.passes,
            containments_removed: reduction.stats.containments_removed,
            overlap_merges: reduction.stats.overlap_merges,
        }
    }
}

/// JSON formatter - outputs the assembled text plus run statistics
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl JsonFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn write_reduction(&mut self, reduction: &Reduction) -> Result<()> {
        let report = ReductionReport::from(reduction);
        serde_json::to_writer_pretty(&mut self.writer, &report)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
