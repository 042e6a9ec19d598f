//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use sift_core::Answer;
use std::io::Write;

/// JSON formatter - writes each answer as a pretty-printed object
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn write_answer(&mut self, answer: &Answer) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, answer)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
