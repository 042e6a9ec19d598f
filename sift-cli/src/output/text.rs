//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use sift_core::Answer;
use std::io::Write;

/// Plain text formatter - writes the answer's display form
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn write_answer(&mut self, answer: &Answer) -> Result<()> {
        writeln!(self.writer, "{answer}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_core::solvers::ScoreAnswer;

    #[test]
    fn test_writes_display_form() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter
            .write_answer(&Answer::RockPaperScissors(ScoreAnswer { total_score: 15 }))
            .unwrap();
        formatter.finish().unwrap();

        assert_eq!(String::from_utf8(formatter.writer).unwrap(), "15\n");
    }
}
