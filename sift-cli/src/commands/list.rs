//! List command implementation

use crate::output::OutputFormat;
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use sift_core::Puzzle;
use std::io::{self, Write};

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct PuzzleEntry {
    name: &'static str,
    year: u16,
    day: u8,
    title: &'static str,
}

impl From<Puzzle> for PuzzleEntry {
    fn from(puzzle: Puzzle) -> Self {
        let (year, day) = puzzle.date();
        Self {
            name: puzzle.name(),
            year,
            day,
            title: puzzle.title(),
        }
    }
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        self.write_to(&mut stdout.lock())
    }

    fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let entries: Vec<PuzzleEntry> = Puzzle::ALL.into_iter().map(PuzzleEntry::from).collect();

        match self.format {
            OutputFormat::Text => {
                for entry in &entries {
                    writeln!(
                        writer,
                        "{}-{:02}  {:<20} {}",
                        entry.year, entry.day, entry.name, entry.title
                    )?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *writer, &entries)?;
                writeln!(writer)?;
            }
        }

        writer.flush()?;
        Ok(())
    }
}
