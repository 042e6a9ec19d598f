//! Output formatting module

use crate::error::CliError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use sift_core::Answer;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one answer
    fn write_answer(&mut self, answer: &Answer) -> Result<()>;

    /// Finalize output (e.g., flush buffered JSON)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The puzzle's plain-text answer
    #[default]
    Text,
    /// JSON object tagged with the puzzle name
    Json,
}

/// Writer shared by all formatters
pub type OutputWriter = Box<dyn Write + Send + Sync>;

/// Open `path` for writing, or stdout when `None`
pub fn open_writer(path: Option<&Path>) -> Result<OutputWriter> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                CliError::OutputError(format!("cannot create {}: {e}", path.display()))
            })?;
            log::debug!("writing output to {}", path.display());
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Build the formatter for `format` on top of `writer`
pub fn create_formatter(format: OutputFormat, writer: OutputWriter) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
    }
}
