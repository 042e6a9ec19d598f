//! Line source abstraction
//!
//! Produces a lazy, finite sequence of lines from a file, standard input, an
//! arbitrary reader or in-memory text. Restarting means opening a new source.

use crate::error::{Result, SolveError};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};

/// Conventional input file name used when no path is given
pub const DEFAULT_INPUT: &str = "input";

/// Path that selects standard input
pub const STDIN_PATH: &str = "-";

/// A single line of input and its 1-based position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    /// 1-based ordinal of the line
    pub number: usize,
    /// Line text without its terminator
    pub text: String,
}

/// Lazy line producer
pub struct LineSource {
    reader: Box<dyn BufRead>,
    origin: String,
    next_number: usize,
}

impl std::fmt::Debug for LineSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineSource")
            .field("origin", &self.origin)
            .field("next_number", &self.next_number)
            .finish()
    }
}

impl LineSource {
    /// Open a path, falling back to [`DEFAULT_INPUT`] when `path` is `None`.
    ///
    /// `-` reads standard input.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_INPUT));
        if path == Path::new(STDIN_PATH) {
            return Ok(Self::stdin());
        }

        let file = File::open(path).map_err(|source| SolveError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("opened input {}", path.display());

        Ok(Self::with_origin(
            BufReader::new(file),
            path.display().to_string(),
        ))
    }

    /// Read standard input
    pub fn stdin() -> Self {
        Self::with_origin(BufReader::new(io::stdin()), "<stdin>".to_string())
    }

    /// Read from any buffered reader
    pub fn from_reader<R: BufRead + 'static>(reader: R) -> Self {
        Self::with_origin(reader, "<reader>".to_string())
    }

    /// Read from in-memory text
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Self::with_origin(Cursor::new(text.into()), "<text>".to_string())
    }

    fn with_origin<R: BufRead + 'static>(reader: R, origin: String) -> Self {
        Self {
            reader: Box::new(reader),
            origin,
            next_number: 1,
        }
    }

    /// Human-readable description of where the lines come from
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Resolve the path [`LineSource::open`] would use
    pub fn resolve_path(path: Option<&Path>) -> PathBuf {
        path.map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
    }
}

impl Iterator for LineSource {
    type Item = Result<InputLine>;

    fn next(&mut self) -> Option<Self::Item> {
        let number = self.next_number;
        let mut text = String::new();

        match self.reader.read_line(&mut text) {
            Ok(0) => None,
            Ok(_) => {
                if text.ends_with('\n') {
                    text.pop();
                    if text.ends_with('\r') {
                        text.pop();
                    }
                }
                self.next_number += 1;
                Some(Ok(InputLine { number, text }))
            }
            Err(source) => Some(Err(SolveError::Read { number, source })),
        }
    }
}
