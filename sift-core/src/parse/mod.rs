//! Per-problem line parsers
//!
//! Every parser is pure: the same line always yields the same outcome, and
//! the only state a parser consults is the immutable table it was built with.

mod fixed_column;
mod half_split;
mod numeric;
mod word_pair;

pub use fixed_column::FixedColumnParser;
pub use half_split::HalfSplitParser;
pub use numeric::{Numbers, NumericTokenParser};
pub use word_pair::{SymbolTable, WordPairParser, Words};

use crate::error::LineError;

/// Tagged outcome of a successful parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome<T> {
    /// The line carried a value
    Value(T),
    /// Nothing to parse: a skip, group boundary or section boundary
    Blank,
}

impl<T> LineOutcome<T> {
    /// Whether this outcome is [`LineOutcome::Blank`]
    pub fn is_blank(&self) -> bool {
        matches!(self, LineOutcome::Blank)
    }

    /// Convert into an `Option`, dropping the blank signal
    pub fn into_value(self) -> Option<T> {
        match self {
            LineOutcome::Value(value) => Some(value),
            LineOutcome::Blank => None,
        }
    }
}

/// Parses one line into a problem-specific value
pub trait LineParser {
    /// Parsed value, possibly borrowing from the line
    type Output<'a>;

    /// Parse a single line
    fn parse<'a>(&self, line: &'a str) -> Result<LineOutcome<Self::Output<'a>>, LineError>;
}
