//! Layered error types
//!
//! `LineError` describes why a single line was rejected. `SolveError` is the
//! run-level error: it carries the line number for line failures and covers
//! input and configuration problems.

use std::path::PathBuf;
use thiserror::Error;

/// Line-level errors raised by parsers and accumulator steps
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// A half-split line has an odd number of characters
    #[error("imbalanced halves: line length {len} is odd")]
    ImbalancedInput {
        /// Length of the trimmed line
        len: usize,
    },

    /// A symbolic token missing from the lookup table
    #[error("unknown token '{0}'")]
    UnknownToken(String),

    /// A character outside the item alphabet
    #[error("invalid item type '{0}'")]
    InvalidItemType(char),

    /// A numeric token that does not fit the target integer type
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// Wrong number of tokens on the line
    #[error("expected {expected} tokens, found {found}")]
    TokenCount {
        /// Number of tokens the grammar requires
        expected: usize,
        /// Number of tokens present on the line
        found: usize,
    },

    /// The intersected item set does not hold exactly one item
    #[error("expected exactly one shared item, found {found}")]
    NoSingleSharedItem {
        /// Size of the intersection
        found: u32,
    },

    /// A calibration line without any digit
    #[error("no digit found")]
    NoDigit,

    /// A crane move that cannot be applied to the current stacks
    #[error("invalid move: {0}")]
    InvalidMove(String),

    /// A running sum no longer fits in `u64`
    #[error("sum overflows u64")]
    SumOverflow,
}

/// Run-level errors
#[derive(Error, Debug)]
pub enum SolveError {
    /// The input path cannot be opened
    #[error("cannot open input {}: {source}", path.display())]
    SourceUnavailable {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reading failed after the source was opened
    #[error("failed to read line {number}: {source}")]
    Read {
        /// 1-based number of the line being read
        number: usize,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A line violates the puzzle grammar
    #[error("line {number}: {source} (in {text:?})")]
    MalformedLine {
        /// 1-based line number
        number: usize,
        /// Raw line text
        text: String,
        /// What was wrong with it
        #[source]
        source: LineError,
    },

    /// Invalid solve configuration
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The final answer does not fit its integer type
    #[error("answer overflows: {0}")]
    AnswerOverflow(String),
}

/// Result type for solve operations
pub type Result<T> = std::result::Result<T, SolveError>;
