//! Streaming line-oriented puzzle solvers
//!
//! Every puzzle reads a text input one line at a time and folds each line
//! into a small accumulator, so the input is never held in memory as a whole.
//! A run is split into three stages:
//! - **Source**: [`LineSource`] yields numbered lines from a file or stdin
//! - **Parsers**: [`parse`] turns a line into a typed value or a blank marker
//! - **Accumulators**: [`solvers`] fold parsed lines into an [`Answer`]
//!
//! # Example
//!
//! ```rust
//! use sift_core::{LineSource, Puzzle, SolveConfig};
//!
//! let input = "1000\n2000\n\n4000\n\n5000\n6000\n";
//! let config = SolveConfig::builder().top_k(1).build().unwrap();
//!
//! let answer = Puzzle::CalorieCounting
//!     .solve(LineSource::from_text(input), &config)
//!     .unwrap();
//!
//! assert_eq!(answer.to_string(), "11000 = 11000");
//! ```

pub mod answer;
pub mod config;
pub mod error;
pub mod parse;
pub mod pipeline;
pub mod puzzle;
pub mod solvers;
pub mod source;

pub use answer::Answer;
pub use config::{CraneModel, SolveConfig, SolveConfigBuilder, StrategyColumn};
pub use error::{LineError, Result, SolveError};
pub use parse::{LineOutcome, LineParser};
pub use pipeline::{run, Accumulator};
pub use puzzle::Puzzle;
pub use source::{InputLine, LineSource, DEFAULT_INPUT, STDIN_PATH};
