//! Sift CLI library
//!
//! This library provides the command-line interface for the sift
//! line-oriented puzzle solvers.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use cli::Cli;
pub use error::{CliError, CliResult};
