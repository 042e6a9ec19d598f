//! Error handling for the CLI application

use std::fmt;

/// CLI-specific failures; everything else travels as `anyhow::Error`
#[derive(Debug)]
pub enum CliError {
    /// Configuration file does not exist
    ConfigNotFound(String),
    /// Configuration file could not be read or parsed, or holds invalid values
    ConfigError(String),
    /// Output destination could not be written
    OutputError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigNotFound(path) => write!(f, "Configuration file not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::OutputError(msg) => write!(f, "Output error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
