//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use sift_core::config::defaults;
use sift_core::{CraneModel, SolveConfig, SolveConfigBuilder, StrategyColumn, DEFAULT_INPUT};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Solver configuration
    #[serde(default)]
    pub solve: SolveSection,
}

/// Input-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Input file used when the command line names none
    pub default_path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            default_path: PathBuf::from(DEFAULT_INPUT),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,
}

/// Solver knobs, mirrored onto [`SolveConfig`]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolveSection {
    /// Number of largest calorie groups to sum
    pub top_k: usize,

    /// Distinct-character window length
    pub window: usize,

    /// Meaning of the strategy guide's second column
    pub strategy: StrategyColumn,

    /// Crane model for the stack simulator
    pub crane: CraneModel,

    /// Whether digit words count as calibration digits
    pub spelled_digits: bool,
}

impl Default for SolveSection {
    fn default() -> Self {
        Self {
            top_k: defaults::TOP_K,
            window: defaults::WINDOW,
            strategy: StrategyColumn::default(),
            crane: CraneModel::default(),
            spelled_digits: defaults::SPELLED_DIGITS,
        }
    }
}

impl SolveSection {
    /// Builder preloaded with the file values; command-line flags go on top
    pub fn builder(&self) -> SolveConfigBuilder {
        SolveConfig::builder()
            .top_k(self.top_k)
            .window(self.window)
            .strategy(self.strategy)
            .crane(self.crane)
            .spelled_digits(self.spelled_digits)
    }
}

impl CliConfig {
    /// Load and parse a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CliError::ConfigNotFound(path.display().to_string()),
            _ => CliError::ConfigError(format!("cannot read {}: {e}", path.display())),
        })?;
        let config = Self::from_toml(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, otherwise use the built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse configuration text and check the solver values
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig = toml::from_str(content)?;
        config.solve.builder().build()?;
        Ok(config)
    }
}
