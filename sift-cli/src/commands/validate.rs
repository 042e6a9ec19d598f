//! Validate command implementation

use crate::config::CliConfig;
use anyhow::{anyhow, Result};
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Configuration file to validate (default: the global --config file)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self, global: Option<&Path>) -> Result<()> {
        let path = self
            .file
            .as_deref()
            .or(global)
            .ok_or_else(|| anyhow!("No configuration file given (pass FILE or --config)"))?;

        println!("Validating configuration: {}", path.display());

        match CliConfig::load(path) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Input:    {}", config.input.default_path.display());
                println!("  Format:   {:?}", config.output.default_format);
                println!(
                    "  Solve:    top_k={} window={} strategy={:?} crane={:?} spelled_digits={}",
                    config.solve.top_k,
                    config.solve.window,
                    config.solve.strategy,
                    config.solve.crane,
                    config.solve.spelled_digits
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow!("Validation failed: {}", e))
            }
        }
    }
}
