//! Generate config command implementation

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use sift_core::config::defaults;
use sift_core::DEFAULT_INPUT;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            return Err(CliError::OutputError(format!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            ))
            .into());
        }

        fs::write(&self.output, generate_template()).map_err(|e| {
            CliError::OutputError(format!("failed to write {}: {e}", self.output.display()))
        })?;

        println!(
            "✓ Configuration template written to {}",
            self.output.display()
        );
        println!();
        println!("Next steps:");
        println!("1. Edit the values you want to change");
        println!("2. Validate it:    sift validate {}", self.output.display());
        println!(
            "3. Use it to solve: sift -c {} solve calorie-counting",
            self.output.display()
        );

        Ok(())
    }
}

/// Commented configuration holding the built-in defaults
pub fn generate_template() -> String {
    format!(
        r#"# sift configuration
#
# Command-line flags take precedence over the values below.

[input]
# Input file used when `solve` is given none ("-" reads stdin)
default_path = "{input}"

[output]
# "text" or "json"
default_format = "text"

[solve]
# Number of largest calorie groups to sum
top_k = {top_k}

# Length of the distinct-character window
# (4 finds the start-of-packet marker, 14 the start-of-message marker)
window = {window}

# Meaning of the strategy guide's second column: "gesture" or "outcome"
strategy = "gesture"

# Crane model: "bulk" keeps a moved batch in order, "one-at-a-time" reverses it
crane = "bulk"

# Count the words one..nine as calibration digits
spelled_digits = {spelled}
"#,
        input = DEFAULT_INPUT,
        top_k = defaults::TOP_K,
        window = defaults::WINDOW,
        spelled = defaults::SPELLED_DIGITS,
    )
}
