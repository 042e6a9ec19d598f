//! CLI command implementations

use clap::Subcommand;

pub mod generate_config;
pub mod list;
pub mod solve;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Solve one puzzle from a line-oriented input
    Solve(solve::SolveArgs),

    /// List the available puzzles
    List(list::ListArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Load and validate a configuration file
    Validate(validate::ValidateArgs),
}
