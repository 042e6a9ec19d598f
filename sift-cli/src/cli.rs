//! Top-level argument parser and dispatch

use crate::commands::Commands;
use crate::config::CliConfig;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Streaming solvers for line-oriented puzzle inputs
#[derive(Debug, Parser)]
#[command(name = "sift", version, propagate_version = true)]
pub struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, value_name = "FILE", env = "SIFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Run the selected command
    pub fn run(self) -> Result<()> {
        self.init_logging();

        match &self.command {
            Commands::Solve(args) => {
                let config = CliConfig::load_or_default(self.config.as_deref())?;
                args.execute(&config)
            }
            Commands::List(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(self.config.as_deref()),
        }
    }

    /// Log filter for the verbosity count; `RUST_LOG` still wins
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level()),
        )
        .try_init();
    }
}
