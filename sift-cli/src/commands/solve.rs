//! Solve command implementation

use crate::config::CliConfig;
use crate::input::{open_source, resolve_input};
use crate::output::{create_formatter, open_writer, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use sift_core::{CraneModel, Puzzle, SolveConfig, StrategyColumn};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the solve command
#[derive(Debug, Args)]
pub struct SolveArgs {
    /// Puzzle to solve, by name (`supply-stacks`) or date (`2022-05`)
    #[arg(value_name = "PUZZLE")]
    pub puzzle: Puzzle,

    /// Input file; `-` reads stdin [default: input]
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the elapsed solve time to stderr
    #[arg(long)]
    pub timed: bool,

    /// Number of largest calorie groups to sum
    #[arg(long, value_name = "K")]
    pub top: Option<usize>,

    /// Meaning of the strategy guide's second column
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// How the crane moves a batch of crates
    #[arg(long, value_enum)]
    pub crane: Option<CraneArg>,

    /// Length of the distinct-character window
    #[arg(long, value_name = "N")]
    pub window: Option<usize>,

    /// Only count literal digits as calibration digits
    #[arg(long)]
    pub digits_only: bool,
}

/// Strategy guide interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyArg {
    /// Second column is the gesture to play
    Gesture,
    /// Second column is the outcome to reach
    Outcome,
}

impl From<StrategyArg> for StrategyColumn {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Gesture => StrategyColumn::Gesture,
            StrategyArg::Outcome => StrategyColumn::Outcome,
        }
    }
}

/// Crane model
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CraneArg {
    /// Move a batch at once, keeping its order
    Bulk,
    /// Move crates one by one, reversing the batch
    OneAtATime,
}

impl From<CraneArg> for CraneModel {
    fn from(arg: CraneArg) -> Self {
        match arg {
            CraneArg::Bulk => CraneModel::Bulk,
            CraneArg::OneAtATime => CraneModel::OneAtATime,
        }
    }
}

impl SolveArgs {
    /// Execute the solve command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        log::debug!("Arguments: {:?}", self);

        let solve_config = self.solve_config(config)?;
        let input = resolve_input(self.input.as_deref(), &config.input);
        let format = self.format.unwrap_or(config.output.default_format);

        let source = open_source(&input)?;
        let started = Instant::now();
        let answer = self
            .puzzle
            .solve(source, &solve_config)
            .with_context(|| format!("Failed to solve {} from {}", self.puzzle, input.display()))?;
        let elapsed = started.elapsed();

        let mut formatter = create_formatter(format, open_writer(self.output.as_deref())?);
        formatter.write_answer(&answer)?;
        formatter.finish()?;

        if self.timed {
            eprintln!("{} solved in {:.3?}", self.puzzle, elapsed);
        }
        log::info!("{} finished in {:?}", self.puzzle, elapsed);

        Ok(())
    }

    /// Merge flags over the file configuration
    pub fn solve_config(&self, config: &CliConfig) -> Result<SolveConfig> {
        let mut builder = config.solve.builder();

        if let Some(k) = self.top {
            builder = builder.top_k(k);
        }
        if let Some(window) = self.window {
            builder = builder.window(window);
        }
        if let Some(strategy) = self.strategy {
            builder = builder.strategy(strategy.into());
        }
        if let Some(crane) = self.crane {
            builder = builder.crane(crane.into());
        }
        if self.digits_only {
            builder = builder.spelled_digits(false);
        }

        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(puzzle: Puzzle) -> SolveArgs {
        SolveArgs {
            puzzle,
            input: None,
            format: None,
            output: None,
            timed: false,
            top: None,
            strategy: None,
            crane: None,
            window: None,
            digits_only: false,
        }
    }

    #[test]
    fn test_file_values_used_without_flags() {
        let mut config = CliConfig::default();
        config.solve.window = 4;
        config.solve.crane = CraneModel::OneAtATime;

        let solve_config = args(Puzzle::TuningTrouble).solve_config(&config).unwrap();
        assert_eq!(solve_config.window(), 4);
        assert_eq!(solve_config.crane(), CraneModel::OneAtATime);
    }

    #[test]
    fn test_flags_override_file() {
        let mut config = CliConfig::default();
        config.solve.top_k = 5;
        config.solve.spelled_digits = true;

        let mut args = args(Puzzle::CalorieCounting);
        args.top = Some(1);
        args.strategy = Some(StrategyArg::Outcome);
        args.digits_only = true;

        let solve_config = args.solve_config(&config).unwrap();
        assert_eq!(solve_config.top_k(), 1);
        assert_eq!(solve_config.strategy(), StrategyColumn::Outcome);
        assert!(!solve_config.spelled_digits());
    }

    #[test]
    fn test_zero_window_flag_rejected() {
        let mut args = args(Puzzle::TuningTrouble);
        args.window = Some(0);

        assert!(args.solve_config(&CliConfig::default()).is_err());
    }
}
