//! Puzzle catalogue and dispatch

use crate::answer::Answer;
use crate::config::SolveConfig;
use crate::error::{Result, SolveError};
use crate::pipeline::run;
use crate::solvers::{
    CalibrationDigitExtractor, CrateStackSimulator, DistinctWindowFinder, RangeOverlapCounter,
    RockPaperScissorsScorer, RucksackIntersector, TopKTracker,
};
use crate::source::LineSource;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every supported puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Puzzle {
    CalorieCounting,
    RockPaperScissors,
    Rucksack,
    CampCleanup,
    SupplyStacks,
    TuningTrouble,
    Trebuchet,
}

impl Puzzle {
    /// All puzzles in calendar order
    pub const ALL: [Puzzle; 7] = [
        Puzzle::CalorieCounting,
        Puzzle::RockPaperScissors,
        Puzzle::Rucksack,
        Puzzle::CampCleanup,
        Puzzle::SupplyStacks,
        Puzzle::TuningTrouble,
        Puzzle::Trebuchet,
    ];

    /// Command-line name
    pub fn name(self) -> &'static str {
        match self {
            Puzzle::CalorieCounting => "calorie-counting",
            Puzzle::RockPaperScissors => "rock-paper-scissors",
            Puzzle::Rucksack => "rucksack",
            Puzzle::CampCleanup => "camp-cleanup",
            Puzzle::SupplyStacks => "supply-stacks",
            Puzzle::TuningTrouble => "tuning-trouble",
            Puzzle::Trebuchet => "trebuchet",
        }
    }

    /// Puzzle title as published
    pub fn title(self) -> &'static str {
        match self {
            Puzzle::CalorieCounting => "Calorie Counting",
            Puzzle::RockPaperScissors => "Rock Paper Scissors",
            Puzzle::Rucksack => "Rucksack Reorganization",
            Puzzle::CampCleanup => "Camp Cleanup",
            Puzzle::SupplyStacks => "Supply Stacks",
            Puzzle::TuningTrouble => "Tuning Trouble",
            Puzzle::Trebuchet => "Trebuchet?!",
        }
    }

    /// `(year, day)` of the puzzle
    pub fn date(self) -> (u16, u8) {
        match self {
            Puzzle::CalorieCounting => (2022, 1),
            Puzzle::RockPaperScissors => (2022, 2),
            Puzzle::Rucksack => (2022, 3),
            Puzzle::CampCleanup => (2022, 4),
            Puzzle::SupplyStacks => (2022, 5),
            Puzzle::TuningTrouble => (2022, 6),
            Puzzle::Trebuchet => (2023, 1),
        }
    }

    /// Banner line, e.g. `--- 2022 Day 1: Calorie Counting ---`
    pub fn banner(self) -> String {
        let (year, day) = self.date();
        format!("--- {} Day {}: {} ---", year, day, self.title())
    }

    /// Run this puzzle's accumulator over `source`
    pub fn solve(self, source: LineSource, config: &SolveConfig) -> Result<Answer> {
        log::info!("{}", self.banner());

        let answer = match self {
            Puzzle::CalorieCounting => {
                Answer::CalorieCounting(run(source, TopKTracker::new(config.top_k()))?)
            }
            Puzzle::RockPaperScissors => Answer::RockPaperScissors(run(
                source,
                RockPaperScissorsScorer::new(config.strategy()),
            )?),
            Puzzle::Rucksack => Answer::Rucksack(run(source, RucksackIntersector::new())?),
            Puzzle::CampCleanup => Answer::CampCleanup(run(source, RangeOverlapCounter::new())?),
            Puzzle::SupplyStacks => {
                Answer::SupplyStacks(run(source, CrateStackSimulator::new(config.crane()))?)
            }
            Puzzle::TuningTrouble => {
                Answer::TuningTrouble(run(source, DistinctWindowFinder::new(config.window()))?)
            }
            Puzzle::Trebuchet => Answer::Trebuchet(run(
                source,
                CalibrationDigitExtractor::new(config.spelled_digits()),
            )?),
        };

        Ok(answer)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Puzzle {
    type Err = SolveError;

    /// Accepts the command-line name or `<year>-<day>`, e.g. `2022-05`
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();

        Puzzle::ALL
            .into_iter()
            .find(|puzzle| {
                let (year, day) = puzzle.date();
                puzzle.name() == wanted
                    || format!("{year}-{day:02}") == wanted
                    || format!("{year}-{day}") == wanted
            })
            .ok_or_else(|| SolveError::Configuration(format!("unknown puzzle '{s}'")))
    }
}
