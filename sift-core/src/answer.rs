//! Final answers of every puzzle
//!
//! `Display` renders the puzzle's textual output; `Serialize` produces the
//! structured form, tagged with the puzzle name.

use crate::puzzle::Puzzle;
use crate::solvers::{
    CalibrationAnswer, CalorieAnswer, MarkerAnswer, OverlapAnswer, RucksackAnswer, ScoreAnswer,
    StackTopsAnswer,
};
use serde::Serialize;
use std::fmt;

/// Answer of one solved puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "puzzle", rename_all = "kebab-case")]
pub enum Answer {
    CalorieCounting(CalorieAnswer),
    RockPaperScissors(ScoreAnswer),
    Rucksack(RucksackAnswer),
    CampCleanup(OverlapAnswer),
    SupplyStacks(StackTopsAnswer),
    TuningTrouble(MarkerAnswer),
    Trebuchet(CalibrationAnswer),
}

impl Answer {
    /// Puzzle this answer belongs to
    pub fn puzzle(&self) -> Puzzle {
        match self {
            Answer::CalorieCounting(_) => Puzzle::CalorieCounting,
            Answer::RockPaperScissors(_) => Puzzle::RockPaperScissors,
            Answer::Rucksack(_) => Puzzle::Rucksack,
            Answer::CampCleanup(_) => Puzzle::CampCleanup,
            Answer::SupplyStacks(_) => Puzzle::SupplyStacks,
            Answer::TuningTrouble(_) => Puzzle::TuningTrouble,
            Answer::Trebuchet(_) => Puzzle::Trebuchet,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::CalorieCounting(answer) => fmt::Display::fmt(answer, f),
            Answer::RockPaperScissors(answer) => fmt::Display::fmt(answer, f),
            Answer::Rucksack(answer) => fmt::Display::fmt(answer, f),
            Answer::CampCleanup(answer) => fmt::Display::fmt(answer, f),
            Answer::SupplyStacks(answer) => fmt::Display::fmt(answer, f),
            Answer::TuningTrouble(answer) => fmt::Display::fmt(answer, f),
            Answer::Trebuchet(answer) => fmt::Display::fmt(answer, f),
        }
    }
}
