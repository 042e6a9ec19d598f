//! Rock paper scissors strategy guide scoring

use crate::config::StrategyColumn;
use crate::error::{LineError, Result};
use crate::parse::{LineOutcome, LineParser, SymbolTable, WordPairParser};
use crate::pipeline::Accumulator;
use serde::Serialize;
use std::fmt;

/// A hand shape; the discriminant is also its table code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Gesture {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Gesture {
    fn from_code(code: u8) -> Self {
        match code % 3 {
            0 => Gesture::Rock,
            1 => Gesture::Paper,
            _ => Gesture::Scissors,
        }
    }

    /// Result of playing `self` against `theirs`: `(4 + ours - theirs) mod 3`
    pub fn play_against(self, theirs: Gesture) -> Outcome {
        Outcome::from_code((4 + self as u8 - theirs as u8) % 3)
    }

    /// Points for showing this shape
    pub fn shape_score(self) -> u64 {
        1 + self as u64
    }
}

/// A round result; the discriminant is also its table code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Outcome {
    Lose = 0,
    Draw = 1,
    Win = 2,
}

impl Outcome {
    fn from_code(code: u8) -> Self {
        match code % 3 {
            0 => Outcome::Lose,
            1 => Outcome::Draw,
            _ => Outcome::Win,
        }
    }

    /// The gesture that reaches `self` against `theirs`
    pub fn required_gesture(self, theirs: Gesture) -> Gesture {
        Gesture::from_code((2 + self as u8 + theirs as u8) % 3)
    }

    /// Points for this result
    pub fn outcome_score(self) -> u64 {
        3 * self as u64
    }
}

/// Total score of the strategy guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreAnswer {
    pub total_score: u64,
}

impl fmt::Display for ScoreAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.total_score)
    }
}

/// Sums the score of every round in the strategy guide
#[derive(Debug, Clone)]
pub struct RockPaperScissorsScorer {
    parser: WordPairParser,
    strategy: StrategyColumn,
    total_score: u64,
}

impl RockPaperScissorsScorer {
    /// Create a scorer over the standard strategy guide symbols
    pub fn new(strategy: StrategyColumn) -> Self {
        Self::with_table(SymbolTable::strategy_guide(), strategy)
    }

    /// Create a scorer over a custom symbol table
    pub fn with_table(table: SymbolTable, strategy: StrategyColumn) -> Self {
        Self {
            parser: WordPairParser::new(table),
            strategy,
            total_score: 0,
        }
    }

    fn round_score(&self, theirs: Gesture, second: u8) -> u64 {
        let (ours, outcome) = match self.strategy {
            StrategyColumn::Gesture => {
                let ours = Gesture::from_code(second);
                (ours, ours.play_against(theirs))
            }
            StrategyColumn::Outcome => {
                let outcome = Outcome::from_code(second);
                (outcome.required_gesture(theirs), outcome)
            }
        };

        ours.shape_score() + outcome.outcome_score()
    }
}

impl Accumulator for RockPaperScissorsScorer {
    type Answer = ScoreAnswer;

    fn step(&mut self, line: &str) -> std::result::Result<(), LineError> {
        let words = match self.parser.parse(line)? {
            LineOutcome::Value(words) => words,
            LineOutcome::Blank => return Ok(()),
        };

        match words.as_slice() {
            [theirs, second] => {
                self.total_score += self.round_score(Gesture::from_code(*theirs), *second);
                Ok(())
            }
            other => Err(LineError::TokenCount {
                expected: 2,
                found: other.len(),
            }),
        }
    }

    fn finalize(self) -> Result<ScoreAnswer> {
        Ok(ScoreAnswer {
            total_score: self.total_score,
        })
    }
}
