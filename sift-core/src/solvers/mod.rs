//! Per-problem accumulators
//!
//! Each accumulator owns one piece of running state, folds lines into it with
//! [`Accumulator::step`](crate::pipeline::Accumulator::step) and produces a
//! typed answer whose `Display` form is the textual output of the puzzle.

pub mod calibration;
pub mod calories;
pub mod camp_cleanup;
pub mod rock_paper_scissors;
pub mod rucksack;
pub mod supply_stacks;
pub mod tuning;

pub use calibration::{CalibrationAnswer, CalibrationDigitExtractor, DigitTable};
pub use calories::{CalorieAnswer, TopK, TopKTracker};
pub use camp_cleanup::{OverlapAnswer, RangeOverlapCounter};
pub use rock_paper_scissors::{Gesture, Outcome, RockPaperScissorsScorer, ScoreAnswer};
pub use rucksack::{ItemSet, RucksackAnswer, RucksackIntersector};
pub use supply_stacks::{CrateStackSimulator, ParseMode, StackArena, StackTopsAnswer};
pub use tuning::{DistinctWindowFinder, MarkerAnswer};
