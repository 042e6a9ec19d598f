//! Camp cleanup: containing and overlapping section ranges

use crate::error::{LineError, Result};
use crate::parse::{LineOutcome, LineParser, NumericTokenParser};
use crate::pipeline::Accumulator;
use serde::Serialize;
use std::fmt;

/// Counts of range pairs that contain or overlap each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverlapAnswer {
    /// Pairs where one range fully contains the other
    pub contain: u64,
    /// Pairs sharing at least one section
    pub overlap: u64,
}

impl fmt::Display for OverlapAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.contain, self.overlap)
    }
}

/// Whether one of `[s1, e1]`, `[s2, e2]` contains the other
///
/// Equivalent to `s1 >= s2 && e1 <= e2 || s2 >= s1 && e2 <= e1`.
pub fn contains(s1: u64, e1: u64, s2: u64, e2: u64) -> bool {
    (s1.cmp(&s2) as i32) * (e1.cmp(&e2) as i32) <= 0
}

/// Whether `[s1, e1]` and `[s2, e2]` share a section
pub fn overlaps(s1: u64, e1: u64, s2: u64, e2: u64) -> bool {
    s1 <= e2 && s2 <= e1
}

/// Counts containing and overlapping range pairs, one pair per line
#[derive(Debug, Clone, Default)]
pub struct RangeOverlapCounter {
    parser: NumericTokenParser,
    contain: u64,
    overlap: u64,
}

impl RangeOverlapCounter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator for RangeOverlapCounter {
    type Answer = OverlapAnswer;

    fn step(&mut self, line: &str) -> std::result::Result<(), LineError> {
        let numbers = match self.parser.parse(line)? {
            LineOutcome::Value(numbers) => numbers,
            LineOutcome::Blank => return Ok(()),
        };

        let &[s1, e1, s2, e2] = numbers.as_slice() else {
            return Err(LineError::TokenCount {
                expected: 4,
                found: numbers.len(),
            });
        };

        if contains(s1, e1, s2, e2) {
            self.contain += 1;
        }
        if overlaps(s1, e1, s2, e2) {
            self.overlap += 1;
        }

        Ok(())
    }

    fn finalize(self) -> Result<OverlapAnswer> {
        Ok(OverlapAnswer {
            contain: self.contain,
            overlap: self.overlap,
        })
    }
}
