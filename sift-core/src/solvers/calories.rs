//! Calorie counting: the largest group sums

use crate::error::{LineError, Result, SolveError};
use crate::parse::{LineOutcome, LineParser, NumericTokenParser};
use crate::pipeline::Accumulator;
use serde::Serialize;
use std::fmt;

/// The `k` largest values seen so far, in descending order
///
/// Equal values are all kept; nothing is deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopK {
    k: usize,
    values: Vec<u64>,
}

impl TopK {
    /// Track the `k` largest values
    pub fn new(k: usize) -> Self {
        Self {
            k,
            values: Vec::new(),
        }
    }

    /// Offer a value; it is kept only if it ranks among the top `k`
    pub fn insert(&mut self, value: u64) {
        let position = self.values.partition_point(|&kept| kept >= value);
        if position < self.k {
            self.values.insert(position, value);
            self.values.truncate(self.k);
        }
    }

    /// Kept values, largest first
    pub fn values(&self) -> &[u64] {
        &self.values
    }
}

/// Answer of the calorie tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalorieAnswer {
    /// Largest group sums, largest first
    pub top: Vec<u64>,
    /// Sum of `top`
    pub total: u64,
}

impl fmt::Display for CalorieAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.top.is_empty() {
            return write!(f, "{}", self.total);
        }

        let terms: Vec<String> = self.top.iter().map(u64::to_string).collect();
        write!(f, "{} = {}", terms.join(" + "), self.total)
    }
}

/// Sums numeric lines per blank-separated group and keeps the top `k` sums
#[derive(Debug, Clone)]
pub struct TopKTracker {
    parser: NumericTokenParser,
    top: TopK,
    running: u64,
    group_len: usize,
}

impl TopKTracker {
    /// Create a tracker keeping the `k` largest group sums
    pub fn new(k: usize) -> Self {
        Self {
            parser: NumericTokenParser::new(),
            top: TopK::new(k),
            running: 0,
            group_len: 0,
        }
    }

    fn end_group(&mut self) {
        if self.group_len == 0 {
            return;
        }
        log::trace!("group of {} lines sums to {}", self.group_len, self.running);
        self.top.insert(self.running);
        self.running = 0;
        self.group_len = 0;
    }
}

impl Accumulator for TopKTracker {
    type Answer = CalorieAnswer;

    fn step(&mut self, line: &str) -> std::result::Result<(), LineError> {
        if line.trim().is_empty() {
            self.end_group();
            return Ok(());
        }

        match self.parser.parse(line)? {
            LineOutcome::Value(numbers) if numbers.len() == 1 => {
                self.running = self
                    .running
                    .checked_add(numbers[0])
                    .ok_or(LineError::SumOverflow)?;
                self.group_len += 1;
                Ok(())
            }
            LineOutcome::Value(numbers) => Err(LineError::TokenCount {
                expected: 1,
                found: numbers.len(),
            }),
            LineOutcome::Blank => Err(LineError::TokenCount {
                expected: 1,
                found: 0,
            }),
        }
    }

    fn finalize(mut self) -> Result<CalorieAnswer> {
        self.end_group();

        let top = self.top.values().to_vec();
        let total = top
            .iter()
            .try_fold(0u64, |sum, &value| sum.checked_add(value))
            .ok_or_else(|| {
                SolveError::AnswerOverflow(format!("sum of the top {} groups", top.len()))
            })?;
        Ok(CalorieAnswer { top, total })
    }
}
