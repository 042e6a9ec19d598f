//! Trebuchet calibration: first and last digit of every line

use crate::error::{LineError, Result};
use crate::pipeline::Accumulator;
use serde::Serialize;
use std::fmt;

const LITERAL_DIGITS: [(&str, u8); 10] = [
    ("0", 0),
    ("1", 1),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
];

const SPELLED_DIGITS: [(&str, u8); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

/// Ordered digit patterns; on equal offsets the earlier entry wins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitTable {
    patterns: Vec<(&'static str, u8)>,
}

impl DigitTable {
    /// Literal digits only
    pub fn literal() -> Self {
        Self {
            patterns: LITERAL_DIGITS.to_vec(),
        }
    }

    /// Literal digits followed by the words `one` to `nine`
    pub fn with_spelled_out() -> Self {
        let mut table = Self::literal();
        table.patterns.extend_from_slice(&SPELLED_DIGITS);
        table
    }

    fn match_at(&self, line: &str, offset: usize) -> Option<u8> {
        let rest = &line[offset..];
        self.patterns
            .iter()
            .find(|(pattern, _)| rest.starts_with(pattern))
            .map(|&(_, value)| value)
    }

    /// Digit starting at the smallest offset
    pub fn first(&self, line: &str) -> Option<u8> {
        line.char_indices()
            .find_map(|(offset, _)| self.match_at(line, offset))
    }

    /// Digit starting at the largest offset
    ///
    /// Matches may overlap the first one, e.g. `eightwo` ends in `two`.
    pub fn last(&self, line: &str) -> Option<u8> {
        line.char_indices()
            .rev()
            .find_map(|(offset, _)| self.match_at(line, offset))
    }

    /// `first * 10 + last`, or `None` when the line has no digit
    pub fn calibration_value(&self, line: &str) -> Option<u32> {
        let first = self.first(line)?;
        let last = self.last(line)?;
        Some(u32::from(first) * 10 + u32::from(last))
    }
}

/// Sum of all calibration values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalibrationAnswer {
    pub sum: u64,
}

impl fmt::Display for CalibrationAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sum of calibration values: {}", self.sum)
    }
}

/// Sums the calibration value of every non-blank line
#[derive(Debug, Clone)]
pub struct CalibrationDigitExtractor {
    table: DigitTable,
    sum: u64,
}

impl CalibrationDigitExtractor {
    /// Create an extractor; `spelled_out` enables the digit words
    pub fn new(spelled_out: bool) -> Self {
        let table = if spelled_out {
            DigitTable::with_spelled_out()
        } else {
            DigitTable::literal()
        };
        Self::with_table(table)
    }

    pub fn with_table(table: DigitTable) -> Self {
        Self { table, sum: 0 }
    }
}

impl Accumulator for CalibrationDigitExtractor {
    type Answer = CalibrationAnswer;

    fn step(&mut self, line: &str) -> std::result::Result<(), LineError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        let value = self
            .table
            .calibration_value(line)
            .ok_or(LineError::NoDigit)?;
        log::trace!("{value} | {line}");
        self.sum += u64::from(value);
        Ok(())
    }

    fn finalize(self) -> Result<CalibrationAnswer> {
        Ok(CalibrationAnswer { sum: self.sum })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::run;
    use crate::source::LineSource;

    #[test]
    fn test_spelled_out_values() {
        let table = DigitTable::with_spelled_out();

        assert_eq!(table.calibration_value("two1nine"), Some(29));
        assert_eq!(table.calibration_value("eightwothree"), Some(83));
        assert_eq!(table.calibration_value("zoneight234"), Some(14));
        assert_eq!(table.calibration_value("7pqrstsixteen"), Some(76));
    }

    #[test]
    fn test_overlapping_words() {
        let table = DigitTable::with_spelled_out();

        assert_eq!(table.calibration_value("eightwo"), Some(82));
        assert_eq!(table.calibration_value("oneight"), Some(18));
    }

    #[test]
    fn test_single_digit_counts_twice() {
        assert_eq!(DigitTable::literal().calibration_value("treb7uchet"), Some(77));
    }

    #[test]
    fn test_literal_table_ignores_words() {
        let table = DigitTable::literal();

        assert_eq!(table.calibration_value("two1nine"), Some(11));
        assert_eq!(table.calibration_value("eightwothree"), None);
    }

    #[test]
    fn test_literal_sample() {
        let input = "1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet\n";
        let answer = run(
            LineSource::from_text(input),
            CalibrationDigitExtractor::new(false),
        )
        .unwrap();
        assert_eq!(answer.sum, 142);
    }

    #[test]
    fn test_spelled_out_sample() {
        let input = "two1nine\neightwothree\nabcone2threexyz\nxtwone3four\n4nineeightseven2\nzoneight234\n7pqrstsixteen\n";
        let answer = run(
            LineSource::from_text(input),
            CalibrationDigitExtractor::new(true),
        )
        .unwrap();

        assert_eq!(answer.sum, 281);
        assert_eq!(answer.to_string(), "Sum of calibration values: 281");
    }

    #[test]
    fn test_line_without_digit() {
        let mut extractor = CalibrationDigitExtractor::new(true);
        assert_eq!(extractor.step("abcdef"), Err(LineError::NoDigit));
        assert_eq!(extractor.step(""), Ok(()));
    }
}
