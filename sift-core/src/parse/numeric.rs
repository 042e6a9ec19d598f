//! Integer token extraction

use super::{LineOutcome, LineParser};
use crate::error::LineError;
use regex::Regex;
use smallvec::SmallVec;

/// Integer tokens of one line, inline for the common short case
pub type Numbers = SmallVec<[u64; 4]>;

/// Extracts every unsigned integer token from a line
#[derive(Debug, Clone)]
pub struct NumericTokenParser {
    pattern: Regex,
}

impl NumericTokenParser {
    /// Create a parser; the token pattern is compiled once here
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"\d+").expect("static pattern is valid"),
        }
    }
}

impl Default for NumericTokenParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser for NumericTokenParser {
    type Output<'a> = Numbers;

    fn parse<'a>(&self, line: &'a str) -> Result<LineOutcome<Self::Output<'a>>, LineError> {
        let mut numbers = Numbers::new();
        for token in self.pattern.find_iter(line) {
            let value = token
                .as_str()
                .parse::<u64>()
                .map_err(|_| LineError::InvalidNumber(token.as_str().to_string()))?;
            numbers.push(value);
        }

        if numbers.is_empty() {
            Ok(LineOutcome::Blank)
        } else {
            Ok(LineOutcome::Value(numbers))
        }
    }
}
