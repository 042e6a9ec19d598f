//! Midpoint splitting

use super::{LineOutcome, LineParser};
use crate::error::LineError;

/// Splits a trimmed line into two equal halves
#[derive(Debug, Clone, Copy, Default)]
pub struct HalfSplitParser;

impl LineParser for HalfSplitParser {
    type Output<'a> = (&'a str, &'a str);

    fn parse<'a>(&self, line: &'a str) -> Result<LineOutcome<Self::Output<'a>>, LineError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(LineOutcome::Blank);
        }

        let len = line.len();
        if len % 2 != 0 || !line.is_char_boundary(len / 2) {
            return Err(LineError::ImbalancedInput { len });
        }

        Ok(LineOutcome::Value(line.split_at(len / 2)))
    }
}
