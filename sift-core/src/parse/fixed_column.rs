//! Fixed-width column extraction for crate-stack drawings

use super::{LineOutcome, LineParser};
use crate::error::LineError;
use smallvec::SmallVec;

/// Width of one drawn cell, e.g. `"[Z] "`
const CELL_WIDTH: usize = 4;
/// Offset of the payload character inside a cell
const CELL_OFFSET: usize = 1;

/// Extracts the character at columns 1, 5, 9, ... of a right-trimmed line
///
/// A space in the output means the column is empty on this row. An empty
/// output is reported as [`LineOutcome::Blank`], the section boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedColumnParser;

impl LineParser for FixedColumnParser {
    type Output<'a> = SmallVec<[char; 16]>;

    fn parse<'a>(&self, line: &'a str) -> Result<LineOutcome<Self::Output<'a>>, LineError> {
        let cells: SmallVec<[char; 16]> = line
            .trim_end()
            .chars()
            .skip(CELL_OFFSET)
            .step_by(CELL_WIDTH)
            .collect();

        if cells.is_empty() {
            Ok(LineOutcome::Blank)
        } else {
            Ok(LineOutcome::Value(cells))
        }
    }
}
