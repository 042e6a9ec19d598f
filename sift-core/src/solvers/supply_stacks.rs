//! Supply stacks: a two-phase crate stack simulator
//!
//! The drawing of the initial stacks comes first, then a blank line, then the
//! crane moves. Stacks are kept bottom-to-top in a single owned arena and are
//! only ever addressed by index.

use crate::config::CraneModel;
use crate::error::{LineError, Result};
use crate::parse::{FixedColumnParser, LineOutcome, LineParser, NumericTokenParser};
use crate::pipeline::Accumulator;
use serde::Serialize;
use std::fmt;

/// Which section of the input is being read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Drawing of the initial stacks
    Stacks,
    /// Crane move instructions
    Moves,
}

/// Crate stacks, each ordered bottom-to-top
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackArena {
    stacks: Vec<Vec<char>>,
}

impl StackArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an arena from bottom-to-top stack contents
    pub fn from_stacks<I, S>(stacks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stacks: stacks
                .into_iter()
                .map(|stack| stack.as_ref().chars().collect())
                .collect(),
        }
    }

    /// Number of stacks
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    /// Whether there are no stacks at all
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Put one drawn row underneath everything read so far
    ///
    /// A space cell leaves its stack untouched.
    pub fn add_bottom_layer(&mut self, cells: &[char]) {
        if cells.len() > self.stacks.len() {
            self.stacks.resize_with(cells.len(), Vec::new);
        }
        for (stack, &cell) in self.stacks.iter_mut().zip(cells) {
            if cell != ' ' {
                stack.insert(0, cell);
            }
        }
    }

    /// Move the top `count` crates of stack `from` onto stack `to` (0-based)
    pub fn move_top(
        &mut self,
        count: usize,
        from: usize,
        to: usize,
        crane: CraneModel,
    ) -> std::result::Result<(), LineError> {
        let stacks = self.stacks.len();
        if from >= stacks || to >= stacks {
            return Err(LineError::InvalidMove(format!(
                "stack {} or {} does not exist ({} stacks)",
                from + 1,
                to + 1,
                stacks
            )));
        }

        let available = self.stacks[from].len();
        if count > available {
            return Err(LineError::InvalidMove(format!(
                "cannot move {} crates from stack {} holding {}",
                count,
                from + 1,
                available
            )));
        }

        let mut moved = self.stacks[from].split_off(available - count);
        if crane == CraneModel::OneAtATime {
            moved.reverse();
        }
        self.stacks[to].extend(moved);

        Ok(())
    }

    /// Top crate of every non-empty stack, left to right
    pub fn tops(&self) -> String {
        self.stacks.iter().filter_map(|stack| stack.last()).collect()
    }

    /// Bottom-to-top contents of every stack
    pub fn snapshot(&self) -> Vec<String> {
        self.stacks
            .iter()
            .map(|stack| stack.iter().collect())
            .collect()
    }
}

/// Final arrangement of the stacks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackTopsAnswer {
    /// Concatenated top crates
    pub tops: String,
    /// Bottom-to-top contents of every stack
    pub stacks: Vec<String>,
}

impl fmt::Display for StackTopsAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tops)
    }
}

/// Whether a drawn row is the stack number legend, e.g. ` 1   2   3 `
///
/// Crates are always bracketed, so `[1] [2]` is a row of crates.
fn is_label_row(line: &str) -> bool {
    !line.contains('[') && line.chars().any(|c| c.is_ascii_digit())
}

/// Reads the stack drawing, then applies every crane move
#[derive(Debug, Clone)]
pub struct CrateStackSimulator {
    mode: ParseMode,
    crane: CraneModel,
    columns: FixedColumnParser,
    numbers: NumericTokenParser,
    arena: StackArena,
}

impl CrateStackSimulator {
    pub fn new(crane: CraneModel) -> Self {
        Self {
            mode: ParseMode::Stacks,
            crane,
            columns: FixedColumnParser,
            numbers: NumericTokenParser::new(),
            arena: StackArena::new(),
        }
    }

    /// Current section
    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    fn step_stacks(&mut self, line: &str) -> std::result::Result<(), LineError> {
        match self.columns.parse(line)? {
            LineOutcome::Blank => {
                log::debug!(
                    "stack drawing done: {} stacks, switching to moves",
                    self.arena.len()
                );
                self.mode = ParseMode::Moves;
            }
            LineOutcome::Value(_) if is_label_row(line) => {
                log::trace!("skipping stack label row");
            }
            LineOutcome::Value(cells) => self.arena.add_bottom_layer(&cells),
        }
        Ok(())
    }

    fn step_moves(&mut self, line: &str) -> std::result::Result<(), LineError> {
        let numbers = match self.numbers.parse(line)? {
            LineOutcome::Value(numbers) => numbers,
            LineOutcome::Blank => return Ok(()),
        };

        let &[count, from, to] = numbers.as_slice() else {
            return Err(LineError::TokenCount {
                expected: 3,
                found: numbers.len(),
            });
        };
        if from == 0 || to == 0 {
            return Err(LineError::InvalidMove("stacks are numbered from 1".into()));
        }

        self.arena.move_top(
            to_index(count)?,
            to_index(from - 1)?,
            to_index(to - 1)?,
            self.crane,
        )
    }
}

fn to_index(value: u64) -> std::result::Result<usize, LineError> {
    usize::try_from(value).map_err(|_| LineError::InvalidNumber(value.to_string()))
}

impl Accumulator for CrateStackSimulator {
    type Answer = StackTopsAnswer;

    fn step(&mut self, line: &str) -> std::result::Result<(), LineError> {
        match self.mode {
            ParseMode::Stacks => self.step_stacks(line),
            ParseMode::Moves => self.step_moves(line),
        }
    }

    fn finalize(self) -> Result<StackTopsAnswer> {
        if self.mode == ParseMode::Stacks {
            log::warn!("input ended before any crane move section");
        }

        Ok(StackTopsAnswer {
            tops: self.arena.tops(),
            stacks: self.arena.snapshot(),
        })
    }
}
