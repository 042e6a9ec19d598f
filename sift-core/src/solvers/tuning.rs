//! Tuning trouble: the first window of pairwise distinct characters

use crate::error::{LineError, Result};
use crate::pipeline::Accumulator;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// 1-based end index of the first `window`-long run of distinct characters
///
/// Single pass: `start` is the beginning of the longest distinct run ending at
/// the current character.
pub fn first_distinct_window(line: &str, window: usize) -> Option<usize> {
    if window == 0 {
        return None;
    }

    let mut last_seen: HashMap<char, usize> = HashMap::new();
    let mut start = 0usize;

    for (index, ch) in line.chars().enumerate() {
        if let Some(previous) = last_seen.insert(ch, index) {
            if previous >= start {
                start = previous + 1;
            }
        }
        if index + 1 - start >= window {
            return Some(index + 1);
        }
    }

    None
}

/// Marker position for every non-blank line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerAnswer {
    /// Window length that was searched for
    pub window: usize,
    /// One entry per non-blank line; `None` when no marker exists
    pub markers: Vec<Option<usize>>,
}

impl fmt::Display for MarkerAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, marker) in self.markers.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match marker {
                Some(index) => write!(f, "{index}")?,
                None => f.write_str("none")?,
            }
        }
        Ok(())
    }
}

/// Finds the start-of-packet / start-of-message marker of every line
#[derive(Debug, Clone)]
pub struct DistinctWindowFinder {
    window: usize,
    markers: Vec<Option<usize>>,
}

impl DistinctWindowFinder {
    pub fn new(window: usize) -> Self {
        Self {
            window,
            markers: Vec::new(),
        }
    }
}

impl Accumulator for DistinctWindowFinder {
    type Answer = MarkerAnswer;

    fn step(&mut self, line: &str) -> std::result::Result<(), LineError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        let marker = first_distinct_window(line, self.window);
        log::debug!("window {} marker: {:?}", self.window, marker);
        self.markers.push(marker);
        Ok(())
    }

    fn finalize(self) -> Result<MarkerAnswer> {
        Ok(MarkerAnswer {
            window: self.window,
            markers: self.markers,
        })
    }
}
