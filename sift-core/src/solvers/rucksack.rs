//! Rucksack reorganization: items shared between halves and between groups

use crate::error::{LineError, Result};
use crate::parse::{HalfSplitParser, LineOutcome, LineParser};
use crate::pipeline::Accumulator;
use serde::Serialize;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr};

/// Number of rucksacks in an elf group
const GROUP_SIZE: usize = 3;

/// Priority of an item type: `a..z` are 1..26, `A..Z` are 27..52
pub fn priority(item: char) -> std::result::Result<u32, LineError> {
    match item {
        'a'..='z' => Ok(item as u32 - 'a' as u32 + 1),
        'A'..='Z' => Ok(item as u32 - 'A' as u32 + 27),
        _ => Err(LineError::InvalidItemType(item)),
    }
}

/// Set of item types, one bit per priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ItemSet(u64);

impl ItemSet {
    /// The empty set
    pub fn empty() -> Self {
        Self(0)
    }

    /// Collect every item of `items`
    pub fn from_items(items: &str) -> std::result::Result<Self, LineError> {
        let mut set = Self::empty();
        for item in items.chars() {
            set.0 |= 1u64 << (priority(item)? - 1);
        }
        Ok(set)
    }

    /// Number of distinct items
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether the set has no items
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Priority of the only item in the set
    pub fn single_priority(self) -> std::result::Result<u32, LineError> {
        if self.len() != 1 {
            return Err(LineError::NoSingleSharedItem { found: self.len() });
        }
        Ok(self.0.trailing_zeros() + 1)
    }
}

impl BitAnd for ItemSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for ItemSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for ItemSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

/// Priority sums for misplaced items and group badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RucksackAnswer {
    /// Sum over lines of the item shared by both halves
    pub misplaced_sum: u64,
    /// Sum over groups of three of the item shared by the whole group
    pub badge_sum: u64,
}

impl fmt::Display for RucksackAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.misplaced_sum, self.badge_sum)
    }
}

/// Intersects rucksack halves (part 1) and groups of three rucksacks (part 2)
#[derive(Debug, Clone, Default)]
pub struct RucksackIntersector {
    parser: HalfSplitParser,
    misplaced_sum: u64,
    badge_sum: u64,
    group: ItemSet,
    position_in_group: usize,
}

impl RucksackIntersector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator for RucksackIntersector {
    type Answer = RucksackAnswer;

    fn step(&mut self, line: &str) -> std::result::Result<(), LineError> {
        let (left, right) = match self.parser.parse(line)? {
            LineOutcome::Value(halves) => halves,
            LineOutcome::Blank => return Ok(()),
        };

        let left = ItemSet::from_items(left)?;
        let right = ItemSet::from_items(right)?;
        self.misplaced_sum += u64::from((left & right).single_priority()?);

        let rucksack = left | right;
        if self.position_in_group == 0 {
            self.group = rucksack;
        } else {
            self.group &= rucksack;
        }

        if self.position_in_group == GROUP_SIZE - 1 {
            self.badge_sum += u64::from(self.group.single_priority()?);
        }
        self.position_in_group = (self.position_in_group + 1) % GROUP_SIZE;

        Ok(())
    }

    fn finalize(self) -> Result<RucksackAnswer> {
        if self.position_in_group != 0 {
            log::warn!(
                "ignoring incomplete trailing group of {} rucksacks",
                self.position_in_group
            );
        }

        Ok(RucksackAnswer {
            misplaced_sum: self.misplaced_sum,
            badge_sum: self.badge_sum,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::run;
    use crate::source::LineSource;

    const SAMPLE: &str = "\
vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw
";

    #[test]
    fn test_priorities() {
        assert_eq!(priority('a'), Ok(1));
        assert_eq!(priority('p'), Ok(16));
        assert_eq!(priority('z'), Ok(26));
        assert_eq!(priority('A'), Ok(27));
        assert_eq!(priority('Z'), Ok(52));
        assert_eq!(priority('1'), Err(LineError::InvalidItemType('1')));
    }

    #[test]
    fn test_shared_item_of_first_rucksack() {
        let mut intersector = RucksackIntersector::new();
        intersector.step("vJrwpWtwJgWrhcsFMMfFFhFp").unwrap();

        let answer = intersector.finalize().unwrap();
        assert_eq!(answer.misplaced_sum, 16);
        assert_eq!(answer.badge_sum, 0);
    }

    #[test]
    fn test_sample() {
        let answer = run(LineSource::from_text(SAMPLE), RucksackIntersector::new()).unwrap();

        assert_eq!(answer.misplaced_sum, 157);
        assert_eq!(answer.badge_sum, 70);
        assert_eq!(answer.to_string(), "157, 70");
    }

    #[test]
    fn test_blank_lines_do_not_break_groups() {
        let spaced = SAMPLE.replace('\n', "\n\n");
        let answer = run(LineSource::from_text(spaced), RucksackIntersector::new()).unwrap();
        assert_eq!(answer.badge_sum, 70);
    }

    #[test]
    fn test_invalid_item() {
        let mut intersector = RucksackIntersector::new();
        assert_eq!(
            intersector.step("ab1b"),
            Err(LineError::InvalidItemType('1'))
        );
    }

    #[test]
    fn test_odd_line() {
        let mut intersector = RucksackIntersector::new();
        assert_eq!(
            intersector.step("abcab"),
            Err(LineError::ImbalancedInput { len: 5 })
        );
    }

    #[test]
    fn test_no_shared_item() {
        let mut intersector = RucksackIntersector::new();
        assert_eq!(
            intersector.step("abcd"),
            Err(LineError::NoSingleSharedItem { found: 0 })
        );
    }
}
