//! Symbolic word parsing through a fixed lookup table

use super::{LineOutcome, LineParser};
use crate::error::LineError;
use smallvec::SmallVec;
use std::collections::HashMap;

/// Integer codes of the words on one line
pub type Words = SmallVec<[u8; 2]>;

/// Immutable symbol-to-code table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    codes: HashMap<String, u8>,
}

impl SymbolTable {
    /// Build a table from `(symbol, code)` entries
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u8)>,
        S: Into<String>,
    {
        Self {
            codes: entries
                .into_iter()
                .map(|(symbol, code)| (symbol.into(), code))
                .collect(),
        }
    }

    /// Strategy guide table: `A B C` and `X Y Z` both map to `0 1 2`
    pub fn strategy_guide() -> Self {
        Self::new([
            ("A", 0),
            ("B", 1),
            ("C", 2),
            ("X", 0),
            ("Y", 1),
            ("Z", 2),
        ])
    }

    /// Look up a symbol
    pub fn code(&self, symbol: &str) -> Option<u8> {
        self.codes.get(symbol).copied()
    }
}

/// Splits a line on whitespace and maps every word through a [`SymbolTable`]
#[derive(Debug, Clone)]
pub struct WordPairParser {
    table: SymbolTable,
}

impl WordPairParser {
    /// Create a parser over the given table
    pub fn new(table: SymbolTable) -> Self {
        Self { table }
    }

    /// The table this parser maps through
    pub fn table(&self) -> &SymbolTable {
        &self.table
    }
}

impl LineParser for WordPairParser {
    type Output<'a> = Words;

    fn parse<'a>(&self, line: &'a str) -> Result<LineOutcome<Self::Output<'a>>, LineError> {
        let words = line
            .split_whitespace()
            .map(|word| {
                self.table
                    .code(word)
                    .ok_or_else(|| LineError::UnknownToken(word.to_string()))
            })
            .collect::<Result<Words, _>>()?;

        if words.is_empty() {
            Ok(LineOutcome::Blank)
        } else {
            Ok(LineOutcome::Value(words))
        }
    }
}
