use std::str::FromStr;

use thiserror::Error;

/// Malformed puzzle input. Line and row numbers are 1-based.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("line {line}: expected {expected}, found {found:?}")]
    Malformed { line: usize, expected: &'static str, found: String },
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, found: usize, expected: usize },
    #[error("unexpected character {found:?} at row {row}, column {col}")]
    UnexpectedChar { found: char, row: usize, col: usize },
}

impl ParseError {
    pub fn malformed(line: usize, expected: &'static str, found: impl Into<String>) -> Self {
        ParseError::Malformed { line, expected, found: found.into() }
    }

    pub fn unexpected(found: u8, row: usize, col: usize) -> Self {
        ParseError::UnexpectedChar { found: found as char, row: row + 1, col: col + 1 }
    }
}

/// Parses one field of an input line, reporting the whole field on failure.
pub fn field<T: FromStr>(line: usize, text: &str, expected: &'static str) -> Result<T, ParseError> {
    text.trim().parse().map_err(|_| ParseError::malformed(line, expected, text))
}
