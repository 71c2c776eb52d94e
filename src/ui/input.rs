//! Selection parsing for the interactive session.
//!
//! One line of input per cycle, trimmed and parsed as an integer. `0` is
//! the quit sentinel; every other number is looked up in the category
//! table. Both failure modes are recoverable: the session prints the
//! message and re-prompts.

use thiserror::Error;

use crate::categories::{self, Category};

/// What a line of user input resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The `0` sentinel: end the session normally.
    Quit,
    /// A valid category pick.
    Category(&'static Category),
}

/// Recoverable selection failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The line did not parse as an integer.
    #[error("not a category number: {0:?}")]
    NotANumber(String),

    /// The number is outside the category table.
    #[error("unknown category number: {0}")]
    UnknownCategory(i64),
}

/// Parses one input line into a [`Selection`].
pub fn parse_selection(line: &str) -> Result<Selection, SelectionError> {
    let trimmed = line.trim();
    let number: i64 = trimmed
        .parse()
        .map_err(|_| SelectionError::NotANumber(trimmed.to_string()))?;

    if number == 0 {
        return Ok(Selection::Quit);
    }

    u8::try_from(number)
        .ok()
        .and_then(categories::find)
        .map(Selection::Category)
        .ok_or(SelectionError::UnknownCategory(number))
}
