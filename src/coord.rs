//! Board coordinates and parsing of `A0`-style guesses.

use alloc::{format, string::String};
use core::fmt;

use crate::common::GuessError;

/// A `(row, col)` cell address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns `true` if the coordinate lies on a `board_size`×`board_size` board.
    pub fn on_board(&self, board_size: usize) -> bool {
        self.row < board_size && self.col < board_size
    }

    /// Compact key made of the row index followed by the column index.
    pub fn key(&self) -> String {
        format!("{}{}", self.row, self.col)
    }
}

/// Letter naming `row`, if there is one.
pub fn row_letter(row: usize) -> Option<char> {
    if row < 26 {
        Some((b'A' + row as u8) as char)
    } else {
        None
    }
}

fn row_index(letter: char) -> Option<usize> {
    if letter.is_ascii_alphabetic() {
        Some((letter.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Formats as the row letter followed by the column digit, e.g. `B0`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match row_letter(self.row) {
            Some(letter) => write!(f, "{}{}", letter, self.col),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// Parse raw player input such as `"b3"` into a coordinate on the board.
///
/// The input must be exactly two characters: one of the first `board_size`
/// letters (either case) and a digit below `board_size`.
pub fn validate_guess(raw: &str, board_size: usize) -> Result<Coordinate, GuessError> {
    let mut chars = raw.chars();
    let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(GuessError::WrongLength {
            len: raw.chars().count(),
        });
    };

    let row = row_index(letter).ok_or(GuessError::NotALetter(letter))?;
    if row >= board_size {
        return Err(GuessError::RowOffBoard(letter));
    }
    let col = digit.to_digit(10).ok_or(GuessError::NotADigit(digit))? as usize;
    if col >= board_size {
        return Err(GuessError::ColumnOffBoard(digit));
    }
    Ok(Coordinate::new(row, col))
}
