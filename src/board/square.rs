use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static SQUARE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-z])([1-9][0-9]?)$").expect("SQUARE_RE regex should be valid")
});

/// A `(row, col)` coordinate. Row 0 is black's home edge.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    pub fn is_dark(&self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Steps `distance` cells along `(row_step, col_step)`, or `None` when
    /// that leaves a board of the given dimension.
    pub fn offset(
        &self,
        (row_step, col_step): (isize, isize),
        distance: isize,
        dimension: usize,
    ) -> Option<Square> {
        let row = self.row as isize + row_step * distance;
        let col = self.col as isize + col_step * distance;
        let bound = dimension as isize;
        if row < 0 || col < 0 || row >= bound || col >= bound {
            return None;
        }
        Some(Square::new(row as u8, col as u8))
    }

    /// Parses text like `c6`: a column letter followed by a 1-based row number.
    pub fn from_notation(notation: &str) -> Option<Square> {
        let caps = SQUARE_RE.captures(notation.trim())?;
        let col = caps[1].chars().next()? as u8 - b'a';
        let row = caps[2].parse::<u8>().ok()?.checked_sub(1)?;
        Some(Square::new(row, col))
    }

    pub fn to_notation(&self) -> String {
        format!("{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}
