//! Text notation for board positions.
//!
//! Rows are listed from row 0 (black's home edge) to the last row and are
//! separated by `/`. Each row has one character per cell: `.` empty, `b`/`B`
//! black man/king, `w`/`W` white man/king. The dimension is implied by the
//! number of rows.

use std::str::FromStr;

use super::error::BoardError;
use super::piece::Cell;
use super::square::Square;
use super::Board;

pub const STARTING_POSITION: &str =
    ".b.b.b.b/b.b.b.b./.b.b.b.b/......../......../w.w.w.w./.w.w.w.w/w.w.w.w.";

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(position: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = position.trim().split('/').collect();
        let mut board = Board::empty(rows.len()).map_err(|_| BoardError::InvalidRowCount {
            row_count: rows.len(),
        })?;

        for (row, cells) in rows.iter().enumerate() {
            parse_row(&mut board, row, cells)?;
        }

        Ok(board)
    }
}

fn parse_row(board: &mut Board, row: usize, cells: &str) -> Result<(), BoardError> {
    let expected = board.dimension();
    let length = cells.chars().count();
    if length != expected {
        return Err(BoardError::InvalidRowLength {
            row,
            length,
            expected,
        });
    }

    for (col, c) in cells.chars().enumerate() {
        let cell = Cell::from_char(c).ok_or(BoardError::InvalidPieceCharacter {
            invalid_character: c,
        })?;
        board.put(Square::new(row as u8, col as u8), cell)?;
    }

    Ok(())
}

impl Board {
    pub fn to_position_string(&self) -> String {
        let dimension = self.dimension();
        (0..dimension)
            .map(|row| {
                (0..dimension)
                    .map(|col| self.piece_at(row as isize, col as isize).to_char())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}
