pub mod color;
pub mod error;
pub mod piece;
pub mod square;

mod display;
mod position;

pub use position::STARTING_POSITION;


use color::Color;
use error::BoardError;
use piece::Cell;
use square::Square;

pub const DEFAULT_DIMENSION: usize = 8;
const MIN_DIMENSION: usize = 4;
const MAX_DIMENSION: usize = 26;

/// An N×N checkers board. Only dark squares, where `(row + col)` is odd,
/// ever hold a piece.
///
/// Boards are treated as values: the move applier clones a board and writes
/// into the copy, so a board handed to the searcher is never changed under it.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    dimension: usize,
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl Board {
    /// An empty board of the given dimension.
    pub fn empty(dimension: usize) -> Result<Self, BoardError> {
        if dimension % 2 != 0 || !(MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) {
            return Err(BoardError::InvalidDimension { dimension });
        }

        Ok(Self {
            dimension,
            cells: vec![Cell::Empty; dimension * dimension],
        })
    }

    /// The standard layout: black men fill the dark squares of the rows above
    /// the two middle rows, white men the dark squares below them.
    pub fn initial(dimension: usize) -> Result<Self, BoardError> {
        let mut board = Self::empty(dimension)?;
        let half = dimension / 2;

        for row in 0..dimension {
            for col in 0..dimension {
                if !board.is_dark_square(row as isize, col as isize) {
                    continue;
                }
                let cell = if row < half - 1 {
                    Cell::BlackMan
                } else if row >= half + 1 {
                    Cell::WhiteMan
                } else {
                    continue;
                };
                board.set(Square::new(row as u8, col as u8), cell);
            }
        }

        Ok(board)
    }

    /// The standard 8×8 starting position.
    pub fn starting_position() -> Self {
        Self::initial(DEFAULT_DIMENSION).expect("the default dimension is always valid")
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn contains(&self, row: isize, col: isize) -> bool {
        let bound = self.dimension as isize;
        row >= 0 && col >= 0 && row < bound && col < bound
    }

    pub fn is_dark_square(&self, row: isize, col: isize) -> bool {
        self.contains(row, col) && (row + col) % 2 != 0
    }

    /// The cell at `(row, col)`. Coordinates off the board read as empty, so
    /// scanning loops can run past the edge without a separate bounds check.
    pub fn piece_at(&self, row: isize, col: isize) -> Cell {
        if !self.contains(row, col) {
            return Cell::Empty;
        }
        self.cells[row as usize * self.dimension + col as usize]
    }

    pub fn get(&self, square: Square) -> Cell {
        self.piece_at(square.row() as isize, square.col() as isize)
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        !self.get(square).is_empty()
    }

    /// Places `cell` on `square`, replacing whatever was there.
    pub fn put(&mut self, square: Square, cell: Cell) -> Result<(), BoardError> {
        let (row, col) = (square.row(), square.col());
        if !self.contains(row as isize, col as isize) {
            return Err(BoardError::OutOfBounds { row, col });
        }
        if !square.is_dark() && !cell.is_empty() {
            return Err(BoardError::LightSquare { row, col });
        }
        self.set(square, cell);
        Ok(())
    }

    /// Unchecked write, for squares already known to be on the board.
    pub(crate) fn set(&mut self, square: Square, cell: Cell) {
        self.cells[square.row() * self.dimension + square.col()] = cell;
    }

    /// Every square on the board, row by row.
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        let dimension = self.dimension;
        (0..dimension)
            .flat_map(move |row| (0..dimension).map(move |col| Square::new(row as u8, col as u8)))
    }

    /// The squares holding `color`'s pieces, in row-then-column order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Cell)> + '_ {
        self.squares()
            .map(move |square| (square, self.get(square)))
            .filter(move |(_, cell)| cell.belongs_to(color))
    }

    pub fn count_pieces(&self, color: Color) -> usize {
        self.cells.iter().filter(|cell| cell.belongs_to(color)).count()
    }
}
