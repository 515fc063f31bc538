use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("Board dimension must be an even number between 4 and 26, got {dimension:?}")]
    InvalidDimension { dimension: usize },
    #[error("Square ({row:?}, {col:?}) is outside the board")]
    OutOfBounds { row: usize, col: usize },
    #[error("Pieces may only be placed on dark squares, ({row:?}, {col:?}) is light")]
    LightSquare { row: usize, col: usize },
    #[error("Invalid piece character: {invalid_character:?}")]
    InvalidPieceCharacter { invalid_character: char },
    #[error("Wrong number of rows: {row_count:?} given")]
    InvalidRowCount { row_count: usize },
    #[error("Row {row:?} has {length:?} cells, expected {expected:?}")]
    InvalidRowLength {
        row: usize,
        length: usize,
        expected: usize,
    },
}
