use thiserror::Error;

use crate::board::square::Square;

#[derive(Error, Debug, PartialEq)]
pub enum MoveError {
    #[error("Cannot apply move, the `from` square {square} is empty")]
    EmptyOrigin { square: Square },
    #[error("Cannot apply move, {square} is outside the board")]
    OutOfBounds { square: Square },
    #[error("Cannot apply move, the `to` square {square} is occupied or light")]
    BlockedDestination { square: Square },
    #[error("Cannot apply move, {from} to {to} is not a diagonal")]
    NotDiagonal { from: Square, to: Square },
}
