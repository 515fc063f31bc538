use log::trace;

use super::error::MoveError;
use super::Move;
use crate::board::piece::{Cell, Piece};
use crate::board::Board;

impl Move {
    /// Returns the board that results from playing this move. The input board
    /// is left untouched.
    ///
    /// The move is assumed to come from `move_generation::legal_moves`; use
    /// `try_apply` for moves from an untrusted source.
    pub fn apply(&self, board: &Board) -> Board {
        let moving = board.get(self.from_square);
        debug_assert!(!moving.is_empty(), "no piece on {}", self.from_square);

        let mut next = board.clone();
        for square in self.captured_squares(board) {
            next.set(square, Cell::Empty);
        }

        next.set(self.from_square, Cell::Empty);
        next.set(self.to_square, promote(board, moving, self.to_square.row()));

        trace!("applied {}", self);
        next
    }

    /// Like `apply`, but first checks that the move is geometrically sound:
    /// a piece on the origin, and an empty dark destination on the same
    /// diagonal.
    pub fn try_apply(&self, board: &Board) -> Result<Board, MoveError> {
        let dimension = board.dimension();
        for square in [self.from_square, self.to_square] {
            if square.row() >= dimension || square.col() >= dimension {
                return Err(MoveError::OutOfBounds { square });
            }
        }

        if board.get(self.from_square).is_empty() {
            return Err(MoveError::EmptyOrigin {
                square: self.from_square,
            });
        }

        if !self.to_square.is_dark() || board.is_occupied(self.to_square) {
            return Err(MoveError::BlockedDestination {
                square: self.to_square,
            });
        }

        if !self.is_diagonal() {
            return Err(MoveError::NotDiagonal {
                from: self.from_square,
                to: self.to_square,
            });
        }

        Ok(self.apply(board))
    }
}

/// Crowns a man that lands on its promotion row. Kings stay kings.
fn promote(board: &Board, cell: Cell, landing_row: usize) -> Cell {
    match (cell.piece(), cell.color()) {
        (Some(Piece::Man), Some(color)) if landing_row == color.promotion_row(board.dimension()) => {
            cell.crowned()
        }
        _ => cell,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::color::Color;
    use crate::board::square::Square;
    use crate::{checkers_move, checkers_position};

    #[test]
    fn test_slide_moves_the_piece() {
        let board = Board::starting_position();
        let next = checkers_move!((5, 0), (4, 1)).apply(&board);

        assert_eq!(Cell::Empty, next.piece_at(5, 0));
        assert_eq!(Cell::WhiteMan, next.piece_at(4, 1));
        assert_eq!(12, next.count_pieces(Color::White));
        assert_eq!(12, next.count_pieces(Color::Black));
        // the original is unchanged
        assert_eq!(Cell::WhiteMan, board.piece_at(5, 0));
    }

    #[test]
    fn test_simple_capture_removes_exactly_one_piece() {
        let board = checkers_position! {
            ........
            ........
            ........
            ........
            ...b....
            ..w.....
            ........
            ......b.
        };
        let next = checkers_move!((5, 2), (3, 4)).apply(&board);
        println!("Testing board:\n{}", next);

        assert_eq!(Cell::Empty, next.piece_at(4, 3));
        assert_eq!(Cell::WhiteMan, next.piece_at(3, 4));
        assert_eq!(1, next.count_pieces(Color::Black));
        assert_eq!(1, next.count_pieces(Color::White));
    }

    #[test]
    fn test_long_king_capture_removes_straddled_enemies_only() {
        let board = checkers_position! {
            ........
            ......b.
            ........
            ........
            ...b....
            ........
            .b......
            W.......
        };
        let next = checkers_move!((7, 0), (2, 5)).apply(&board);
        println!("Testing board:\n{}", next);

        assert_eq!(Cell::Empty, next.piece_at(6, 1));
        assert_eq!(Cell::Empty, next.piece_at(4, 3));
        assert_eq!(Cell::BlackMan, next.piece_at(1, 6));
        assert_eq!(Cell::WhiteKing, next.piece_at(2, 5));
        assert_eq!(1, next.count_pieces(Color::Black));
    }

    #[test]
    fn test_capture_never_removes_friendly_pieces() {
        let board = checkers_position! {
            ........
            ........
            ........
            ........
            ...w....
            ........
            .b......
            W.......
        };
        let next = checkers_move!((7, 0), (5, 2)).apply(&board);

        assert_eq!(Cell::WhiteMan, next.piece_at(4, 3));
        assert_eq!(2, next.count_pieces(Color::White));
        assert_eq!(0, next.count_pieces(Color::Black));
    }

    #[test]
    fn test_white_man_promotes_on_row_zero() {
        let board = checkers_position! {
            ........
            ..w.....
            ........
            ........
            ........
            ........
            ........
            ......b.
        };
        let next = checkers_move!((1, 2), (0, 1)).apply(&board);
        assert_eq!(Cell::WhiteKing, next.piece_at(0, 1));
    }

    #[test]
    fn test_black_man_promotes_on_last_row_by_capture() {
        let board = checkers_position! {
            ........
            ........
            ........
            ........
            ........
            ..b.....
            ...w....
            ........
        };
        let next = checkers_move!((5, 2), (7, 4)).apply(&board);
        assert_eq!(Cell::BlackKing, next.piece_at(7, 4));
        assert_eq!(0, next.count_pieces(Color::White));
    }

    #[test]
    fn test_man_off_the_edge_stays_a_man() {
        let board = Board::starting_position();
        let next = checkers_move!((2, 1), (3, 2)).apply(&board);
        assert_eq!(Cell::BlackMan, next.piece_at(3, 2));
    }

    #[test]
    fn test_king_keeps_its_kind() {
        let board = checkers_position! {
            ........
            ........
            ........
            ........
            ........
            ........
            ........
            B.....w.
        };
        let next = checkers_move!((7, 0), (2, 5)).apply(&board);
        assert_eq!(Cell::BlackKing, next.piece_at(2, 5));
        let back = checkers_move!((2, 5), (0, 7)).apply(&next);
        assert_eq!(Cell::BlackKing, back.piece_at(0, 7));
    }

    #[test]
    fn test_try_apply_guards() {
        let board = Board::starting_position();
        assert_eq!(
            Err(MoveError::EmptyOrigin {
                square: Square::new(4, 1)
            }),
            checkers_move!((4, 1), (3, 2)).try_apply(&board)
        );
        assert_eq!(
            Err(MoveError::BlockedDestination {
                square: Square::new(6, 1)
            }),
            checkers_move!((5, 0), (6, 1)).try_apply(&board)
        );
        assert_eq!(
            Err(MoveError::NotDiagonal {
                from: Square::new(5, 2),
                to: Square::new(3, 2)
            }),
            checkers_move!((5, 2), (3, 2)).try_apply(&board)
        );
        assert_eq!(
            Err(MoveError::OutOfBounds {
                square: Square::new(8, 1)
            }),
            checkers_move!((7, 0), (8, 1)).try_apply(&board)
        );
        assert!(checkers_move!((5, 2), (4, 3)).try_apply(&board).is_ok());
    }
}
