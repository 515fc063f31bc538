pub mod apply;
pub mod error;

use std::fmt;

use crate::board::square::Square;
use crate::board::Board;

/// Builds a move from two `(row, col)` pairs.
#[macro_export]
macro_rules! checkers_move {
    (($from_row:expr, $from_col:expr), ($to_row:expr, $to_col:expr)) => {
        $crate::moves::Move::new(
            $crate::board::square::Square::new($from_row, $from_col),
            $crate::board::square::Square::new($to_row, $to_col),
        )
    };
}

/// A single hop from one square to another. Chained captures are played as
/// a sequence of these.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    from_square: Square,
    to_square: Square,
}

impl Move {
    pub fn new(from_square: Square, to_square: Square) -> Self {
        Self {
            from_square,
            to_square,
        }
    }

    pub fn from_square(&self) -> Square {
        self.from_square
    }

    pub fn to_square(&self) -> Square {
        self.to_square
    }

    pub fn row_delta(&self) -> isize {
        self.to_square.row() as isize - self.from_square.row() as isize
    }

    pub fn col_delta(&self) -> isize {
        self.to_square.col() as isize - self.from_square.col() as isize
    }

    pub fn is_diagonal(&self) -> bool {
        let row_delta = self.row_delta();
        row_delta != 0 && row_delta.abs() == self.col_delta().abs()
    }

    /// True for moves longer than one step: jumps, and long king slides.
    pub fn is_long(&self) -> bool {
        self.row_delta().abs() > 1 || self.col_delta().abs() > 1
    }

    /// True when playing this move on `board` removes at least one enemy.
    pub fn is_capture_on(&self, board: &Board) -> bool {
        !self.captured_squares(board).is_empty()
    }

    /// The squares strictly between origin and destination.
    pub fn path(&self, dimension: usize) -> Vec<Square> {
        let steps = self.row_delta().abs().max(self.col_delta().abs());
        let direction = (self.row_delta().signum(), self.col_delta().signum());
        (1..steps)
            .filter_map(|distance| self.from_square.offset(direction, distance, dimension))
            .collect()
    }

    /// The enemy pieces this move would remove: every square on the path that
    /// holds a piece of the other color than the one on the origin square.
    pub fn captured_squares(&self, board: &Board) -> Vec<Square> {
        let color = match board.get(self.from_square).color() {
            Some(color) => color,
            None => return Vec::new(),
        };
        if !self.is_long() {
            return Vec::new();
        }

        self.path(board.dimension())
            .into_iter()
            .filter(|&square| board.get(square).is_enemy_of(color))
            .collect()
    }

    pub fn to_notation(&self) -> String {
        format!("{}-{}", self.from_square, self.to_square)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers_position;

    #[test]
    fn test_slide_is_not_a_capture() {
        let slide = checkers_move!((5, 0), (4, 1));
        assert!(slide.is_diagonal());
        assert!(!slide.is_long());
        assert_eq!("a6-b5", slide.to_notation());
        assert!(slide.path(8).is_empty());
    }

    #[test]
    fn test_long_move_path() {
        let mv = checkers_move!((7, 0), (3, 4));
        assert!(mv.is_long());
        assert_eq!(
            vec![Square::new(6, 1), Square::new(5, 2), Square::new(4, 3)],
            mv.path(8)
        );
        assert_eq!("a8-e4", mv.to_string());
    }

    #[test]
    fn test_captured_squares_skip_friendly_and_empty_cells() {
        let board = checkers_position! {
            ........
            ........
            ........
            ........
            ...b....
            ..w.....
            .b......
            W.......
        };
        println!("Testing board:\n{}", board);

        let mv = checkers_move!((7, 0), (3, 4));
        assert_eq!(
            vec![Square::new(6, 1), Square::new(4, 3)],
            mv.captured_squares(&board)
        );
        assert!(mv.is_capture_on(&board));
        assert!(!checkers_move!((7, 0), (6, 1)).is_capture_on(&board));
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(checkers_move!((2, 1), (3, 2)), checkers_move!((2, 1), (3, 2)));
        assert_ne!(checkers_move!((2, 1), (3, 2)), checkers_move!((2, 1), (3, 0)));
    }
}
