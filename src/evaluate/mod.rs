use std::fmt;

use log::warn;
use thiserror::Error;

use crate::board::color::Color;
use crate::board::piece::Piece;
use crate::board::Board;
use crate::move_generation::legal_moves;

pub mod weights;

use self::weights::Weights;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnding {
    /// The loser has no pieces left.
    NoPiecesLeft { winner: Color },
    /// The side to move has pieces but cannot move them. This is a loss, not
    /// a draw.
    NoLegalMoves { winner: Color },
}

impl GameEnding {
    pub fn winner(&self) -> Color {
        match self {
            GameEnding::NoPiecesLeft { winner } | GameEnding::NoLegalMoves { winner } => *winner,
        }
    }
}

impl fmt::Display for GameEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEnding::NoPiecesLeft { winner } => {
                write!(f, "{} wins, {} has no pieces left", winner, winner.opposite())
            }
            GameEnding::NoLegalMoves { winner } => {
                write!(f, "{} wins, {} cannot move", winner, winner.opposite())
            }
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum EvaluateError {
    #[error("{color} has {count:?} legal moves, more than the mobility counter holds")]
    MobilityOverflow { color: Color, count: usize },
}

/// Returns the game ending state if the game has ended, otherwise returns None.
pub fn game_ending(board: &Board, to_move: Color) -> Option<GameEnding> {
    if board.count_pieces(Color::White) == 0 {
        return Some(GameEnding::NoPiecesLeft {
            winner: Color::Black,
        });
    }
    if board.count_pieces(Color::Black) == 0 {
        return Some(GameEnding::NoPiecesLeft {
            winner: Color::White,
        });
    }

    if legal_moves(board, to_move).is_empty() {
        return Some(GameEnding::NoLegalMoves {
            winner: to_move.opposite(),
        });
    }

    None
}

pub fn winner(board: &Board, to_move: Color) -> Option<Color> {
    game_ending(board, to_move).map(|ending| ending.winner())
}

pub fn is_terminal(board: &Board, to_move: Color) -> bool {
    game_ending(board, to_move).is_some()
}

/// Scores a position. Higher scores favor white.
pub trait Evaluator {
    fn evaluate(&self, board: &Board, to_move: Color) -> f64;
}

impl<F> Evaluator for F
where
    F: Fn(&Board, Color) -> f64,
{
    fn evaluate(&self, board: &Board, to_move: Color) -> f64 {
        self(board, to_move)
    }
}

/// Material, advancement, king centrality and mobility, summed per side.
#[derive(Clone, Debug, Default)]
pub struct HeuristicEvaluator {
    weights: Weights,
}

impl HeuristicEvaluator {
    pub fn new(weights: Weights) -> Self {
        Self { weights }
    }
}

impl Evaluator for HeuristicEvaluator {
    fn evaluate(&self, board: &Board, to_move: Color) -> f64 {
        match winner(board, to_move) {
            Some(Color::White) => return self.weights.win,
            Some(Color::Black) => return -self.weights.win,
            None => {}
        }

        let mut white_score = player_score(board, Color::White, &self.weights);
        let mut black_score = player_score(board, Color::Black, &self.weights);

        if self.weights.mobility != 0.0 {
            match (mobility(board, Color::White), mobility(board, Color::Black)) {
                (Ok(white_moves), Ok(black_moves)) => {
                    white_score += f64::from(white_moves) * self.weights.mobility;
                    black_score += f64::from(black_moves) * self.weights.mobility;
                }
                (Err(error), _) | (_, Err(error)) => {
                    warn!("skipping mobility term: {}", error);
                }
            }
        }

        white_score - black_score
    }
}

/// Number of legal moves for `color`. Counts are kept in a `u8`, so very
/// open positions on large boards report an error instead of a count.
pub fn mobility(board: &Board, color: Color) -> Result<u8, EvaluateError> {
    let count = legal_moves(board, color).len();
    u8::try_from(count).map_err(|_| EvaluateError::MobilityOverflow { color, count })
}

fn player_score(board: &Board, color: Color, weights: &Weights) -> f64 {
    let dimension = board.dimension();
    let centre = (dimension / 2) as isize;

    board
        .pieces(color)
        .map(|(square, cell)| match cell.piece() {
            Some(Piece::Man) => {
                let rows_travelled = match color {
                    Color::White => dimension - 1 - square.row(),
                    Color::Black => square.row(),
                };
                weights.man + rows_travelled as f64 * weights.advancement
            }
            Some(Piece::King) => {
                let distance = (square.row() as isize - centre).abs()
                    + (square.col() as isize - centre).abs();
                weights.king + (dimension as isize - distance) as f64 * weights.centrality
            }
            None => 0.0,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::Cell;
    use crate::board::square::Square;
    use crate::checkers_position;

    #[test]
    fn test_starting_position_is_balanced() {
        let board = Board::starting_position();
        let evaluator = HeuristicEvaluator::default();
        assert_eq!(0.0, evaluator.evaluate(&board, Color::White));
        assert_eq!(0.0, evaluator.evaluate(&board, Color::Black));
    }

    #[test]
    fn test_no_black_pieces_is_a_white_win_on_either_turn() {
        let board = checkers_position! {
            ........
            ........
            ........
            ........
            ........
            ........
            ........
            w.......
        };

        for to_move in Color::ALL {
            assert_eq!(
                Some(GameEnding::NoPiecesLeft {
                    winner: Color::White
                }),
                game_ending(&board, to_move)
            );
            assert_eq!(
                1000.0,
                HeuristicEvaluator::default().evaluate(&board, to_move)
            );
        }
    }

    #[test]
    fn test_no_white_pieces_is_a_black_win() {
        let board = checkers_position! {
            .b......
            ........
            ........
            ........
            ........
            ........
            ........
            ........
        };

        assert_eq!(Some(Color::Black), winner(&board, Color::White));
        assert_eq!(Some(Color::Black), winner(&board, Color::Black));
        assert_eq!(
            -1000.0,
            HeuristicEvaluator::default().evaluate(&board, Color::White)
        );
    }

    #[test]
    fn test_side_without_moves_loses() {
        let board = checkers_position! {
            ........
            ........
            ........
            ........
            ........
            ........
            .b......
            w.w.....
        };
        println!("Testing board:\n{}", board);

        assert_eq!(
            Some(GameEnding::NoLegalMoves {
                winner: Color::White
            }),
            game_ending(&board, Color::Black)
        );
        assert!(is_terminal(&board, Color::Black));
        // white can still capture, so the game goes on when white is to move
        assert_eq!(None, winner(&board, Color::White));
        assert!(!is_terminal(&board, Color::White));
    }

    #[test]
    fn test_kings_outweigh_men() {
        let board = checkers_position! {
            ........
            ........
            ........
            ....W...
            ........
            ........
            .b......
            ........
        };
        let score = HeuristicEvaluator::default().evaluate(&board, Color::White);
        assert!(score > 60.0, "score was {}", score);
    }

    #[test]
    fn test_advanced_men_score_higher() {
        let home = checkers_position! {
            ........
            ........
            ........
            ........
            ........
            ......b.
            ........
            w.......
        };
        let advanced = checkers_move_board(&home, Square::new(7, 0), Square::new(2, 1));

        let weights = Weights::default().without_mobility();
        let evaluator = HeuristicEvaluator::new(weights);
        let home_score = evaluator.evaluate(&home, Color::Black);
        let advanced_score = evaluator.evaluate(&advanced, Color::Black);
        assert_eq!(5.0, advanced_score - home_score);
    }

    #[test]
    fn test_central_kings_score_higher() {
        let corner = checkers_position! {
            .......W
            ........
            ........
            ........
            ........
            ........
            .b......
            ........
        };
        let centre = checkers_move_board(&corner, Square::new(0, 7), Square::new(4, 3));

        let evaluator = HeuristicEvaluator::new(Weights::default().without_mobility());
        let corner_score = evaluator.evaluate(&corner, Color::White);
        let centre_score = evaluator.evaluate(&centre, Color::White);
        // distance to (4, 4) drops from 7 to 1
        assert_eq!(12.0, centre_score - corner_score);
    }

    #[test]
    fn test_mobility_overflow_skips_the_term() {
        let mut board = Board::empty(26).unwrap();
        for col in (1..26).step_by(2) {
            board.put(Square::new(12, col), Cell::WhiteKing).unwrap();
        }
        board.put(Square::new(0, 1), Cell::BlackMan).unwrap();

        assert!(matches!(
            mobility(&board, Color::White),
            Err(EvaluateError::MobilityOverflow {
                color: Color::White,
                ..
            })
        ));

        let with_mobility = HeuristicEvaluator::default().evaluate(&board, Color::White);
        let without_mobility = HeuristicEvaluator::new(Weights::default().without_mobility())
            .evaluate(&board, Color::White);
        assert_eq!(without_mobility, with_mobility);
    }

    #[test]
    fn test_closures_are_evaluators() {
        let material = |board: &Board, _to_move: Color| {
            board.count_pieces(Color::White) as f64 - board.count_pieces(Color::Black) as f64
        };
        assert_eq!(0.0, material.evaluate(&Board::starting_position(), Color::White));
    }

    fn checkers_move_board(board: &Board, from: Square, to: Square) -> Board {
        let mut next = board.clone();
        let cell = next.get(from);
        next.put(from, Cell::Empty).unwrap();
        next.put(to, cell).unwrap();
        next
    }
}
