use log::{debug, info};
use thiserror::Error;

use crate::board::color::Color;
use crate::board::square::Square;
use crate::board::Board;
use crate::evaluate::{self, GameEnding};
use crate::move_generation::{captures_from, legal_moves};
use crate::moves::error::MoveError;
use crate::moves::Move;

/// Where a game starts.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub starting_position: Board,
    pub first_turn: Color,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_position: Board::default(),
            first_turn: Color::White,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("illegal move: {mv}")]
    IllegalMove { mv: Move },
    #[error("move error: {error:?}")]
    MoveError { error: MoveError },
}

/// What playing a move did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub captured: Vec<Square>,
    pub promoted: bool,
    /// The piece that just captured must capture again, so the same side
    /// moves next.
    pub continues_capture: bool,
}

/// Game state: the board, whose turn it is, and the chained capture in
/// progress if there is one.
pub struct Engine {
    board: Board,
    turn: Color,
    move_history: Vec<Move>,
    capturing_piece: Option<Square>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            board: config.starting_position,
            turn: config.first_turn,
            move_history: Vec::new(),
            capturing_piece: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn last_move(&self) -> Option<Move> {
        self.move_history.last().copied()
    }

    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    /// The square of the piece that is partway through a chained capture.
    pub fn capturing_piece(&self) -> Option<Square> {
        self.capturing_piece
    }

    /// Moves the side to move may play. During a chained capture these are
    /// only the further captures of the piece that just captured.
    pub fn valid_moves(&self) -> Vec<Move> {
        match self.capturing_piece {
            Some(square) => captures_from(&self.board, square),
            None => legal_moves(&self.board, self.turn),
        }
    }

    pub fn check_game_over(&self) -> Option<GameEnding> {
        evaluate::game_ending(&self.board, self.turn)
    }

    pub fn make_move(&mut self, mv: Move) -> Result<MoveOutcome, EngineError> {
        if !self.valid_moves().contains(&mv) {
            return Err(EngineError::IllegalMove { mv });
        }

        let mover = self.turn;
        let captured = mv.captured_squares(&self.board);
        let was_king = self.board.get(mv.from_square()).is_king();
        let board = mv
            .try_apply(&self.board)
            .map_err(|error| EngineError::MoveError { error })?;

        // crowning ends the move, even if the new king could capture again
        let promoted = !was_king && board.get(mv.to_square()).is_king();
        let continues_capture = !captured.is_empty()
            && !promoted
            && !captures_from(&board, mv.to_square()).is_empty();

        self.board = board;
        self.move_history.push(mv);

        if continues_capture {
            debug!("{} must keep capturing from {}", mover, mv.to_square());
            self.capturing_piece = Some(mv.to_square());
        } else {
            self.capturing_piece = None;
            self.turn = mover.opposite();
        }

        if promoted {
            info!("{} crowned on {}", mover, mv.to_square());
        }

        Ok(MoveOutcome {
            captured,
            promoted,
            continues_capture,
        })
    }

    pub fn make_move_by_squares(
        &mut self,
        from: Square,
        to: Square,
    ) -> Result<MoveOutcome, EngineError> {
        self.make_move(Move::new(from, to))
    }
}
