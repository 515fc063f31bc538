use std::io::{self, BufRead, StdinLock};

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::Rng;
use thiserror::Error;

use crate::board::color::Color;
use crate::board::Board;
use crate::evaluate::{Evaluator, HeuristicEvaluator};
use crate::input_handler::{read_move_input, InputError, MoveInput};
use crate::moves::Move;
use crate::searcher::{Algorithm, SearchConfig, SearchError, SearchStats, Searcher};

#[derive(Error, Debug)]
pub enum PlayerError {
    #[error("player quit")]
    Exit,
    #[error("input error: {error:?}")]
    InputError { error: InputError },
    #[error("search error: {error:?}")]
    SearchError { error: SearchError },
}

/// Something that picks a move for one side.
pub trait Player {
    fn color(&self) -> Color;

    /// Picks one of `candidates`. `Ok(None)` means the answer could not be
    /// used and the player should be asked again.
    fn request_move(
        &mut self,
        board: &Board,
        candidates: &[Move],
    ) -> Result<Option<Move>, PlayerError>;

    /// Statistics of the last search, for players that search.
    fn search_stats(&self) -> Option<&SearchStats> {
        None
    }

    /// The settings the last search ran with, for players that search.
    fn search_config(&self) -> Option<&SearchConfig> {
        None
    }

    fn is_human(&self) -> bool {
        false
    }
}

/// Reads moves typed as text, one per line.
pub struct HumanPlayer<R: BufRead> {
    color: Color,
    reader: R,
    /// Answers `hint` requests.
    advisor: Option<Searcher>,
}

impl HumanPlayer<StdinLock<'static>> {
    pub fn from_stdin(color: Color) -> Self {
        Self::new(color, io::stdin().lock())
    }
}

impl<R: BufRead> HumanPlayer<R> {
    pub fn new(color: Color, reader: R) -> Self {
        Self {
            color,
            reader,
            advisor: None,
        }
    }

    pub fn with_advisor(mut self, config: SearchConfig) -> Self {
        self.advisor = Some(Searcher::new(config));
        self
    }
}

impl<R: BufRead> Player for HumanPlayer<R> {
    fn color(&self) -> Color {
        self.color
    }

    fn request_move(
        &mut self,
        board: &Board,
        candidates: &[Move],
    ) -> Result<Option<Move>, PlayerError> {
        let input = match read_move_input(&mut self.reader) {
            Ok(input) => input,
            Err(InputError::EndOfInput) => return Err(PlayerError::Exit),
            Err(error @ InputError::IOError { .. }) => {
                return Err(PlayerError::InputError { error })
            }
            Err(error) => {
                println!("{}", error);
                return Ok(None);
            }
        };

        match input {
            MoveInput::Exit => Err(PlayerError::Exit),
            MoveInput::Squares { from, to } => {
                let chosen = candidates
                    .iter()
                    .find(|m| m.from_square() == from && m.to_square() == to)
                    .copied();
                if chosen.is_none() {
                    println!("{}-{} is not a legal move", from, to);
                }
                Ok(chosen)
            }
            MoveInput::UseEngine => {
                let advisor = match self.advisor.as_mut() {
                    Some(advisor) => advisor,
                    None => {
                        println!("no hints in this game");
                        return Ok(None);
                    }
                };
                let result = advisor
                    .search_moves(board, self.color, candidates)
                    .map_err(|error| PlayerError::SearchError { error })?;
                println!("hint: {}", result.best_move);
                Ok(None)
            }
        }
    }

    fn is_human(&self) -> bool {
        true
    }
}

/// Picks moves with a `Searcher`.
pub struct ComputerPlayer<E = HeuristicEvaluator, R = StdRng> {
    color: Color,
    searcher: Searcher<E, R>,
}

impl ComputerPlayer {
    pub fn new(color: Color, config: SearchConfig) -> Self {
        Self::with_searcher(color, Searcher::new(config))
    }
}

impl<E: Evaluator, R: Rng> ComputerPlayer<E, R> {
    pub fn with_searcher(color: Color, searcher: Searcher<E, R>) -> Self {
        Self { color, searcher }
    }

    pub fn config(&self) -> &SearchConfig {
        self.searcher.config()
    }

    /// Returns false and keeps the current level if `level` is unknown.
    pub fn set_level(&mut self, level: u8) -> bool {
        let changed = self.searcher.config_mut().set_level(level);
        if !changed {
            warn!("ignoring unknown difficulty level {}", level);
        }
        changed
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        debug!("{} switches to {}", self.color, algorithm);
        self.searcher.config_mut().set_algorithm(algorithm);
    }
}

impl<E: Evaluator, R: Rng> Player for ComputerPlayer<E, R> {
    fn color(&self) -> Color {
        self.color
    }

    fn request_move(
        &mut self,
        board: &Board,
        candidates: &[Move],
    ) -> Result<Option<Move>, PlayerError> {
        let result = self
            .searcher
            .search_moves(board, self.color, candidates)
            .map_err(|error| PlayerError::SearchError { error })?;
        Ok(Some(result.chosen_move))
    }

    fn search_stats(&self) -> Option<&SearchStats> {
        Some(self.searcher.stats())
    }

    fn search_config(&self) -> Option<&SearchConfig> {
        Some(self.searcher.config())
    }
}
