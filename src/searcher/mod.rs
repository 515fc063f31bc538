mod config;
#[cfg(test)]
mod tests;

use std::time::{Duration, Instant};

use log::{debug, error, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::board::color::Color;
use crate::board::Board;
use crate::evaluate::{is_terminal, Evaluator, HeuristicEvaluator};
use crate::move_generation::legal_moves;
use crate::moves::Move;

pub use self::config::{Algorithm, SearchConfig};

#[derive(Error, Debug, PartialEq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("search depth must be at least 1")]
    DepthTooLow,
}

/// Counters for the most recent search.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub cutoffs: usize,
    pub depth: u8,
    pub last_score: Option<f64>,
    pub last_duration: Option<Duration>,
    pub injected_error: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// The move to play. Differs from `best_move` when an error was injected.
    pub chosen_move: Move,
    pub best_move: Move,
    /// Score of `best_move`. Positive favors white.
    pub score: f64,
}

/// Picks moves by depth-limited Minimax or Alpha-Beta search.
pub struct Searcher<E = HeuristicEvaluator, R = StdRng> {
    config: SearchConfig,
    evaluator: E,
    rng: R,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_parts(config, HeuristicEvaluator::default(), StdRng::from_entropy())
    }
}

impl<E: Evaluator, R: Rng> Searcher<E, R> {
    pub fn with_parts(config: SearchConfig, evaluator: E, rng: R) -> Self {
        Self {
            config,
            evaluator,
            rng,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SearchConfig {
        &mut self.config
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The move `player` should play, or None if the game is over.
    pub fn best_move(&mut self, board: &Board, player: Color) -> Option<Move> {
        if is_terminal(board, player) {
            debug!("no search on a finished game");
            return None;
        }

        let candidates = legal_moves(board, player);
        match self.search_moves(board, player, &candidates) {
            Ok(result) => Some(result.chosen_move),
            Err(err) => {
                error!("no move for {} on an unfinished board: {}", player, err);
                None
            }
        }
    }

    /// Searches the given root moves only. The driver uses this during a
    /// chained capture, when only the continuation hops are legal.
    pub fn search_moves(
        &mut self,
        board: &Board,
        player: Color,
        candidates: &[Move],
    ) -> Result<SearchResult, SearchError> {
        let depth = self.config.depth();
        if depth == 0 {
            return Err(SearchError::DepthTooLow);
        }
        if candidates.is_empty() {
            return Err(SearchError::NoAvailableMoves);
        }

        self.stats = SearchStats {
            depth,
            ..SearchStats::default()
        };
        let started = Instant::now();

        let (best_move, score) = self.search_root(board, player, candidates, depth);
        let chosen_move = self.maybe_inject_error(best_move, candidates);

        let duration = started.elapsed();
        self.stats.last_score = Some(score);
        self.stats.last_duration = Some(duration);
        info!(
            "{} searched {} positions ({} cutoffs) at depth {} in {:?}, best {} scoring {}",
            self.config.algorithm(),
            self.stats.positions_searched,
            self.stats.cutoffs,
            depth,
            duration,
            best_move,
            score
        );

        Ok(SearchResult {
            chosen_move,
            best_move,
            score,
        })
    }

    fn search_root(
        &mut self,
        board: &Board,
        player: Color,
        candidates: &[Move],
        depth: u8,
    ) -> (Move, f64) {
        let maximize = player.maximize_score();
        let mut best_move = candidates[0];
        let mut best_score = if maximize {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut alpha = f64::NEG_INFINITY;
        let mut beta = f64::INFINITY;

        for &candidate in candidates {
            let child = candidate.apply(board);
            let score = match self.config.algorithm() {
                Algorithm::Minimax => self.minimax(&child, player.opposite(), depth - 1),
                Algorithm::AlphaBeta if maximize => self.alpha_beta_min(&child, depth - 1, alpha, beta),
                Algorithm::AlphaBeta => self.alpha_beta_max(&child, depth - 1, alpha, beta),
            };
            debug!("root move {} scored {}", candidate, score);

            // strict comparisons keep the first of equally scored moves
            if maximize && score > best_score || !maximize && score < best_score {
                best_score = score;
                best_move = candidate;
            }
            if maximize {
                alpha = alpha.max(best_score);
            } else {
                beta = beta.min(best_score);
            }
        }

        (best_move, best_score)
    }

    fn minimax(&mut self, board: &Board, to_move: Color, depth: u8) -> f64 {
        self.stats.positions_searched += 1;

        if depth == 0 || is_terminal(board, to_move) {
            return self.evaluator.evaluate(board, to_move);
        }

        let maximize = to_move.maximize_score();
        let mut best_score = if maximize {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for next_move in legal_moves(board, to_move) {
            let score = self.minimax(&next_move.apply(board), to_move.opposite(), depth - 1);
            best_score = if maximize {
                best_score.max(score)
            } else {
                best_score.min(score)
            };
        }

        best_score
    }

    /// White to move.
    fn alpha_beta_max(&mut self, board: &Board, depth: u8, mut alpha: f64, beta: f64) -> f64 {
        self.stats.positions_searched += 1;

        if depth == 0 || is_terminal(board, Color::White) {
            return self.evaluator.evaluate(board, Color::White);
        }

        let mut best_score = f64::NEG_INFINITY;
        for next_move in legal_moves(board, Color::White) {
            let score = self.alpha_beta_min(&next_move.apply(board), depth - 1, alpha, beta);
            best_score = best_score.max(score);
            alpha = alpha.max(score);

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best_score
    }

    /// Black to move.
    fn alpha_beta_min(&mut self, board: &Board, depth: u8, alpha: f64, mut beta: f64) -> f64 {
        self.stats.positions_searched += 1;

        if depth == 0 || is_terminal(board, Color::Black) {
            return self.evaluator.evaluate(board, Color::Black);
        }

        let mut best_score = f64::INFINITY;
        for next_move in legal_moves(board, Color::Black) {
            let score = self.alpha_beta_max(&next_move.apply(board), depth - 1, alpha, beta);
            best_score = best_score.min(score);
            beta = beta.min(score);

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best_score
    }

    /// Draws one sample. Below the level's error probability, and with another
    /// move to choose, swaps the best move for a random other candidate.
    fn maybe_inject_error(&mut self, best_move: Move, candidates: &[Move]) -> Move {
        let sample: f64 = self.rng.gen();
        if sample >= self.config.error_probability() || candidates.len() < 2 {
            return best_move;
        }

        let others: Vec<Move> = candidates
            .iter()
            .copied()
            .filter(|candidate| *candidate != best_move)
            .collect();

        match others.choose(&mut self.rng) {
            Some(&other) => {
                warn!("playing {} instead of the best move {}", other, best_move);
                self.stats.injected_error = true;
                other
            }
            None => best_move,
        }
    }
}
