use std::time::{Duration, Instant};

use log::{error, info};

use crate::board::color::Color;
use crate::evaluate::GameEnding;
use crate::game::display::{stats_panel, GameDisplay};
use crate::game::engine::{Engine, EngineConfig};
use crate::game::player::{Player, PlayerError};

/// How a game finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Ended(GameEnding),
    /// A player quit, or could not produce a move.
    Abandoned,
    /// Nobody won within the configured number of moves.
    MoveLimitReached,
}

/// Time one side's searcher spent choosing moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThinkSummary {
    pub moves: usize,
    pub total: Duration,
}

impl ThinkSummary {
    fn record(&mut self, duration: Duration) {
        self.moves += 1;
        self.total += duration;
    }

    pub fn average(&self) -> Option<Duration> {
        if self.moves == 0 {
            return None;
        }
        Some(self.total / self.moves as u32)
    }
}

pub struct GameLoop {
    engine: Engine,
    ui: GameDisplay,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    /// The engine can calculate moves very quickly, so adding a slight delay
    /// between computer moves makes the game easier to observe.
    frame_delay: Option<Duration>,
    move_limit: Option<usize>,
    render: bool,
    white_thinking: ThinkSummary,
    black_thinking: ThinkSummary,
}

impl GameLoop {
    pub fn new(config: EngineConfig, white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        Self {
            engine: Engine::with_config(config),
            ui: GameDisplay::new(),
            white,
            black,
            frame_delay: None,
            move_limit: None,
            render: true,
            white_thinking: ThinkSummary::default(),
            black_thinking: ThinkSummary::default(),
        }
    }

    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = Some(delay);
        self
    }

    /// Stops the game once `limit` moves have been played. Each hop of a
    /// chained capture counts as a move.
    pub fn with_move_limit(mut self, limit: usize) -> Self {
        self.move_limit = Some(limit);
        self
    }

    /// Plays without drawing the board.
    pub fn headless(mut self) -> Self {
        self.render = false;
        self
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn think_summary(&self, color: Color) -> ThinkSummary {
        match color {
            Color::White => self.white_thinking,
            Color::Black => self.black_thinking,
        }
    }

    pub fn run(&mut self) -> GameResult {
        let result = self.play();
        self.log_summary();
        result
    }

    fn play(&mut self) -> GameResult {
        loop {
            if let Some(ending) = self.engine.check_game_over() {
                self.draw(None);
                println!("{}", ending);
                return GameResult::Ended(ending);
            }
            if let Some(limit) = self.move_limit {
                if self.engine.move_history().len() >= limit {
                    info!("stopping after {} moves", limit);
                    return GameResult::MoveLimitReached;
                }
            }

            let turn = self.engine.turn();
            let candidates = self.engine.valid_moves();
            let player = match turn {
                Color::White => &mut self.white,
                Color::Black => &mut self.black,
            };

            let stats = player
                .search_stats()
                .zip(player.search_config())
                .map(|(stats, config)| stats_panel(stats, config));
            let is_human = player.is_human();
            self.draw(stats.as_deref());
            if is_human {
                println!("Enter your move:");
            }

            let player = match turn {
                Color::White => &mut self.white,
                Color::Black => &mut self.black,
            };
            let started = Instant::now();
            let requested = player.request_move(self.engine.board(), &candidates);

            let chosen = match requested {
                Ok(Some(chosen)) => chosen,
                Ok(None) => continue,
                Err(PlayerError::Exit) => {
                    info!("{} left the game", turn);
                    return GameResult::Abandoned;
                }
                Err(err) => {
                    error!("{} could not move: {}", turn, err);
                    return GameResult::Abandoned;
                }
            };

            if !is_human {
                info!("{} played {} after {:?}", turn, chosen, started.elapsed());
                let thought = player
                    .search_stats()
                    .and_then(|stats| stats.last_duration)
                    .unwrap_or_else(|| started.elapsed());
                match turn {
                    Color::White => self.white_thinking.record(thought),
                    Color::Black => self.black_thinking.record(thought),
                }
            }

            match self.engine.make_move(chosen) {
                Ok(outcome) => {
                    if outcome.captured.len() > 1 {
                        info!("{} took {} pieces at once", turn, outcome.captured.len());
                    }
                    if !is_human {
                        if let Some(delay) = self.frame_delay {
                            std::thread::sleep(delay);
                        }
                    }
                }
                Err(err) => println!("error: {}", err),
            }
        }
    }

    fn log_summary(&self) {
        for color in Color::ALL {
            let summary = self.think_summary(color);
            if let Some(average) = summary.average() {
                info!(
                    "{} searched {} moves in {:?} ({:?} per move)",
                    color, summary.moves, summary.total, average
                );
            }
        }
    }

    fn draw(&mut self, stats: Option<&str>) {
        if !self.render {
            return;
        }
        self.ui.render_game_state(
            self.engine.board(),
            self.engine.turn(),
            self.engine.last_move(),
            stats,
        );
    }
}
