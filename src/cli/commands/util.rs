//! Shared utilities for CLI commands.

use std::process;
use std::time::Duration;

use checkers::difficulty::DifficultyConfig;
use checkers::game::engine::EngineConfig;
use checkers::game::player::Player;
use checkers::game::r#loop::{GameLoop, GameResult};
use checkers::searcher::{Algorithm, SearchConfig};
use structopt::StructOpt;

/// Search options shared by every command that asks the computer for moves.
#[derive(StructOpt)]
pub struct SearchArgs {
    #[structopt(
        short,
        long,
        default_value = "3",
        help = "Difficulty level; `checkers levels` lists them"
    )]
    pub level: u8,
    #[structopt(short, long, default_value = "alpha-beta")]
    pub algorithm: Algorithm,
    #[structopt(short, long, help = "Search depth, overriding the level's depth")]
    pub depth: Option<u8>,
}

impl SearchArgs {
    /// Exits with a message if the level is unknown.
    pub fn config(&self) -> SearchConfig {
        let mut difficulty = DifficultyConfig::new();
        if !difficulty.set_level(self.level) {
            eprintln!(
                "Unknown difficulty level {}; run `checkers levels` to list them.",
                self.level
            );
            process::exit(1);
        }

        let config = SearchConfig::new(self.algorithm, difficulty);
        match self.depth {
            Some(depth) => config.with_depth(depth),
            None => config,
        }
    }
}

pub(crate) fn run_game_loop(
    config: EngineConfig,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    frame_delay: Option<Duration>,
    move_limit: Option<usize>,
) {
    let mut game = GameLoop::new(config, white, black);
    if let Some(delay) = frame_delay {
        game = game.with_frame_delay(delay);
    }
    if let Some(limit) = move_limit {
        game = game.with_move_limit(limit);
    }

    match game.run() {
        GameResult::Ended(_) => {}
        GameResult::Abandoned => println!("Game abandoned."),
        GameResult::MoveLimitReached => println!("Move limit reached, no winner."),
    }
}
