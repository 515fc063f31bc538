//! Watch command - watch the computer play against itself.

use std::time::Duration;

use checkers::board::color::Color;
use checkers::board::{Board, STARTING_POSITION};
use checkers::game::engine::EngineConfig;
use checkers::game::player::ComputerPlayer;
use structopt::StructOpt;

use super::util::{run_game_loop, SearchArgs};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(flatten)]
    pub search: SearchArgs,
    #[structopt(short = "p", long = "position", default_value = STARTING_POSITION)]
    pub starting_position: Board,
    #[structopt(
        long = "delay-ms",
        default_value = "1000",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
    #[structopt(
        long = "max-moves",
        default_value = "300",
        help = "Stop the game after this many moves"
    )]
    pub max_moves: usize,
}

impl Command for WatchArgs {
    fn execute(self) {
        let search_config = self.search.config();
        let config = EngineConfig {
            starting_position: self.starting_position,
            first_turn: Color::White,
        };

        run_game_loop(
            config,
            Box::new(ComputerPlayer::new(Color::White, search_config)),
            Box::new(ComputerPlayer::new(Color::Black, search_config)),
            Some(Duration::from_millis(self.delay_ms)),
            Some(self.max_moves),
        );
    }
}
