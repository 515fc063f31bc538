//! Play command - play a game against the computer.

use checkers::board::color::Color;
use checkers::board::{Board, STARTING_POSITION};
use checkers::game::engine::EngineConfig;
use checkers::game::player::{ComputerPlayer, HumanPlayer, Player};
use structopt::StructOpt;

use super::util::{run_game_loop, SearchArgs};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short = "c", long = "color", default_value = "random")]
    pub color: Color,
    #[structopt(flatten)]
    pub search: SearchArgs,
    #[structopt(short = "p", long = "position", default_value = STARTING_POSITION)]
    pub starting_position: Board,
    #[structopt(long = "first-turn", default_value = "white")]
    pub first_turn: Color,
}

impl Command for PlayArgs {
    fn execute(self) {
        let search_config = self.search.config();
        let human: Box<dyn Player> =
            Box::new(HumanPlayer::from_stdin(self.color).with_advisor(search_config));
        let computer: Box<dyn Player> =
            Box::new(ComputerPlayer::new(self.color.opposite(), search_config));

        let (white, black) = match self.color {
            Color::White => (human, computer),
            Color::Black => (computer, human),
        };

        let config = EngineConfig {
            starting_position: self.starting_position,
            first_turn: self.first_turn,
        };
        run_game_loop(config, white, black, None, None);
    }
}
