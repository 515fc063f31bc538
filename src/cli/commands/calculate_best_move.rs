//! Calculate best move command - determine the best move from a position.

use checkers::board::color::Color;
use checkers::board::Board;
use checkers::evaluate;
use checkers::searcher::Searcher;
use structopt::StructOpt;

use super::util::SearchArgs;
use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(flatten)]
    pub search: SearchArgs,
    #[structopt(short = "p", long = "position")]
    pub starting_position: Board,
    #[structopt(short, long, default_value = "white")]
    pub turn: Color,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        if let Some(ending) = evaluate::game_ending(&self.starting_position, self.turn) {
            eprintln!("The game is already over: {}.", ending);
            return;
        }

        let mut searcher = Searcher::new(self.search.config());
        match searcher.best_move(&self.starting_position, self.turn) {
            Some(best_move) => println!("{}", best_move),
            None => eprintln!("Failed to calculate best move."),
        }
    }
}
