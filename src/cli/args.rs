//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_move::CalculateBestMoveArgs, count_positions::CountPositionsArgs,
    levels::LevelsArgs, play::PlayArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(name = "checkers", about = "A checkers engine implemented in Rust ⛂")]
pub enum Checkers {
    #[structopt(
        name = "play",
        about = "Play a game against the computer at the given `--level` (default: 3). Your color is chosen at random unless you specify it with `--color`. Type moves as `c6-d5`, `hint` for a suggestion, or `quit`. The initial position can be given with `--position` (default: starting position)."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself at the given `--level` (default: 3). The initial position can be given with `--position` (default: starting position)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Determine the best move from a position given with `--position` (required) for the side given with `--turn` (default: white)."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the number of positions reachable from the starting position for each depth up to `--depth` (default: 4), and report the time it took."
    )]
    CountPositions(CountPositionsArgs),
    #[structopt(name = "levels", about = "List the difficulty levels.")]
    Levels(LevelsArgs),
}

impl crate::cli::commands::Command for Checkers {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Watch(cmd),
            CalculateBestMove(cmd),
            CountPositions(cmd),
            Levels(cmd),
        }
    }
}
