//! Count positions command - count possible positions at a given depth.

use checkers::board::DEFAULT_DIMENSION;
use checkers::game::position_counter::run_count_positions;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct CountPositionsArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(short = "n", long, default_value = "8")]
    pub dimension: usize,
}

impl Command for CountPositionsArgs {
    fn execute(self) {
        if let Err(err) = run_count_positions(self.depth, self.dimension) {
            eprintln!(
                "Cannot count positions: {} (the standard board is {}x{}).",
                err, DEFAULT_DIMENSION, DEFAULT_DIMENSION
            );
        }
    }
}
