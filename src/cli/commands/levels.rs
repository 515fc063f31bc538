//! Levels command - list the difficulty levels.

use checkers::difficulty::{levels, DEFAULT_LEVEL};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct LevelsArgs {}

impl Command for LevelsArgs {
    fn execute(self) {
        for (number, level) in levels() {
            let marker = if number == DEFAULT_LEVEL { " (default)" } else { "" };
            println!("{}: {}{}", number, level, marker);
        }
    }
}
