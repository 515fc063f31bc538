mod cli;

use cli::commands::Command;
use cli::Checkers;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    Checkers::from_args().execute();
}
