pub mod board;
pub mod difficulty;
pub mod evaluate;
pub mod game;
pub mod input_handler;
pub mod move_generation;
pub mod moves;
pub mod searcher;
