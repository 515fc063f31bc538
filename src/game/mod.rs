pub mod display;
pub mod engine;
pub mod player;
pub mod r#loop; // `loop` is reserved keyword, need to escape with `r#`
pub mod position_counter;
