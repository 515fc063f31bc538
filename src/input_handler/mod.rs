//! Move input parsing.

use std::io::BufRead;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::square::Square;

static MOVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-z][1-9][0-9]?)\s*[-x ]?\s*([a-z][1-9][0-9]?)$")
        .expect("MOVE_RE regex should be valid")
});

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("end of input")]
    EndOfInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    Squares { from: Square, to: Square },
    UseEngine,
    Exit,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().to_lowercase();

        match trimmed.as_str() {
            "q" | "quit" | "exit" => return Ok(MoveInput::Exit),
            "?" | "hint" => return Ok(MoveInput::UseEngine),
            _ => {}
        }

        let invalid = || InputError::InvalidInput {
            input: input.to_string(),
        };
        let caps = MOVE_RE.captures(&trimmed).ok_or_else(invalid)?;
        let from = Square::from_notation(&caps[1]).ok_or_else(invalid)?;
        let to = Square::from_notation(&caps[2]).ok_or_else(invalid)?;

        Ok(MoveInput::Squares { from, to })
    }
}

/// Reads and parses one line, e.g. `c3-d4`, `c3 d4`, `c3xe5`, `hint` or `quit`.
pub fn read_move_input<R: BufRead>(reader: &mut R) -> Result<MoveInput, InputError> {
    let mut input = String::new();
    let read = reader
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;

    if read == 0 {
        return Err(InputError::EndOfInput);
    }

    input.parse()
}
