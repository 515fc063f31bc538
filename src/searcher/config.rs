use std::fmt;
use std::str::FromStr;

use crate::difficulty::DifficultyConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    Minimax,
    #[default]
    AlphaBeta,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alpha-beta",
        };
        write!(f, "{}", name)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Algorithm {
    type Err = ParseError;
    fn from_str(algorithm: &str) -> Result<Self, Self::Err> {
        match algorithm {
            "minimax" => Ok(Algorithm::Minimax),
            "alpha-beta" | "alphabeta" => Ok(Algorithm::AlphaBeta),
            _ => Err("invalid algorithm; options are: minimax, alpha-beta"),
        }
    }
}

/// How the computer picks its moves. Changed between searches, never during
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SearchConfig {
    algorithm: Algorithm,
    difficulty: DifficultyConfig,
    depth_override: Option<u8>,
}

impl SearchConfig {
    pub fn new(algorithm: Algorithm, difficulty: DifficultyConfig) -> Self {
        Self {
            algorithm,
            difficulty,
            depth_override: None,
        }
    }

    /// Searches `depth` plies deep instead of the difficulty level's depth.
    /// The level's error probability still applies.
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth_override = Some(depth);
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    pub fn difficulty(&self) -> &DifficultyConfig {
        &self.difficulty
    }

    pub fn set_level(&mut self, level: u8) -> bool {
        self.difficulty.set_level(level)
    }

    pub fn depth(&self) -> u8 {
        self.depth_override.unwrap_or_else(|| self.difficulty.depth())
    }

    pub fn error_probability(&self) -> f64 {
        self.difficulty.error_probability()
    }
}
