use std::collections::BTreeMap;
use std::fmt;

use log::debug;
use once_cell::sync::Lazy;

pub const DEFAULT_LEVEL: u8 = 3;

/// One row of the difficulty table.
#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyLevel {
    pub name: &'static str,
    pub depth: u8,
    /// Chance of playing a random non-best move instead of the search result.
    pub error_probability: f64,
    pub description: &'static str,
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (depth {}, {:.0}% errors): {}",
            self.name,
            self.depth,
            self.error_probability * 100.0,
            self.description
        )
    }
}

static LEVELS: Lazy<BTreeMap<u8, DifficultyLevel>> = Lazy::new(|| {
    let mut levels = BTreeMap::new();
    levels.insert(
        1,
        DifficultyLevel {
            name: "Beginner",
            depth: 1,
            error_probability: 0.3,
            description: "looks one move ahead and blunders often",
        },
    );
    levels.insert(
        2,
        DifficultyLevel {
            name: "Intermediate",
            depth: 3,
            error_probability: 0.1,
            description: "competent, with the occasional slip",
        },
    );
    levels.insert(
        3,
        DifficultyLevel {
            name: "Expert",
            depth: 5,
            error_probability: 0.0,
            description: "full strength, never errs on purpose",
        },
    );
    levels
});

pub fn level(number: u8) -> Option<&'static DifficultyLevel> {
    LEVELS.get(&number)
}

/// Every level in ascending order.
pub fn levels() -> impl Iterator<Item = (u8, &'static DifficultyLevel)> {
    LEVELS.iter().map(|(number, level)| (*number, level))
}

/// The active difficulty level. Only changes through `set_level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyConfig {
    level: u8,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DifficultyConfig {
    pub fn new() -> Self {
        Self {
            level: DEFAULT_LEVEL,
        }
    }

    /// Switches to `number`. Returns false and leaves the level unchanged if
    /// there is no such level.
    pub fn set_level(&mut self, number: u8) -> bool {
        match level(number) {
            Some(new_level) => {
                debug!("difficulty set to {} ({})", number, new_level.name);
                self.level = number;
                true
            }
            None => false,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn current(&self) -> &'static DifficultyLevel {
        &LEVELS[&self.level]
    }

    pub fn depth(&self) -> u8 {
        self.current().depth
    }

    pub fn error_probability(&self) -> f64 {
        self.current().error_probability
    }
}
