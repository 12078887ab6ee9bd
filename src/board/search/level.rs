//! Difficulty levels and their search depths.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Error type for difficulty level parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// Level outside 1-5
    OutOfRange { level: i64 },
    /// Input is not an integer
    NotANumber { found: String },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::OutOfRange { level } => {
                write!(f, "Level {level} out of range (must be 1-5)")
            }
            LevelError::NotANumber { found } => {
                write!(f, "Invalid level '{found}', expected a number 1-5")
            }
        }
    }
}

impl std::error::Error for LevelError {}

/// Computer difficulty, 1 (weakest) to 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(1);
    pub const MAX: Level = Level(5);

    /// All levels, weakest first
    pub const ALL: [Level; 5] = [Level(1), Level(2), Level(3), Level(4), Level(5)];

    pub fn new(level: u8) -> Result<Self, LevelError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&level) {
            Ok(Level(level))
        } else {
            Err(LevelError::OutOfRange {
                level: i64::from(level),
            })
        }
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Search depth in plies for this level
    #[must_use]
    pub const fn depth(self) -> u32 {
        match self.0 {
            1 => 1,
            2 | 3 => 2,
            _ => 3,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level(2)
    }
}

impl TryFrom<u8> for Level {
    type Error = LevelError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Level::new(level)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s.trim().parse().map_err(|_| LevelError::NotANumber {
            found: s.to_string(),
        })?;
        u8::try_from(value)
            .map_err(|_| LevelError::OutOfRange { level: value })
            .and_then(Level::new)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
