//! Adaptive difficulty selection driven by session performance.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const HARD_AVERAGE_MAX: f64 = 4.0;
const NORMAL_AVERAGE_MAX: f64 = 6.0;

/// Difficulty tier for a single round. Controls only the attempt budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }

    /// Maximum guesses granted for a round at this difficulty.
    #[must_use]
    pub const fn max_attempts(self) -> u32 {
        match self {
            Self::Easy => 12,
            Self::Normal => 10,
            Self::Hard => 8,
        }
    }

    /// Pick the tier for the next round from cumulative performance.
    ///
    /// A fresh session always starts at `Normal`. Afterwards the average
    /// attempt count over the whole history decides: players who win fast
    /// get fewer guesses, struggling players get more.
    #[must_use]
    pub fn for_average(total_games: u32, average_attempts: f64) -> Self {
        if total_games == 0 {
            return Self::Normal;
        }
        if average_attempts <= HARD_AVERAGE_MAX {
            Self::Hard
        } else if average_attempts <= NORMAL_AVERAGE_MAX {
            Self::Normal
        } else {
            Self::Easy
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "normal" => Ok(Self::Normal),
            "hard" => Ok(Self::Hard),
            _ => Err(()),
        }
    }
}
