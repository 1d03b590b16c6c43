//! Graduated hint policy.
//!
//! Hints get sharper as the round progresses: the opening guess gets a fixed
//! nudge, later guesses are graded by how far they landed from the secret.
//! Thresholds tighten with each attempt so late-round hints stay useful.

use serde::{Deserialize, Serialize};
use std::fmt;

const ATTEMPT2_CLOSE: u32 = 10;
const ATTEMPT2_DIRECTION: u32 = 25;
const ATTEMPT3_CLOSE: u32 = 5;
const ATTEMPT3_NEARER: u32 = 15;
const LATE_ALMOST: u32 = 3;
const LATE_CLOSE: u32 = 8;

/// One graduated hint, graded from the guess distance and the attempt number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hint {
    Opening,
    VeryClose,
    RightDirection,
    FarOff,
    ExtremelyClose,
    GettingCloser,
    ThinkAgain,
    AlmostThere,
    VeryCloseRetry,
    KeepTrying,
}

impl Hint {
    /// Player-facing hint line.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Opening => "Take your first guess!",
            Self::VeryClose => "Very close!",
            Self::RightDirection => "Right direction, keep going!",
            Self::FarOff => "Way off, try another direction",
            Self::ExtremelyClose => "Extremely close! Just a tiny bit off!",
            Self::GettingCloser => "Getting closer!",
            Self::ThinkAgain => "Think it over again...",
            Self::AlmostThere => "Almost there!",
            Self::VeryCloseRetry => "Very close, try again!",
            Self::KeepTrying => "Keep trying!",
        }
    }

    /// Grade a guess. `attempt` is 1-indexed; the first attempt always gets
    /// the opening hint regardless of distance.
    #[must_use]
    pub fn grade(guess: u32, secret: u32, attempt: u32) -> Self {
        let diff = guess.abs_diff(secret);
        match attempt {
            0 | 1 => Self::Opening,
            2 => {
                if diff <= ATTEMPT2_CLOSE {
                    Self::VeryClose
                } else if diff <= ATTEMPT2_DIRECTION {
                    Self::RightDirection
                } else {
                    Self::FarOff
                }
            }
            3 => {
                if diff <= ATTEMPT3_CLOSE {
                    Self::ExtremelyClose
                } else if diff <= ATTEMPT3_NEARER {
                    Self::GettingCloser
                } else {
                    Self::ThinkAgain
                }
            }
            _ => {
                if diff <= LATE_ALMOST {
                    Self::AlmostThere
                } else if diff <= LATE_CLOSE {
                    Self::VeryCloseRetry
                } else {
                    Self::KeepTrying
                }
            }
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
