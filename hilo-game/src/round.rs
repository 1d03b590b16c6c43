//! Single-round state machine.
//!
//! A round owns the secret, the attempt budget, and the monotonic start
//! instant. The caller feeds it parsed guesses one at a time; invalid input
//! never reaches `submit` and so never consumes an attempt. The round is
//! terminal-agnostic: all prompting and printing lives in the front end.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;
use thiserror::Error;

use crate::difficulty::Difficulty;
use crate::hint::Hint;
use crate::session::RoundRecord;

pub const SECRET_MIN: u32 = 1;
pub const SECRET_MAX: u32 = 100;

const QUIT_SENTINEL: &str = "q";

/// Performance tier awarded on a win, by attempts used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Godlike,
    Master,
    Expert,
    Skilled,
    Novice,
    /// Fixed tier for a round that ran out of attempts.
    Beginner,
}

impl Tier {
    /// Tier for a winning round. Attempts above 10 are left unranked; that
    /// can only happen on easy difficulty (budget 12).
    #[must_use]
    pub const fn for_win(attempts: u32) -> Option<Self> {
        match attempts {
            1 => Some(Self::Godlike),
            2..=3 => Some(Self::Master),
            4..=5 => Some(Self::Expert),
            6..=7 => Some(Self::Skilled),
            8..=10 => Some(Self::Novice),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Godlike => "Godlike! Got it in one!",
            Self::Master => "Master class! Impressive!",
            Self::Expert => "Expert level! Nicely done!",
            Self::Skilled => "Skilled! Not bad at all!",
            Self::Novice => "Novice! Keep practicing!",
            Self::Beginner => "Beginner! More practice needed!",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a line of input was rejected. None of these consume an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessParseError {
    #[error("please enter a number")]
    Empty,
    #[error("please enter a valid number")]
    NotANumber,
    #[error("please enter a number between {SECRET_MIN} and {SECRET_MAX}")]
    OutOfRange,
}

/// A line of player input, after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessInput {
    /// A guess inside [`SECRET_MIN`], [`SECRET_MAX`].
    Value(u32),
    /// The quit sentinel: abandon the round, record nothing.
    Quit,
}

/// Validate one raw input line. The quit sentinel is matched
/// case-insensitively before any numeric parsing.
pub fn parse_guess(line: &str) -> Result<GuessInput, GuessParseError> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case(QUIT_SENTINEL) {
        return Ok(GuessInput::Quit);
    }
    if trimmed.is_empty() {
        return Err(GuessParseError::Empty);
    }
    let value: i64 = trimmed.parse().map_err(|_| GuessParseError::NotANumber)?;
    let value = u32::try_from(value).map_err(|_| GuessParseError::OutOfRange)?;
    if !(SECRET_MIN..=SECRET_MAX).contains(&value) {
        return Err(GuessParseError::OutOfRange);
    }
    Ok(GuessInput::Value(value))
}

/// Outcome of one accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    Won { tier: Option<Tier> },
    TooLow,
    TooHigh,
}

/// Hint plus comparison for one accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessFeedback {
    pub hint: Hint,
    pub result: GuessResult,
}

/// One in-progress round: `AWAIT_GUESS` until won or exhausted.
#[derive(Debug)]
pub struct Round {
    secret: u32,
    difficulty: Difficulty,
    attempts: u32,
    won: bool,
    started: Instant,
}

impl Round {
    /// Start a round with a uniformly random secret.
    pub fn new<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Self {
        Self::with_secret(difficulty, rng.gen_range(SECRET_MIN..=SECRET_MAX))
    }

    /// Start a round with a known secret. Deterministic entry point for
    /// tests and scripted play.
    #[must_use]
    pub fn with_secret(difficulty: Difficulty, secret: u32) -> Self {
        debug_assert!((SECRET_MIN..=SECRET_MAX).contains(&secret));
        log::debug!("round start: difficulty={difficulty} budget={}", difficulty.max_attempts());
        Self {
            secret,
            difficulty,
            attempts: 0,
            won: false,
            started: Instant::now(),
        }
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.difficulty.max_attempts()
    }

    /// Attempts consumed so far.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Guesses left in the budget.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.max_attempts().saturating_sub(self.attempts)
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// True once the budget is spent without a win.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        !self.won && self.attempts >= self.max_attempts()
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.won || self.is_exhausted()
    }

    /// Consume one attempt on an already-validated guess.
    ///
    /// The hint is graded against the attempt number this guess occupies
    /// (1-indexed), so the opening guess always gets the opening hint.
    pub fn submit(&mut self, guess: u32) -> GuessFeedback {
        self.attempts += 1;
        let hint = Hint::grade(guess, self.secret, self.attempts);
        let result = if guess == self.secret {
            self.won = true;
            GuessResult::Won {
                tier: Tier::for_win(self.attempts),
            }
        } else if guess < self.secret {
            GuessResult::TooLow
        } else {
            GuessResult::TooHigh
        };
        GuessFeedback { hint, result }
    }

    /// The secret, revealed when the round is over.
    #[must_use]
    pub const fn secret(&self) -> u32 {
        self.secret
    }

    /// Seconds since the round started, from the monotonic clock.
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    /// Build the ledger entry for this round. Called exactly once, after the
    /// round reaches `WON` or `EXHAUSTED`.
    #[must_use]
    pub fn into_record(self) -> RoundRecord {
        RoundRecord {
            played_at: chrono::Local::now(),
            attempts: self.attempts,
            elapsed_secs: self.elapsed_secs(),
            won: self.won,
            secret: self.secret,
        }
    }
}
