//! Hilo Game Engine
//!
//! Terminal-agnostic core logic for the hilo adaptive guessing game.
//! This crate provides session tracking, difficulty selection, the per-round
//! state machine, and hint grading without any I/O dependencies.

pub mod difficulty;
pub mod hint;
pub mod round;
pub mod session;

// Re-export commonly used types
pub use difficulty::Difficulty;
pub use hint::Hint;
pub use round::{
    GuessFeedback, GuessInput, GuessParseError, GuessResult, Round, SECRET_MAX, SECRET_MIN, Tier,
    parse_guess,
};
pub use session::{Achievement, RoundRecord, SessionState, Statistics};
