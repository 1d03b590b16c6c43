//! Session-lifetime state: round history, derived statistics, achievements.
//!
//! One `SessionState` lives for the whole interactive process. It owns the
//! ordered round ledger, recomputes the aggregate statistics after every
//! recorded round, and tracks the one-way achievement flags.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::difficulty::Difficulty;

const MASTER_WINS: u32 = 5;
const PERSISTENT_GAMES: u32 = 10;

/// Immutable ledger entry for one finished round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Wall-clock time the round ended.
    pub played_at: DateTime<Local>,
    /// Guesses consumed (validation errors do not count).
    pub attempts: u32,
    /// Seconds from first prompt to round end.
    pub elapsed_secs: f64,
    pub won: bool,
    /// The secret the player was chasing.
    pub secret: u32,
}

/// Aggregate statistics, recomputed from the full history after each round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Statistics {
    pub total_games: u32,
    pub wins: u32,
    /// Fewest attempts among winning rounds. `None` until the first win.
    pub best_score: Option<u32>,
    /// Mean attempts over the entire history, wins and losses alike.
    pub average_attempts: f64,
}

impl Statistics {
    /// Win percentage in [0, 100]. Zero for an empty session.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.total_games) * 100.0
        }
    }
}

/// One-way unlock flags. Once earned, an achievement stays earned for the
/// rest of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    FirstWin,
    PerfectGuess,
    MasterPlayer,
    PersistentPlayer,
}

impl Achievement {
    /// Evaluation order for unlock checks. Multiple achievements may fire on
    /// the same round.
    pub const ALL: [Self; 4] = [
        Self::FirstWin,
        Self::PerfectGuess,
        Self::MasterPlayer,
        Self::PersistentPlayer,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::FirstWin => "First Victory",
            Self::PerfectGuess => "Perfect Guess",
            Self::MasterPlayer => "Guessing Master",
            Self::PersistentPlayer => "Persistence Pays",
        }
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
struct AchievementFlags {
    first_win: bool,
    perfect_guess: bool,
    master_player: bool,
    persistent_player: bool,
}

impl AchievementFlags {
    const fn get(self, achievement: Achievement) -> bool {
        match achievement {
            Achievement::FirstWin => self.first_win,
            Achievement::PerfectGuess => self.perfect_guess,
            Achievement::MasterPlayer => self.master_player,
            Achievement::PersistentPlayer => self.persistent_player,
        }
    }

    fn set(&mut self, achievement: Achievement) {
        match achievement {
            Achievement::FirstWin => self.first_win = true,
            Achievement::PerfectGuess => self.perfect_guess = true,
            Achievement::MasterPlayer => self.master_player = true,
            Achievement::PersistentPlayer => self.persistent_player = true,
        }
    }
}

/// Process-lifetime session state. Created zeroed, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SessionState {
    history: Vec<RoundRecord>,
    stats: Statistics,
    achievements: AchievementFlags,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished round, refresh the statistics, and evaluate the
    /// achievement rules against the updated totals. Returns achievements
    /// newly unlocked by this round, in evaluation order. Infallible.
    pub fn record_round(&mut self, record: RoundRecord) -> Vec<Achievement> {
        let attempts = record.attempts;
        let won = record.won;
        self.history.push(record);
        self.recompute_stats();
        log::debug!(
            "round recorded: games={} wins={} avg={:.2}",
            self.stats.total_games,
            self.stats.wins,
            self.stats.average_attempts
        );

        let mut unlocked = Vec::new();
        for achievement in Achievement::ALL {
            if !self.achievements.get(achievement) && self.rule_fires(achievement, attempts, won) {
                self.achievements.set(achievement);
                unlocked.push(achievement);
            }
        }
        unlocked
    }

    fn rule_fires(&self, achievement: Achievement, attempts: u32, won: bool) -> bool {
        match achievement {
            Achievement::FirstWin => won,
            Achievement::PerfectGuess => won && attempts == 1,
            Achievement::MasterPlayer => self.stats.wins >= MASTER_WINS,
            Achievement::PersistentPlayer => self.stats.total_games >= PERSISTENT_GAMES,
        }
    }

    // Full re-sum every time. An incremental running average is not
    // guaranteed to match under floating-point rounding.
    fn recompute_stats(&mut self) {
        let total = u32::try_from(self.history.len()).unwrap_or(u32::MAX);
        let wins = self.history.iter().filter(|r| r.won).count();
        let wins = u32::try_from(wins).unwrap_or(u32::MAX);
        let best = self
            .history
            .iter()
            .filter(|r| r.won)
            .map(|r| r.attempts)
            .min();
        let attempt_sum: f64 = self.history.iter().map(|r| f64::from(r.attempts)).sum();
        let average = if self.history.is_empty() {
            0.0
        } else {
            attempt_sum / f64::from(total)
        };
        self.stats = Statistics {
            total_games: total,
            wins,
            best_score: best,
            average_attempts: average,
        };
    }

    /// Difficulty for the next round, from cumulative performance.
    #[must_use]
    pub fn select_difficulty(&self) -> Difficulty {
        Difficulty::for_average(self.stats.total_games, self.stats.average_attempts)
    }

    #[must_use]
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    #[must_use]
    pub fn is_unlocked(&self, achievement: Achievement) -> bool {
        self.achievements.get(achievement)
    }

    /// Every achievement with its unlock state, in display order.
    pub fn achievements(&self) -> impl Iterator<Item = (Achievement, bool)> + '_ {
        Achievement::ALL.into_iter().map(|a| (a, self.achievements.get(a)))
    }

    #[must_use]
    pub fn unlocked_count(&self) -> usize {
        Achievement::ALL
            .into_iter()
            .filter(|a| self.achievements.get(*a))
            .count()
    }

    /// Wins among the most recent `window` rounds.
    #[must_use]
    pub fn recent_wins(&self, window: usize) -> usize {
        let start = self.history.len().saturating_sub(window);
        self.history[start..].iter().filter(|r| r.won).count()
    }

    /// Total seconds spent across all recorded rounds.
    #[must_use]
    pub fn total_play_secs(&self) -> f64 {
        self.history.iter().map(|r| r.elapsed_secs).sum()
    }
}
