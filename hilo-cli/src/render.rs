//! Menu, statistics, achievement, and history views.

use colored::Colorize;
use hilo_game::{Achievement, Difficulty, SessionState};

const HISTORY_WINDOW: usize = 10;
const RECENT_WINDOW: usize = 3;

pub fn menu() {
    println!("{}", "🎮 Hilo - Smart Number Guessing".bright_cyan().bold());
    println!("{}", "=".repeat(50));
    println!("1. Play a round");
    println!("2. Statistics");
    println!("3. Achievements");
    println!("4. History");
    println!("5. Quit");
    println!("{}", "=".repeat(50));
}

pub fn round_banner(difficulty: Difficulty) {
    println!("{}", "🎮 Hilo - Smart Number Guessing".bright_cyan().bold());
    println!("{}", "=".repeat(40));
    let line = match difficulty {
        Difficulty::Hard => format!("🔥 Hard mode: {} attempts", difficulty.max_attempts()).red(),
        Difficulty::Easy => format!("😊 Easy mode: {} attempts", difficulty.max_attempts()).green(),
        Difficulty::Normal => {
            format!("⚖️ Normal mode: {} attempts", difficulty.max_attempts()).yellow()
        }
    };
    println!("{line}");
}

pub const fn achievement_badge(achievement: Achievement) -> &'static str {
    match achievement {
        Achievement::FirstWin => "🏆",
        Achievement::PerfectGuess => "🎯",
        Achievement::MasterPlayer => "👑",
        Achievement::PersistentPlayer => "💪",
    }
}

pub fn stats(session: &SessionState) {
    let stats = session.stats();
    println!("\n{}", "📊 Statistics".bright_yellow().bold());
    println!("Games played: {}", stats.total_games);
    println!("Wins: {}", stats.wins);
    if stats.total_games > 0 {
        println!("Win rate: {:.1}%", stats.win_rate());
    }
    if let Some(best) = stats.best_score {
        println!("Best score: {best} attempts");
    }
    if stats.average_attempts > 0.0 {
        println!("Average attempts: {:.1}", stats.average_attempts);
    }
    if session.history().len() >= RECENT_WINDOW {
        let recent = session.recent_wins(RECENT_WINDOW);
        println!(
            "Last {RECENT_WINDOW} rounds: {:.1}% won",
            recent as f64 / RECENT_WINDOW as f64 * 100.0
        );
    }
}

pub fn achievements(session: &SessionState) {
    println!("\n{}", "🏆 Achievements".bright_yellow().bold());
    for (achievement, unlocked) in session.achievements() {
        let marker = if unlocked { "✅" } else { "❌" };
        println!("{marker} {achievement}");
    }
    println!(
        "\nProgress: {}/{}",
        session.unlocked_count(),
        Achievement::ALL.len()
    );
}

pub fn history(session: &SessionState) {
    println!("\n{}", "📜 History".bright_yellow().bold());
    let records = session.history();
    if records.is_empty() {
        println!("No rounds played yet");
        return;
    }

    let start = records.len().saturating_sub(HISTORY_WINDOW);
    for (i, record) in records[start..].iter().enumerate() {
        let marker = if record.won { "✅" } else { "❌" };
        println!(
            "{:2}. {} - {marker} {} attempts ({:.1}s)",
            i + 1,
            record.played_at.format("%Y-%m-%d %H:%M"),
            record.attempts,
            record.elapsed_secs
        );
    }

    let total = session.total_play_secs();
    println!("\n{}", "📈 Totals".bright_yellow());
    println!("Total play time: {total:.1}s");
    println!("Average round time: {:.1}s", total / records.len() as f64);
}
