//! Interactive driver for a single round.

use anyhow::Result;
use colored::Colorize;
use hilo_game::{GuessInput, GuessResult, Round, SECRET_MAX, SECRET_MIN, SessionState, Tier, parse_guess};

use crate::render;
use crate::util::{pause, read_line};

/// Run one round to completion and record it, unless the player quits.
///
/// The quit sentinel and EOF both abandon the round without a record; every
/// other path ends in exactly one `record_round` call.
pub fn play_round(session: &mut SessionState) -> Result<()> {
    let difficulty = session.select_difficulty();
    render::round_banner(difficulty);

    let mut rng = rand::thread_rng();
    let mut round = Round::new(difficulty, &mut rng);
    println!(
        "I'm thinking of a number between {SECRET_MIN} and {SECRET_MAX}. You have {} attempts.",
        round.max_attempts()
    );
    println!("💡 I'll grade each guess with a smart hint!");
    println!("💡 Enter 'q' to quit the round");

    while !round.is_over() {
        let attempt = round.attempts() + 1;
        let prompt = format!("\nGuess #{attempt} ({} left): ", round.remaining());
        let Some(line) = read_line(&prompt)? else {
            println!("\n👋 Round abandoned!");
            return Ok(());
        };

        match parse_guess(&line) {
            Ok(GuessInput::Quit) => {
                println!("👋 Round abandoned!");
                return Ok(());
            }
            Err(err) => {
                println!("{} {err}", "❌".red());
            }
            Ok(GuessInput::Value(value)) => {
                let feedback = round.submit(value);
                println!("💡 {}", feedback.hint);
                match feedback.result {
                    GuessResult::Won { tier } => {
                        println!(
                            "\n{} The number was {}",
                            "🎉 You got it!".bright_green().bold(),
                            round.secret()
                        );
                        println!("⏱️ Time: {:.1}s", round.elapsed_secs());
                        if let Some(tier) = tier {
                            println!("🏅 {tier}");
                        }
                    }
                    GuessResult::TooLow => println!("📈 Too low"),
                    GuessResult::TooHigh => println!("📉 Too high"),
                }
            }
        }
    }

    if round.is_exhausted() {
        println!(
            "\n{} The answer was {}",
            "😔 Out of attempts!".red(),
            round.secret()
        );
        println!("🌱 {}", Tier::Beginner);
    }

    let unlocked = session.record_round(round.into_record());
    for achievement in unlocked {
        println!(
            "{} {} {achievement}!",
            render::achievement_badge(achievement),
            "Achievement unlocked:".bright_magenta().bold()
        );
    }

    pause()?;
    Ok(())
}
