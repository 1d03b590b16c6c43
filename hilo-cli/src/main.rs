mod play;
mod render;
mod util;

use anyhow::Result;
use colored::Colorize;
use hilo_game::SessionState;

use util::{clear_screen, pause, read_line};

fn main() -> Result<()> {
    env_logger::init();
    ctrlc::set_handler(|| {
        println!("\n\n👋 Interrupted - thanks for playing!");
        std::process::exit(0);
    })?;

    let mut session = SessionState::new();
    loop {
        clear_screen();
        render::menu();
        let Some(choice) = read_line("Choose an option (1-5): ")? else {
            break;
        };

        match choice.trim() {
            "1" => {
                clear_screen();
                // A failed round never takes down the menu loop.
                if let Err(err) = play::play_round(&mut session) {
                    log::error!("round failed: {err:#}");
                    println!("{} {err:#}", "❌ Something went wrong:".red());
                    pause()?;
                }
            }
            "2" => {
                render::stats(&session);
                pause()?;
            }
            "3" => {
                render::achievements(&session);
                pause()?;
            }
            "4" => {
                render::history(&session);
                pause()?;
            }
            "5" => break,
            "" => {
                println!("❌ Please pick an option!");
                pause()?;
            }
            other => {
                log::debug!("unrecognized menu choice: {other:?}");
                println!("❌ Invalid choice, enter a number from 1 to 5!");
                pause()?;
            }
        }
    }

    println!("👋 Thanks for playing!");
    Ok(())
}
