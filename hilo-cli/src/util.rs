//! Line-oriented terminal helpers.

use std::io::{self, Write};

/// Clear the screen and home the cursor.
pub fn clear_screen() {
    print!("\x1b[2J\x1b[1;1H");
    let _ = io::stdout().flush();
}

/// Print a prompt and read one line. Returns `None` on EOF.
pub fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\n', '\r']).to_string()))
}

/// Block until the player presses Enter (or EOF).
pub fn pause() -> io::Result<()> {
    read_line("\nPress Enter to return to the menu...").map(|_| ())
}
