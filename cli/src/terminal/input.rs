use std::io::{self, Write};

use colored::*;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Raw mode is always released, even when reading bails out.
struct RawMode;

impl RawMode {
    fn enable() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// One-shot confirmation prompt. 'y' proceeds, any other key aborts.
pub fn confirm(question: &str) -> anyhow::Result<bool> {
    print!("{} {} ", question, "[y/N]".bright_black());
    io::stdout().flush()?;

    let answer = {
        let _raw = RawMode::enable()?;
        loop {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                break matches!(key_event.code, KeyCode::Char('y') | KeyCode::Char('Y'));
            }
        }
    };

    println!("{}", if answer { "y" } else { "n" });
    Ok(answer)
}
