//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a whole row, press Enter, read
//! the traffic lights.

use crate::core::{Attempt, SessionConfig};
use crate::output::{write_board, write_outcome};
use crate::provider::SecretProvider;
use crate::session::{AttemptError, GameState};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error or the provider can't produce a
/// secret for the configuration.
pub fn run_simple<P: SecretProvider>(config: SessionConfig, provider: &mut P) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(config, provider, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the simple mode over arbitrary input and output streams
///
/// Ends when the player quits, declines another game, or input runs out.
///
/// # Errors
///
/// Returns an error if reading or writing fails or a new session can't be
/// started.
pub fn run_simple_with<P, R, W>(
    config: SessionConfig,
    provider: &mut P,
    input: &mut R,
    out: &mut W,
) -> Result<()>
where
    P: SecretProvider,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                   Traffic Light - Simple Mode                ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    let kind = config.mode().name().to_lowercase();
    writeln!(out, "Guess the hidden {kind}. After each attempt:")?;
    writeln!(out, "  {} right character, right place", "green".green().bold())?;
    writeln!(out, "  {} in the answer, somewhere else", "amber".yellow().bold())?;
    writeln!(out, "  {}   not in the answer", "red".red().bold())?;
    writeln!(out, "\nCommands: ':quit' to exit, ':new' for a new game\n")?;

    let mut state = GameState::begin(config, provider)?;
    writeln!(out, "New game: {config}")?;

    loop {
        let prompt = format!(
            "Attempt {}/{}",
            state.current_attempt_index() + 1,
            config.max_attempts()
        );
        let Some(line) = read_line(input, out, &prompt)? else {
            return Ok(());
        };

        // Commands carry a ':' prefix, which no attempt can contain
        match line.to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            ":new" | ":n" => {
                state = GameState::begin(config, provider)?;
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            _ => {}
        }

        match state.submit_attempt(Attempt::parse(&line)) {
            Ok(next) => state = next,
            Err(AttemptError::LengthMismatch { expected, .. }) => {
                // Typed text has no slots, so a wrong length is a player slip here
                writeln!(out, "❌ Please enter exactly {expected} characters\n")?;
                continue;
            }
            Err(err) => {
                writeln!(out, "❌ {}\n", capitalize(&err.to_string()))?;
                continue;
            }
        }

        write_board(out, &state)?;

        if state.is_terminal() {
            write_outcome(out, &state)?;

            let answer = read_line(input, out, "Play again? (yes/no)")?;
            if matches!(answer.as_deref().map(str::to_lowercase).as_deref(), Some("yes" | "y")) {
                state = GameState::begin(config, provider)?;
                writeln!(out, "\n🔄 New game started!\n")?;
            } else {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
        }
    }
}

/// Prompt and read one trimmed line, `None` at end of input
fn read_line<R, W>(input: &mut R, out: &mut W, prompt: &str) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
