//! Display functions for boards and command results

use super::formatters::{blank_row, create_progress_bar, feedback_row, place_label_row};
use crate::commands::SimulationReport;
use crate::session::{GameState, Outcome};
use colored::Colorize;
use std::io::{self, Write};

/// Write the board: submitted rows with feedback, then blank rows
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn write_board(out: &mut impl Write, state: &GameState) -> io::Result<()> {
    let config = state.config();
    let labels = place_label_row(config.mode(), config.secret_length());

    writeln!(out)?;
    if !labels.is_empty() {
        writeln!(out, "     {}", labels.bold())?;
    }

    for (i, record) in state.records().iter().enumerate() {
        writeln!(
            out,
            "  {:>2} {}",
            (i + 1).to_string().bright_black(),
            feedback_row(record.attempt(), record.feedback())
        )?;
    }

    for i in state.current_attempt_index()..config.max_attempts() {
        writeln!(
            out,
            "  {:>2} {}",
            (i + 1).to_string().bright_black(),
            blank_row(config.secret_length())
        )?;
    }

    writeln!(out)
}

/// Write the end-of-game banner with the revealed secret and an emoji
/// summary of every attempt
///
/// Writes nothing while the game is still in progress.
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn write_outcome(out: &mut impl Write, state: &GameState) -> io::Result<()> {
    let Ok(secret) = state.reveal() else {
        return Ok(());
    };

    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    match state.outcome() {
        Outcome::Won => {
            let used = state.current_attempt_index();
            writeln!(
                out,
                "  {} {}",
                "🟢 You won!".bright_green().bold(),
                format!(
                    "Cracked {} in {used} {}",
                    secret.to_string().bright_white().bold(),
                    if used == 1 { "attempt" } else { "attempts" }
                )
            )?;
        }
        Outcome::Lost => {
            writeln!(
                out,
                "  {} The answer was {}",
                "🔴 Out of attempts.".bright_red().bold(),
                secret.to_string().bright_white().bold()
            )?;
        }
        Outcome::InProgress => {}
    }

    // Spoiler-free summary of the game, one emoji row per attempt
    writeln!(out)?;
    for record in state.records() {
        writeln!(out, "  {}", record.feedback().to_emoji())?;
    }
    writeln!(out, "{}", "═".repeat(60).bright_cyan())
}

/// Print the result of a simulation run
pub fn print_simulation_report(report: &SimulationReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Sessions:".bright_cyan().bold());
    println!("   Config:           {}", report.config);
    println!("   Games played:     {}", report.games);
    println!(
        "   Won:              {}",
        format!("{} ({:.1}%)", report.won, report.win_rate() * 100.0)
            .green()
            .bold()
    );
    println!("   Lost:             {}", report.lost.to_string().red());
    if let Some(average) = report.average_attempts() {
        println!(
            "   Average attempts: {}",
            format!("{average:.2}").bright_yellow().bold()
        );
    }
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    println!("\n📈 {}", "Attempts used in won games:".bright_cyan().bold());
    for attempts in 1..=report.config.max_attempts() {
        let count = report.distribution.get(&attempts).copied().unwrap_or(0);
        let pct = if report.games > 0 {
            count as f64 / report.games as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {attempts:>2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
