//! Traffic Light - CLI
//!
//! Number and word guessing game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use traffic_light::{
    commands::{SimulationConfig, run_simple, run_simulation},
    core::{ConfigCandidate, SessionConfig, validate},
    interactive::{App, run_tui},
    output::print_simulation_report,
    provider::RandomSecretProvider,
    wordlists::{Lexicon, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "traffic_light",
    about = "Guess the hidden number or word with traffic-light feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game mode: Number (default) or Word
    #[arg(short, long, global = true, default_value = "Number")]
    mode: String,

    /// Number of characters in the secret (3-7)
    #[arg(short, long, global = true, default_value = "5")]
    length: String,

    /// Number of attempts allowed (5-10)
    #[arg(short, long, global = true, default_value = "5")]
    attempts: String,

    /// Wordlist for Word mode: 'embedded' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Play many games automatically and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Base seed; game i uses seed + i
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

/// Load the lexicon based on the -w flag
fn load_lexicon(wordlist: &str) -> Result<Lexicon> {
    match wordlist {
        "embedded" => Ok(Lexicon::embedded()),
        path => load_from_file(path).with_context(|| format!("failed to load wordlist '{path}'")),
    }
}

/// Log file used while the TUI owns the terminal
const TUI_LOG_FILE: &str = "traffic_light.log";

/// Install the tracing subscriber
///
/// Line-based commands log to stderr. The TUI logs to a file so log lines
/// never land on the alternate screen.
fn init_tracing(command: &Commands) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if matches!(command, Commands::Play) {
        let log_file = File::create(TUI_LOG_FILE)
            .with_context(|| format!("failed to create log file '{TUI_LOG_FILE}'"))?;
        builder.with_writer(Arc::new(log_file)).with_ansi(false).init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_tracing(&command)?;

    let lexicon = load_lexicon(&cli.wordlist)?;
    let candidate = ConfigCandidate::new(&cli.mode, &cli.length, &cli.attempts);

    match command {
        Commands::Play => run_play_command(candidate, &lexicon),
        Commands::Simple => run_simple_command(&candidate, &lexicon),
        Commands::Simulate { games, seed, quiet } => {
            run_simulate_command(&candidate, &lexicon, games, seed, !quiet)
        }
    }
}

fn session_config(candidate: &ConfigCandidate) -> Result<SessionConfig> {
    validate(candidate).context("invalid game options")
}

fn run_play_command(candidate: ConfigCandidate, lexicon: &Lexicon) -> Result<()> {
    // The options screen validates, so bad flags just show up as errors there
    let app = App::new(RandomSecretProvider::new(lexicon), candidate);
    run_tui(app)
}

fn run_simple_command(candidate: &ConfigCandidate, lexicon: &Lexicon) -> Result<()> {
    let config = session_config(candidate)?;
    let mut provider = RandomSecretProvider::new(lexicon);
    run_simple(config, &mut provider)
}

fn run_simulate_command(
    candidate: &ConfigCandidate,
    lexicon: &Lexicon,
    games: usize,
    seed: u64,
    show_progress: bool,
) -> Result<()> {
    let session = session_config(candidate)?;
    println!("Simulating {games} games ({session}), seed {seed}...");

    let report = run_simulation(
        &SimulationConfig {
            session,
            games,
            seed,
            show_progress,
        },
        lexicon,
    )?;
    print_simulation_report(&report);
    Ok(())
}
