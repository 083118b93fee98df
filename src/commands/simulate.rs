//! Self-play simulation
//!
//! Plays many seeded sessions with a constraint-narrowing guesser and
//! collects how often and how quickly the secret is found.

use crate::core::{Attempt, Classification, Mode, SessionConfig};
use crate::provider::RandomSecretProvider;
use crate::session::{AttemptRecord, GameState, Outcome};
use crate::wordlists::Lexicon;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Mixed into each game's seed so the guesser and the secret draw
/// independent streams
const GUESSER_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Random rows tried before settling for one that misses a required character
const CONSTRUCTION_TRIES: usize = 64;

/// Parameters for a simulation run
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub session: SessionConfig,
    pub games: usize,
    pub seed: u64,
    pub show_progress: bool,
}

/// Aggregated result of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub config: SessionConfig,
    pub games: usize,
    pub won: usize,
    pub lost: usize,
    /// Attempts used -> number of games won with that many attempts
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
}

impl SimulationReport {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.won as f64 / self.games as f64
        }
    }

    /// Mean attempts over won games, `None` if nothing was won
    #[must_use]
    pub fn average_attempts(&self) -> Option<f64> {
        if self.won == 0 {
            return None;
        }
        let total: usize = self
            .distribution
            .iter()
            .map(|(attempts, count)| attempts * count)
            .sum();
        Some(total as f64 / self.won as f64)
    }
}

/// Result of one simulated session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GameSummary {
    outcome: Outcome,
    attempts_used: usize,
}

/// Run a batch of simulated sessions in parallel
///
/// Game `i` is seeded with `seed + i`, so a run is reproducible regardless of
/// thread scheduling.
///
/// # Errors
///
/// Returns an error if a session can't be started (for example, the
/// lexicon has no words of the configured length) or the progress bar
/// template is invalid.
pub fn run_simulation(sim: &SimulationConfig, lexicon: &Lexicon) -> Result<SimulationReport> {
    info!(games = sim.games, seed = sim.seed, config = %sim.session, "Starting simulation");

    let pb = if sim.show_progress {
        ProgressBar::new(sim.games as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let summaries: Vec<GameSummary> = (0..sim.games)
        .into_par_iter()
        .map(|i| {
            let summary = play_one(sim.session, lexicon, sim.seed.wrapping_add(i as u64));
            pb.inc(1);
            summary
        })
        .collect::<Result<_>>()?;
    pb.finish_with_message("Complete!");

    let mut distribution = BTreeMap::new();
    let mut won = 0;
    for summary in &summaries {
        if summary.outcome == Outcome::Won {
            won += 1;
            *distribution.entry(summary.attempts_used).or_insert(0) += 1;
        }
    }

    Ok(SimulationReport {
        config: sim.session,
        games: summaries.len(),
        won,
        lost: summaries.len() - won,
        distribution,
        duration: start.elapsed(),
    })
}

fn play_one(config: SessionConfig, lexicon: &Lexicon, seed: u64) -> Result<GameSummary> {
    let mut provider = RandomSecretProvider::with_rng(lexicon, StdRng::seed_from_u64(seed));
    let mut rng = StdRng::seed_from_u64(seed ^ GUESSER_SALT);

    let mut state = GameState::begin(config, &mut provider)?;
    let mut narrower = Narrower::new(config.mode(), config.secret_length());

    while !state.is_terminal() {
        let attempt = narrower.next_guess(lexicon, &mut rng);
        state = state.submit_attempt(attempt)?;
        if let Some(record) = state.last_record() {
            narrower.update(record);
        }
    }

    Ok(GameSummary {
        outcome: state.outcome(),
        attempts_used: state.current_attempt_index(),
    })
}

/// Guesser that only proposes rows consistent with the feedback so far
///
/// Green fixes a column, red removes the character from every column,
/// amber removes it from its column and requires it somewhere in the row.
#[derive(Debug, Clone)]
pub struct Narrower {
    mode: Mode,
    allowed: Vec<FxHashSet<char>>,
    required: FxHashSet<char>,
    tried: FxHashSet<String>,
}

impl Narrower {
    #[must_use]
    pub fn new(mode: Mode, length: usize) -> Self {
        let allowed = (0..length)
            .map(|position| alphabet(mode, position).collect())
            .collect();

        Self {
            mode,
            allowed,
            required: FxHashSet::default(),
            tried: FxHashSet::default(),
        }
    }

    /// Fold one attempt's feedback into the constraints
    pub fn update(&mut self, record: &AttemptRecord) {
        let attempt = record.attempt();
        self.tried.insert(attempt.to_string());

        for ((position, ch), &verdict) in attempt.filled().zip(record.feedback().verdicts()) {
            match verdict {
                Classification::Exact => {
                    self.allowed[position].clear();
                    self.allowed[position].insert(ch);
                }
                Classification::Present => {
                    self.allowed[position].remove(&ch);
                    self.required.insert(ch);
                }
                Classification::Absent => {
                    for column in &mut self.allowed {
                        column.remove(&ch);
                    }
                }
            }
        }
    }

    /// Check a candidate row against the constraints
    #[must_use]
    pub fn is_consistent(&self, text: &str) -> bool {
        text.chars().count() == self.allowed.len()
            && text
                .chars()
                .zip(&self.allowed)
                .all(|(c, column)| column.contains(&c))
            && self.required.iter().all(|&c| text.contains(c))
            && !self.tried.contains(text)
    }

    /// Propose the next row
    ///
    /// Word mode picks a consistent lexicon word when one exists. Otherwise
    /// a row is built column by column from the allowed characters.
    pub fn next_guess<R: Rng>(&self, lexicon: &Lexicon, rng: &mut R) -> Attempt {
        if self.mode == Mode::Word {
            let candidates: Vec<&String> = lexicon
                .words_of_length(self.allowed.len())
                .iter()
                .filter(|word| self.is_consistent(word))
                .collect();
            if let Some(word) = candidates.choose(rng) {
                return Attempt::parse(word);
            }
        }

        let mut row = self.construct(rng);
        for _ in 1..CONSTRUCTION_TRIES {
            if self.is_consistent(&row) {
                break;
            }
            row = self.construct(rng);
        }
        Attempt::parse(&row)
    }

    fn construct<R: Rng>(&self, rng: &mut R) -> String {
        self.allowed
            .iter()
            .enumerate()
            .map(|(position, column)| {
                let mut choices: Vec<char> = column.iter().copied().collect();
                choices.sort_unstable();
                choices
                    .choose(rng)
                    .copied()
                    // Every character was ruled out; any alphabet character keeps the row valid
                    .unwrap_or_else(|| alphabet(self.mode, position).next().unwrap_or('1'))
            })
            .collect()
    }
}

/// Characters a secret may hold at `position`
fn alphabet(mode: Mode, position: usize) -> impl Iterator<Item = char> {
    match (mode, position) {
        (Mode::Number, 0) => '1'..='9',
        (Mode::Number, _) => '0'..='9',
        (Mode::Word, _) => 'A'..='Z',
    }
}
