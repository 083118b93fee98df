//! Traffic Light
//!
//! A guessing game in the Wordle family: find a hidden number or word within
//! a limited number of attempts. Each attempt is scored position by position
//! as green (right character, right place), amber (in the secret, elsewhere)
//! or red (not in the secret).
//!
//! # Quick Start
//!
//! ```rust
//! use traffic_light::core::{Attempt, Classification, ConfigCandidate};
//! use traffic_light::provider::FixedSecretProvider;
//! use traffic_light::session::{GameState, Outcome};
//!
//! let candidate = ConfigCandidate::new("Word", "5", "6");
//! let mut provider = FixedSecretProvider::new("CRANE");
//! let state = GameState::start(&candidate, &mut provider).unwrap();
//!
//! let state = state.submit_attempt(Attempt::parse("trace")).unwrap();
//! let feedback = state.last_record().unwrap().feedback();
//! assert_eq!(feedback.verdicts()[1], Classification::Exact);
//! assert_eq!(state.outcome(), Outcome::InProgress);
//!
//! let state = state.submit_attempt(Attempt::parse("crane")).unwrap();
//! assert_eq!(state.outcome(), Outcome::Won);
//! ```

// Core domain types
pub mod core;

// Game sessions and row editing
pub mod session;

// Secret generation
pub mod provider;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
