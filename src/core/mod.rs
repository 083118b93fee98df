//! Core domain types for the traffic light game
//!
//! Modes, attempts, secrets, feedback classification and session
//! configuration. Everything here is pure and free of I/O.

mod attempt;
pub mod config;
mod feedback;
mod mode;
mod secret;

pub use attempt::{Attempt, EMPTY_SLOT};
pub use config::{
    ConfigCandidate, ConfigError, ConfigField, MAX_ATTEMPTS_RANGE, SECRET_LENGTH_RANGE,
    SessionConfig, validate,
};
pub use feedback::{Classification, Feedback};
pub use mode::Mode;
pub use secret::Secret;
