//! Terminal output formatting
//!
//! Display utilities for the line-based game and command results.

pub mod display;
pub mod formatters;

pub use display::{print_simulation_report, write_board, write_outcome};
