//! Game sessions
//!
//! The session state machine and the input focus model the presentation
//! layer drives it with.

pub mod focus;
mod state;

pub use focus::{FocusSequencer, RowEditor, Slot};
pub use state::{AttemptError, AttemptRecord, GameState, Outcome, SessionError};
