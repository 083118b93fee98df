//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Game, Message, MessageStyle, OptionField, OptionsForm, Screen, run_tui};
