//! Interactive TUI
//!
//! Ratatui front end for today's puzzle.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
