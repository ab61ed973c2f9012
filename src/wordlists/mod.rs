//! Word lists for the daily puzzle
//!
//! The dictionary of valid guesses and the ordered list of daily secrets are
//! read from disk at startup.

pub mod audit;
pub mod loader;

pub use audit::{ListReport, audit};
pub use loader::{WordData, load_from_file, words_from_str};
