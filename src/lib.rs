//! lesble
//!
//! A daily word-guessing game: six tries to find the word of the day, with
//! per-letter feedback after every guess and progress saved between runs.
//!
//! # Quick Start
//!
//! ```rust
//! use lesble::core::{grade, Dictionary, LetterVerdict, Verdict};
//!
//! let dictionary: Dictionary = ["crane", "trace"].into_iter().collect();
//!
//! let result = grade("trace", "crane", &dictionary);
//! assert_eq!(result.verdict, Verdict::NiceTry);
//! assert_eq!(result.letters[1], LetterVerdict::Correct);
//! ```

// Core rules: grading, knowledge, day numbering
pub mod core;

// Game state and persistence
pub mod game;

// Session controller shared by the front ends
pub mod session;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Errors
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use config::GameConfig;
pub use error::{Error, Result};
