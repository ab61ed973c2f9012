//! Terminal output formatting
//!
//! Display utilities for the line-mode game and command results.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_list_report, print_result};
