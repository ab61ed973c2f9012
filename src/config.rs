//! Runtime configuration
//!
//! Collected from command-line options in `main.rs`; defaults match a local
//! checkout with the two word lists next to the binary.

use crate::core::{day_index, release_date};
use crate::core::day::today;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Where to find word lists and saved state, and which day it is
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lesble::GameConfig;
///
/// let config = GameConfig::default()
///     .with_words("lists/words")
///     .with_today(NaiveDate::from_ymd_opt(2022, 1, 30).unwrap());
///
/// assert_eq!(config.day(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Newline-delimited dictionary of valid guesses
    pub words_path: PathBuf,
    /// Newline-delimited secret words, one per day
    pub corrects_path: PathBuf,
    /// Directory for saved state; `None` disables saving
    pub state_dir: Option<PathBuf>,
    /// Date of puzzle #0
    pub release: NaiveDate,
    /// Override for the current date
    pub today: Option<NaiveDate>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            words_path: PathBuf::from("words"),
            corrects_path: PathBuf::from("corrects"),
            state_dir: crate::game::FileStore::default_dir(),
            release: release_date(),
            today: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_words(mut self, path: impl Into<PathBuf>) -> Self {
        self.words_path = path.into();
        self
    }

    #[must_use]
    pub fn with_corrects(mut self, path: impl Into<PathBuf>) -> Self {
        self.corrects_path = path.into();
        self
    }

    #[must_use]
    pub fn with_state_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.state_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub const fn with_release(mut self, release: NaiveDate) -> Self {
        self.release = release;
        self
    }

    #[must_use]
    pub const fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// The configured date, or the local date if none was given
    #[must_use]
    pub fn current_date(&self) -> NaiveDate {
        self.today.unwrap_or_else(today)
    }

    /// Puzzle index for the current date
    #[must_use]
    pub fn day(&self) -> i64 {
        day_index(self.release, self.current_date())
    }
}
