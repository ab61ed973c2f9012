//! Saved-game format
//!
//! JSON shape:
//!
//! ```json
//! { "version": 1, "day": 412, "previousGuesses": [["trace", [2, 0, 0, 1, 0]]] }
//! ```
//!
//! Verdict codes are the fixed codes of [`LetterVerdict::code`]. A record
//! without `version` is read as version 1. Anything that does not match this
//! schema is treated as "no saved game", never as an error.

use super::state::{GuessRecord, MAX_GUESSES};
use crate::core::LetterVerdict;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Persisted game: the day and the guesses made on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    #[serde(default = "SavedGame::legacy_version")]
    pub version: u32,
    pub day: i64,
    #[serde(rename = "previousGuesses")]
    pub previous_guesses: Vec<(String, Vec<u8>)>,
}

impl SavedGame {
    pub const VERSION: u32 = 1;

    const fn legacy_version() -> u32 {
        1
    }

    #[must_use]
    pub fn new(day: i64, guesses: &[GuessRecord]) -> Self {
        Self {
            version: Self::VERSION,
            day,
            previous_guesses: guesses
                .iter()
                .map(|record| {
                    let codes = record.letters().iter().map(|v| v.code()).collect();
                    (record.word().to_string(), codes)
                })
                .collect(),
        }
    }

    /// Encode as JSON
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON, returning `None` for anything malformed
    #[must_use]
    pub fn decode(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(saved) => Some(saved),
            Err(e) => {
                log::debug!("ignoring malformed saved game: {e}");
                None
            }
        }
    }

    /// Guess history, if this save belongs to `day` and is well formed
    #[must_use]
    pub fn restore(&self, day: i64) -> Option<Vec<GuessRecord>> {
        if self.version != Self::VERSION {
            log::debug!("ignoring saved game with version {}", self.version);
            return None;
        }
        if self.day != day {
            log::debug!("ignoring saved game for day {} (today is {day})", self.day);
            return None;
        }
        if self.previous_guesses.len() > MAX_GUESSES {
            log::debug!("ignoring saved game with {} guesses", self.previous_guesses.len());
            return None;
        }

        self.previous_guesses
            .iter()
            .map(|(word, codes)| {
                if word.chars().count() != codes.len() {
                    return None;
                }
                let letters = codes
                    .iter()
                    .map(|&code| LetterVerdict::from_code(code))
                    .collect::<Option<Vec<_>>>()?;
                Some(GuessRecord::new(word.clone(), letters))
            })
            .collect()
    }
}
