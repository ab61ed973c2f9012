//! Session controller
//!
//! Owns the [`GameState`] for today and the store it is saved to. Front ends
//! feed it key presses (or whole words) and read the game back for display.

use crate::core::Grade;
use crate::error::Result;
use crate::game::{GameState, GuessRecord, STATE_KEY, SavedGame, StateStore};
use crate::wordlists::WordData;

/// Input accepted by [`Session::press`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Delete,
    Enter,
}

/// One player's game for one day
pub struct Session<S: StateStore> {
    game: GameState,
    store: S,
    pending: String,
}

impl<S: StateStore> Session<S> {
    /// Build today's game and replay any guesses saved for the same day
    ///
    /// # Errors
    /// Returns `Error::NoPuzzleForDay` if there is no secret for `day`.
    pub fn start(day: i64, data: WordData, store: S) -> Result<Self> {
        let mut game = GameState::new(day, &data.corrects, data.words)?;

        if let Some(history) = load_saved(&store, day) {
            let replayed = game.replay(&history);
            log::debug!("restored {replayed} of {} saved guesses", history.len());
        }

        log::info!(
            "session started for day {day} with {} guesses",
            game.guesses().len()
        );

        Ok(Self {
            game,
            store,
            pending: String::new(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn game(&self) -> &GameState {
        &self.game
    }

    /// Letters typed for the guess in progress
    #[inline]
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// No more input is accepted once the game is won or lost
    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.game.is_complete()
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Handle one key press
    ///
    /// Letters fill the pending guess up to the word length, `Delete` removes
    /// the last letter and `Enter` submits a full line. Returns the grade when
    /// a guess was submitted. A valid guess clears the pending line; an
    /// invalid one keeps it so it can be corrected.
    ///
    /// # Errors
    /// Returns an error if the game cannot be saved after a valid guess. The
    /// guess is kept and the pending line is cleared all the same.
    pub fn press(&mut self, key: Key) -> Result<Option<Grade>> {
        if self.is_complete() {
            return Ok(None);
        }

        match key {
            Key::Letter(c) => {
                if c.is_ascii_alphabetic() && self.pending.chars().count() < self.game.word_length()
                {
                    self.pending.push(c.to_ascii_lowercase());
                }
                Ok(None)
            }
            Key::Delete => {
                self.pending.pop();
                Ok(None)
            }
            Key::Enter => {
                if self.pending.chars().count() != self.game.word_length() {
                    return Ok(None);
                }
                let word = self.pending.clone();
                let result = self.game.submit_guess(&word)?;
                if result.is_valid() {
                    // The guess is recorded even if saving fails
                    self.pending.clear();
                    self.save()?;
                }
                Ok(Some(result))
            }
        }
    }

    /// Submit a whole word, saving the game if it was accepted
    ///
    /// # Errors
    /// Returns `Error::SessionComplete` after the game has ended, or an I/O
    /// error if saving fails. A failed save keeps the accepted guess.
    pub fn submit(&mut self, word: &str) -> Result<Grade> {
        let result = self.game.submit_guess(word)?;
        if result.is_valid() {
            self.save()?;
        }
        Ok(result)
    }

    /// Write the current game to the store
    ///
    /// # Errors
    /// Returns an error if encoding or writing fails.
    pub fn save(&self) -> Result<()> {
        let json = self.game.serialize().encode()?;
        self.store.set(STATE_KEY, &json)
    }
}

/// Guesses saved for `day`, if any
///
/// Read failures, malformed data and saves from other days all count as
/// "nothing saved".
pub fn load_saved<S: StateStore>(store: &S, day: i64) -> Option<Vec<GuessRecord>> {
    let json = match store.get(STATE_KEY) {
        Ok(Some(json)) => json,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("could not read saved game: {e}");
            return None;
        }
    };

    SavedGame::decode(&json)?.restore(day)
}
