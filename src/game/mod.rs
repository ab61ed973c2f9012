//! Game state, saved-game format and storage

mod persist;
mod state;
mod store;

pub use persist::SavedGame;
pub use state::{FAILURE_MARKER, GameState, GuessRecord, MAX_GUESSES, Outcome, SHARE_TITLE};
pub use store::{FileStore, MemoryStore, STATE_KEY, StateStore};
