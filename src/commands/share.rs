//! Share command

use crate::game::{GameState, MAX_GUESSES};

/// Text printed by `lesble share`
///
/// Only a finished game produces the share summary; an unfinished one gets a
/// progress line instead.
#[must_use]
pub fn share_text(game: &GameState) -> String {
    let played = game.guesses().len();
    if game.is_complete() {
        game.share_summary()
    } else if played == 0 {
        format!("No guesses yet for day #{}.", game.day())
    } else {
        format!(
            "Day #{} is still in progress ({played}/{MAX_GUESSES} guesses). Finish it to share.",
            game.day()
        )
    }
}
