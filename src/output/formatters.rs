//! Formatting utilities for terminal output

use crate::core::{LetterKnowledge, LetterVerdict};
use colored::{ColoredString, Colorize};

/// Keyboard rows as shown to the player
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// A letter tile coloured by its verdict
#[must_use]
pub fn letter_tile(letter: char, verdict: LetterVerdict) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match verdict {
        LetterVerdict::Correct => text.black().on_green().bold(),
        LetterVerdict::Present => text.black().on_yellow().bold(),
        LetterVerdict::Absent => text.white().on_bright_black(),
        LetterVerdict::Unknown => text.normal(),
    }
}

/// A guessed word as a row of coloured tiles
#[must_use]
pub fn word_row(word: &str, letters: &[LetterVerdict]) -> String {
    word.chars()
        .zip(letters)
        .map(|(c, &v)| letter_tile(c, v).to_string())
        .collect()
}

/// The keyboard, one line per row, each key coloured by what is known about it
#[must_use]
pub fn keyboard(knowledge: &LetterKnowledge) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| letter_tile(c, knowledge.get(c)).to_string())
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_covers_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|r| r.chars()).collect();
        letters.sort_unstable();
        letters.dedup();

        assert_eq!(letters, ('a'..='z').collect::<Vec<_>>());
    }

    #[test]
    fn tiles_show_uppercase_letter() {
        colored::control::set_override(false);
        assert_eq!(letter_tile('q', LetterVerdict::Correct).to_string(), " Q ");
        assert_eq!(
            word_row("ab", &[LetterVerdict::Absent, LetterVerdict::Present]),
            " A  B "
        );
    }

    #[test]
    fn keyboard_has_three_rows() {
        colored::control::set_override(false);
        let rows = keyboard(&LetterKnowledge::new());

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], " Z  X  C  V  B  N  M ");
    }
}
