//! Aggregate per-letter knowledge across all guesses

use super::LetterVerdict;

const ALPHABET: usize = 26;

/// Best-known verdict for each of the 26 letters `a..=z`
///
/// Starts all `Unknown` and only ever moves towards more specific verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterKnowledge {
    letters: [LetterVerdict; ALPHABET],
}

impl Default for LetterKnowledge {
    fn default() -> Self {
        Self {
            letters: [LetterVerdict::Unknown; ALPHABET],
        }
    }
}

impl LetterKnowledge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn index(letter: char) -> Option<usize> {
        letter
            .is_ascii_lowercase()
            .then(|| (letter as u8 - b'a') as usize)
    }

    /// Best-known verdict for `letter`
    ///
    /// Anything outside `a..=z` is always `Unknown`.
    #[must_use]
    pub fn get(&self, letter: char) -> LetterVerdict {
        Self::index(letter).map_or(LetterVerdict::Unknown, |i| self.letters[i])
    }

    /// Merge one observation, upgrading but never downgrading
    pub fn observe(&mut self, letter: char, verdict: LetterVerdict) {
        if let Some(i) = Self::index(letter) {
            self.letters[i] = self.letters[i].merge(verdict);
        }
    }

    /// Merge every letter of a graded guess
    pub fn apply(&mut self, word: &str, verdicts: &[LetterVerdict]) {
        for (letter, &verdict) in word.chars().zip(verdicts) {
            self.observe(letter, verdict);
        }
    }

    /// Letters `a..=z` paired with their verdicts
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterVerdict)> + '_ {
        ('a'..='z').zip(self.letters.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterVerdict::{Absent, Correct, Present, Unknown};

    #[test]
    fn starts_unknown() {
        let k = LetterKnowledge::new();
        assert!(k.iter().all(|(_, v)| v == Unknown));
        assert_eq!(k.iter().count(), 26);
    }

    #[test]
    fn observe_upgrades_only() {
        let mut k = LetterKnowledge::new();

        k.observe('e', Present);
        assert_eq!(k.get('e'), Present);

        k.observe('e', Absent);
        assert_eq!(k.get('e'), Present);

        k.observe('e', Correct);
        assert_eq!(k.get('e'), Correct);

        k.observe('e', Present);
        assert_eq!(k.get('e'), Correct);
    }

    #[test]
    fn apply_is_idempotent() {
        let verdicts = [Absent, Correct, Correct, Present, Correct];

        let mut once = LetterKnowledge::new();
        once.apply("trace", &verdicts);

        let mut twice = once;
        twice.apply("trace", &verdicts);

        assert_eq!(once, twice);
    }

    #[test]
    fn repeated_letter_keeps_best() {
        // "speed" vs "abide": first E present, second E absent
        let mut k = LetterKnowledge::new();
        k.apply("speed", &[Absent, Absent, Present, Absent, Present]);

        assert_eq!(k.get('e'), Present);
        assert_eq!(k.get('d'), Present);
        assert_eq!(k.get('s'), Absent);
        assert_eq!(k.get('z'), Unknown);
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut k = LetterKnowledge::new();
        k.observe('É', Correct);
        k.observe('A', Correct);
        k.observe('1', Correct);

        assert_eq!(k, LetterKnowledge::new());
        assert_eq!(k.get('A'), Unknown);
    }
}
