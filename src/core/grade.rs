//! Guess grading
//!
//! Compares a guess against the secret word and produces one `LetterVerdict`
//! per position, with correct handling of repeated letters.

use super::{Dictionary, LetterVerdict, Verdict};
use rustc_hash::FxHashMap;

/// Result of grading one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grade {
    pub verdict: Verdict,
    /// One entry per letter of the secret; empty when `verdict` is `Invalid`
    pub letters: Vec<LetterVerdict>,
}

impl Grade {
    #[must_use]
    pub const fn invalid() -> Self {
        Self {
            verdict: Verdict::Invalid,
            letters: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.verdict != Verdict::Invalid
    }

    #[inline]
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.verdict == Verdict::Correct
    }
}

/// Grade `guess` against `secret`
///
/// A guess that is not in `dictionary`, or whose length differs from the
/// secret's, is `Invalid` and gets no letter verdicts.
///
/// # Algorithm
/// 1. First pass: mark exact position matches `Correct`; every unmatched
///    secret letter goes into a remaining-count table
/// 2. Second pass: each non-correct guess letter takes one count from the
///    table if it can (`Present`), otherwise it is `Absent`
///
/// A guessed letter is therefore credited `Present` at most as many times as
/// it appears uncredited in the secret.
///
/// # Examples
/// ```
/// use lesble::core::{grade, Dictionary, LetterVerdict::*, Verdict};
///
/// let dict: Dictionary = ["crane", "trace"].into_iter().collect();
/// let result = grade("trace", "crane", &dict);
///
/// assert_eq!(result.verdict, Verdict::NiceTry);
/// assert_eq!(result.letters, vec![Absent, Correct, Correct, Present, Correct]);
/// ```
#[must_use]
pub fn grade(guess: &str, secret: &str, dictionary: &Dictionary) -> Grade {
    if !dictionary.contains(guess) {
        return Grade::invalid();
    }

    let guess: Vec<char> = guess.chars().collect();
    let secret: Vec<char> = secret.chars().collect();
    if guess.len() != secret.len() {
        return Grade::invalid();
    }

    let mut letters = vec![LetterVerdict::Absent; secret.len()];
    let mut remaining: FxHashMap<char, usize> = FxHashMap::default();

    // First pass: greens, and count what is left of the secret
    for (i, (&g, &s)) in guess.iter().zip(&secret).enumerate() {
        if g == s {
            letters[i] = LetterVerdict::Correct;
        } else {
            *remaining.entry(s).or_insert(0) += 1;
        }
    }

    // Second pass: yellows from the leftovers
    for (letter, verdict) in guess.iter().zip(letters.iter_mut()) {
        if *verdict == LetterVerdict::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(letter)
            && *count > 0
        {
            *count -= 1;
            *verdict = LetterVerdict::Present;
        }
    }

    let verdict = if letters.iter().all(|&v| v == LetterVerdict::Correct) {
        Verdict::Correct
    } else {
        Verdict::NiceTry
    };

    Grade { verdict, letters }
}
