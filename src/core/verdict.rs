//! Letter and guess verdicts
//!
//! A `LetterVerdict` is the feedback for one position of a guess. Verdicts are
//! ordered by specificity so that knowledge about a letter can only improve:
//! `Correct > Present > Absent > Unknown`.
//!
//! The integer codes are part of the saved-game format and must not change:
//!
//! | verdict   | code |
//! |-----------|------|
//! | `Correct` | 0    |
//! | `Present` | 1    |
//! | `Absent`  | 2    |
//! | `Unknown` | 3    |

use std::cmp::Ordering;
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterVerdict {
    /// Right letter, right position
    Correct,
    /// Letter is in the word but somewhere else
    Present,
    /// Letter is not in the word (or all its occurrences are already credited)
    Absent,
    /// Nothing learned yet
    Unknown,
}

impl LetterVerdict {
    /// Every verdict, most specific first
    pub const ALL: [Self; 4] = [Self::Correct, Self::Present, Self::Absent, Self::Unknown];

    /// Persisted integer code
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Correct => 0,
            Self::Present => 1,
            Self::Absent => 2,
            Self::Unknown => 3,
        }
    }

    /// Decode a persisted integer code
    ///
    /// Returns `None` for codes outside `0..=3`.
    #[inline]
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Correct),
            1 => Some(Self::Present),
            2 => Some(Self::Absent),
            3 => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Higher is more specific
    #[inline]
    const fn specificity(self) -> u8 {
        3 - self.code()
    }

    /// Keep whichever verdict is more specific
    ///
    /// # Examples
    /// ```
    /// use lesble::core::LetterVerdict;
    ///
    /// assert_eq!(LetterVerdict::Absent.merge(LetterVerdict::Present), LetterVerdict::Present);
    /// assert_eq!(LetterVerdict::Correct.merge(LetterVerdict::Absent), LetterVerdict::Correct);
    /// ```
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    /// Share-summary symbol
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '💚',
            Self::Present => '💛',
            Self::Absent => '🖤',
            Self::Unknown => '💣',
        }
    }
}

impl Ord for LetterVerdict {
    fn cmp(&self, other: &Self) -> Ordering {
        self.specificity().cmp(&other.specificity())
    }
}

impl PartialOrd for LetterVerdict {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LetterVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.emoji())
    }
}

/// Overall result of grading a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Every letter is correct
    Correct,
    /// Valid word, not the answer
    NiceTry,
    /// Not in the word list; nothing was graded
    Invalid,
}

/// Render a row of verdicts as emoji
#[must_use]
pub fn verdicts_to_emoji(letters: &[LetterVerdict]) -> String {
    letters.iter().map(|v| v.emoji()).collect()
}
