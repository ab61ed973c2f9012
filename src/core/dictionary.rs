//! Set of words accepted as guesses

use rustc_hash::FxHashSet;

/// Valid guessable words
///
/// Membership is exact: no case folding, no trimming. Lookups are O(1).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Create an empty dictionary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `word` may be guessed
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Add a word, returning `false` if it was already present
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_exact() {
        let dict: Dictionary = ["crane", "trace"].into_iter().collect();

        assert!(dict.contains("crane"));
        assert!(dict.contains("trace"));
        assert!(!dict.contains("CRANE"));
        assert!(!dict.contains("cran"));
        assert!(!dict.contains(" crane"));
        assert!(!dict.contains(""));
    }

    #[test]
    fn duplicates_collapse() {
        let mut dict = Dictionary::new();
        assert!(dict.insert("crane"));
        assert!(!dict.insert("crane"));
        assert_eq!(dict.len(), 1);
        assert!(!dict.is_empty());
    }

    #[test]
    fn empty_dictionary() {
        let dict = Dictionary::new();
        assert!(dict.is_empty());
        assert_eq!(dict.iter().count(), 0);
    }
}
