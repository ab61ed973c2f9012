//! Word list loading
//!
//! Both lists are newline-delimited text. Lines are trimmed and blank lines
//! skipped; every other line is kept exactly as written.

use crate::core::Dictionary;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Split newline-delimited text into words
///
/// # Examples
/// ```
/// use lesble::wordlists::loader::words_from_str;
///
/// assert_eq!(words_from_str("crane\n\n slate \n"), vec!["crane", "slate"]);
/// ```
#[must_use]
pub fn words_from_str(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load a word list from a file
///
/// # Errors
///
/// Returns `Error::WordList` if the file cannot be read and
/// `Error::EmptyWordList` if it contains no words.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::WordList {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_str(&content);
    if words.is_empty() {
        return Err(Error::EmptyWordList {
            path: path.to_path_buf(),
        });
    }

    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Everything the game needs from the word lists
#[derive(Debug, Clone)]
pub struct WordData {
    /// Valid guesses
    pub words: Dictionary,
    /// Secret word per day index
    pub corrects: Vec<String>,
}

impl WordData {
    #[must_use]
    pub fn new(words: Vec<String>, corrects: Vec<String>) -> Self {
        Self {
            words: words.into_iter().collect(),
            corrects,
        }
    }

    /// Load both lists; either failing aborts the whole load
    ///
    /// # Errors
    /// Returns the first list error encountered.
    pub fn load(words_path: &Path, corrects_path: &Path) -> Result<Self> {
        let words = load_from_file(words_path)?;
        let corrects = load_from_file(corrects_path)?;
        Ok(Self::new(words, corrects))
    }
}
