//! Word list health check
//!
//! Reports how long the secret list lasts and which secrets could never be
//! guessed because they are missing from the dictionary.

use super::WordData;
use crate::core::day::{day_index, last_puzzle_date};
use chrono::NaiveDate;
use rayon::prelude::*;

/// Result of auditing the word lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListReport {
    pub dictionary_size: usize,
    pub puzzle_count: usize,
    /// Day index for the audit date
    pub today_index: i64,
    /// Date of the final puzzle
    pub last_puzzle: Option<NaiveDate>,
    /// Days from the audit date to the final puzzle; negative once it has passed
    pub days_left: Option<i64>,
    /// `(day, word)` for secrets that are not valid guesses
    pub missing_secrets: Vec<(usize, String)>,
    /// `(day, word)` for secrets whose length differs from day 0's
    pub irregular_lengths: Vec<(usize, String)>,
}

impl ListReport {
    /// True when every secret can be guessed and all have the same length
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.missing_secrets.is_empty() && self.irregular_lengths.is_empty()
    }
}

/// Audit `data` as of `today`
#[must_use]
pub fn audit(data: &WordData, release: NaiveDate, today: NaiveDate) -> ListReport {
    let expected_len = data.corrects.first().map(|w| w.chars().count());

    let missing_secrets: Vec<(usize, String)> = data
        .corrects
        .par_iter()
        .enumerate()
        .filter(|(_, word)| !data.words.contains(word))
        .map(|(day, word)| (day, word.clone()))
        .collect();

    let irregular_lengths: Vec<(usize, String)> = data
        .corrects
        .par_iter()
        .enumerate()
        .filter(|(_, word)| Some(word.chars().count()) != expected_len)
        .map(|(day, word)| (day, word.clone()))
        .collect();

    let last_puzzle = last_puzzle_date(release, data.corrects.len());

    ListReport {
        dictionary_size: data.words.len(),
        puzzle_count: data.corrects.len(),
        today_index: day_index(release, today),
        last_puzzle,
        days_left: last_puzzle.map(|last| day_index(today, last)),
        missing_secrets,
        irregular_lengths,
    }
}
