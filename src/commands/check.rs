//! Word list check command
//!
//! Loads both lists and reports how many days of puzzles remain.

use crate::config::GameConfig;
use crate::error::Result;
use crate::wordlists::{ListReport, WordData, audit};

/// Load the configured lists and audit them as of the configured date
///
/// # Errors
///
/// Returns an error if either list cannot be loaded.
pub fn run_check(config: &GameConfig) -> Result<ListReport> {
    let data = WordData::load(&config.words_path, &config.corrects_path)?;
    Ok(audit(&data, config.release, config.current_date()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;

    #[test]
    fn check_reports_remaining_days() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("words"), "crane\nslate\n").unwrap();
        fs::write(dir.path().join("corrects"), "crane\nslate\nghost\n").unwrap();

        let config = GameConfig::default()
            .with_words(dir.path().join("words"))
            .with_corrects(dir.path().join("corrects"))
            .with_today(NaiveDate::from_ymd_opt(2022, 1, 28).unwrap());

        let report = run_check(&config).unwrap();
        assert_eq!(report.puzzle_count, 3);
        assert_eq!(report.today_index, 1);
        assert_eq!(report.days_left, Some(1));
        assert_eq!(report.missing_secrets, vec![(2, "ghost".to_string())]);
    }

    #[test]
    fn check_fails_without_lists() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::default()
            .with_words(dir.path().join("words"))
            .with_corrects(dir.path().join("corrects"));

        assert!(run_check(&config).is_err());
    }
}
