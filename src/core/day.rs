//! Puzzle day numbering
//!
//! The day index is the number of whole calendar days from the release date to
//! the current local date. Index 0 is the release date itself. Everything that
//! needs a day index (secret lookup, saved-game matching) goes through
//! [`day_index`].

use chrono::{DateTime, Days, Local, NaiveDate, TimeZone};

/// Year, month and day of the first puzzle
const RELEASE: (i32, u32, u32) = (2022, 1, 27);

/// Date of puzzle #0
#[must_use]
pub fn release_date() -> NaiveDate {
    let (y, m, d) = RELEASE;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Days from `reference` to `current`
///
/// Negative when `current` is before `reference`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use lesble::core::day_index;
///
/// let release = NaiveDate::from_ymd_opt(2022, 1, 27).unwrap();
/// let later = NaiveDate::from_ymd_opt(2022, 2, 1).unwrap();
/// assert_eq!(day_index(release, later), 5);
/// assert_eq!(day_index(release, release), 0);
/// ```
#[inline]
#[must_use]
pub fn day_index(reference: NaiveDate, current: NaiveDate) -> i64 {
    current.signed_duration_since(reference).num_days()
}

/// Day index for a wall-clock instant, truncated to its local date
#[must_use]
pub fn day_index_at<Tz: TimeZone>(reference: NaiveDate, now: &DateTime<Tz>) -> i64 {
    day_index(reference, now.with_timezone(&Local).date_naive())
}

/// Today's local date
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Date of the last day that has a puzzle, given how many puzzles exist
///
/// Returns `None` when there are no puzzles at all.
#[must_use]
pub fn last_puzzle_date(reference: NaiveDate, puzzles: usize) -> Option<NaiveDate> {
    let last = u64::try_from(puzzles).ok()?.checked_sub(1)?;
    reference.checked_add_days(Days::new(last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn release_is_day_zero() {
        assert_eq!(release_date(), date(2022, 1, 27));
        assert_eq!(day_index(release_date(), release_date()), 0);
    }

    #[test]
    fn increases_by_one_per_day() {
        let release = release_date();
        let mut current = release;
        for expected in 0..800 {
            assert_eq!(day_index(release, current), expected);
            current = current.succ_opt().unwrap();
        }
    }

    #[test]
    fn before_release_is_negative() {
        assert_eq!(day_index(release_date(), date(2022, 1, 26)), -1);
        assert_eq!(day_index(release_date(), date(2021, 1, 27)), -365);
    }

    #[test]
    fn crosses_leap_day() {
        assert_eq!(day_index(date(2024, 2, 28), date(2024, 3, 1)), 2);
    }

    #[test]
    fn time_of_day_is_ignored() {
        let tz = FixedOffset::east_opt(0).unwrap();
        let local_midnight = Local
            .from_local_datetime(&date(2022, 2, 1).and_hms_opt(0, 0, 0).unwrap())
            .earliest()
            .unwrap();
        let late_evening = local_midnight + Duration::hours(23) + Duration::minutes(59);

        assert_eq!(day_index_at(release_date(), &local_midnight), 5);
        assert_eq!(day_index_at(release_date(), &late_evening), 5);
        assert_eq!(
            day_index_at(release_date(), &late_evening.with_timezone(&tz)),
            5
        );
    }

    #[test]
    fn last_puzzle() {
        let release = release_date();
        assert_eq!(last_puzzle_date(release, 0), None);
        assert_eq!(last_puzzle_date(release, 1), Some(release));
        assert_eq!(last_puzzle_date(release, 6), Some(date(2022, 2, 1)));
    }
}
