//! Core game rules
//!
//! Pure types and functions with no I/O: day numbering, the dictionary,
//! grading and letter knowledge.

pub mod day;
mod dictionary;
mod grade;
mod knowledge;
mod verdict;

pub use day::{day_index, day_index_at, release_date};
pub use dictionary::Dictionary;
pub use grade::{Grade, grade};
pub use knowledge::LetterKnowledge;
pub use verdict::{LetterVerdict, Verdict, verdicts_to_emoji};
