//! Error types for the lesble crate

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the lesble crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no puzzle for day {day}")]
    NoPuzzleForDay { day: i64 },

    #[error("game already over")]
    SessionComplete,

    #[error("failed to read word list '{}': {source}", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list '{}' is empty", path.display())]
    EmptyWordList { path: PathBuf },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }
}

/// Result alias for lesble operations
pub type Result<T> = std::result::Result<T, Error>;
