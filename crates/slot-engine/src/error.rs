//! Error types for slot-engine operations.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// An opening with the same start and end is already stored.
    #[error("opening already exists: {starts_at} - {ends_at}")]
    DuplicateOpening {
        starts_at: NaiveDateTime,
        ends_at: NaiveDateTime,
    },

    /// Event records could not be decoded from JSON.
    #[error("Event parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The backing event store failed. Passed through untouched.
    #[error("Repository error: {0}")]
    Repository(String),

    /// The report horizon runs past the last representable date.
    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
