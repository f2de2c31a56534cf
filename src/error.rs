//! Error types shared across the scheduler and its storage backend.

use thiserror::Error;

/// Errors surfaced by the drill scheduler.
///
/// Storage and serialization failures are kept as separate variants so the
/// host can tell "progress was not recorded" apart from a bad input.
#[derive(Error, Debug)]
pub enum DrillError {
    /// Self-marked score outside the valid range (negative, NaN, or more
    /// points earned than the question offers).
    #[error("invalid score: {earned} earned out of {total}")]
    InvalidScore { earned: f64, total: f64 },

    /// The storage medium rejected a read or write.
    #[error("storage failure: {0}")]
    Storage(#[from] rusqlite::Error),

    /// A state or catalog payload could not be encoded or decoded.
    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A catalog file could not be opened or written.
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DrillResult<T> = Result<T, DrillError>;
