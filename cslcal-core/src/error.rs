//! Error types for schedule processing.

use thiserror::Error;

/// Errors that can occur while turning a league file into calendars.
///
/// Any of these aborts processing for the league file that produced it;
/// other files in the same run are unaffected.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("League file is not a valid schedule: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}': expected HH:MM")]
    InvalidTime(String),

    #[error("Round must be a positive integer")]
    InvalidRound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
