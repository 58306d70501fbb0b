//! Error types for clubcal.

use thiserror::Error;

/// Errors that can occur in clubcal operations.
#[derive(Error, Debug)]
pub enum ClubcalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid event source '{0}'")]
    InvalidSource(String),

    #[error("Invalid month {0} (expected 0-11)")]
    InvalidMonth(u32),

    #[error("Year {0} is out of range")]
    InvalidYear(i32),

    #[error("Event source returned HTTP {0}")]
    Status(u16),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for clubcal operations.
pub type ClubcalResult<T> = Result<T, ClubcalError>;
