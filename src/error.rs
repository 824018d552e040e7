use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answers 500 both for server failures and for an invalid session cookie.
    #[error("Advent of Code server error ({0}), wrong cookie perhaps?")]
    AuthOrServer(StatusCode),

    #[error("HTTP status error: {0}")]
    Status(StatusCode),

    #[error("Decoding raw response error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Could not convert timestamp: {0}")]
    Conversion(String),

    #[error("Invalid sort mode: {0}")]
    InvalidSortMode(String),
}

impl LeaderboardError {
    /// Raw HTTP status returned by the service, if the failure came from one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::AuthOrServer(status) | Self::Status(status) => Some(*status),
            _ => None,
        }
    }
}

/// A leaderboard call can either succeed with the requested type or fail with a [`LeaderboardError`].
pub type LeaderboardResponse<T> = Result<T, LeaderboardError>;
