//! Error types for the AlgoRythm API client.

use thiserror::Error;

/// Main error type for all API and session operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was received (connect failure, timeout, broken body).
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered 401. The session has already been expired.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The backend answered with any other error status.
    #[error("Server error ({status}): {message}")]
    Status { status: u16, message: String },

    /// A success body did not match the expected shape.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Base URL could not be used.
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    /// The persisted user record could not be written.
    #[error("Session error: {0}")]
    Session(String),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// True when the backend rejected the call with 401.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    /// HTTP status carried by the error, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(401),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
