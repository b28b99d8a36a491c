//! Error types for the Igniters site crates.

use thiserror::Error;

/// Errors from talking to the remote site endpoints.
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Endpoint returned HTTP {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("Malformed events payload: {0}")]
    MalformedBody(String),
}

/// Result type alias for site operations.
pub type SiteResult<T> = Result<T, SiteError>;
