//! Fetch error types.

use thiserror::Error;

/// Errors that can occur when reading from the catalog API.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    #[error("Request failed: {0}")]
    Request(String),

    /// The base URL or a path could not be turned into a URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Non-success HTTP status.
    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// Failed to parse response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl FetchError {
    /// HTTP status of the failure, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Request(e.to_string())
    }
}
