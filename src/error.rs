//! Error types for the balance pipeline.
//!
//! Only two things can go wrong inside the pipeline: the portal could not be
//! reached (or answered with a failure status), or the markup could not be
//! turned into something we can query. A field missing from the page is not an
//! error and never shows up here.

use reqwest::StatusCode;
use thiserror::Error;

/// Result alias for pipeline operations
pub type Result<T> = std::result::Result<T, BalanceError>;

/// Failures surfaced by [`crate::Pipeline::get_card_details`]
#[derive(Debug, Error)]
pub enum BalanceError {
    /// The balance endpoint could not be reached or did not answer successfully
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// The markup could not be parsed into a queryable tree
    #[error("Parse error: {0}")]
    Parse(String),
}

impl BalanceError {
    /// True when the outbound request was aborted by the request timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(NetworkError::Timeout(_)))
    }

    /// True for any failure that happened before parsing started
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

/// Why the outbound request failed
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The request did not complete within the configured timeout
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// Connection refused, DNS failure, reset, or any other transport failure
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The endpoint answered, but not with a success status
    #[error("balance endpoint responded with {0}")]
    Status(StatusCode),
}

impl From<reqwest::Error> for NetworkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            NetworkError::Timeout(e)
        } else {
            match e.status() {
                Some(status) if !status.is_success() => NetworkError::Status(status),
                _ => NetworkError::Transport(e),
            }
        }
    }
}

impl From<reqwest::Error> for BalanceError {
    fn from(e: reqwest::Error) -> Self {
        BalanceError::Network(e.into())
    }
}
