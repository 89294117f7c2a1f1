//! Error types for page fetching

use thiserror::Error;

/// Result type alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

/// Why a poll could not obtain the page body
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, redirect or timeout failure
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("unexpected HTTP status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Response headers arrived but the body could not be read
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Source is not an absolute http(s) URL
    #[error("invalid source URL '{0}'")]
    InvalidUrl(String),
}

impl FetchError {
    /// Whether the failure came from the remote side rather than our input
    #[must_use]
    pub fn is_remote(&self) -> bool {
        !matches!(self, FetchError::InvalidUrl(_))
    }
}
