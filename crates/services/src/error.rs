//! Shared error types for the services crate.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single `ResourceFetcher` request.
///
/// The three kinds end up in the same error panel; only the message differs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// DNS, connection or timeout failure; carries the transport error text.
    #[error("{0}")]
    Transport(String),
    #[error("HTTP error! status: {}", .0.as_u16())]
    HttpStatus(StatusCode),
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Numeric status code for `HttpStatus` failures.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus(status) => Some(status.as_u16()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

/// Errors emitted while resolving `DirectoryConfig`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid API base URL {raw:?}: {source}")]
    InvalidBaseUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("API base URL {0:?} cannot carry path segments")]
    CannotBeABase(String),
}
