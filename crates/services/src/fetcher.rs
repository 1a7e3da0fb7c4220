use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::error::FetchError;

/// Performs one GET against a fully-qualified URL and returns the decoded JSON.
///
/// Implementations never retry; a retry is a new call from the caller.
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// # Errors
    ///
    /// Returns `FetchError::Transport` when the request cannot be completed,
    /// `FetchError::HttpStatus` for a non-2xx response and
    /// `FetchError::Decode` when the body is not valid JSON.
    async fn get_json(&self, url: &Url) -> Result<Value, FetchError>;
}

/// `ResourceFetcher` backed by `reqwest` with platform defaults
/// (no custom headers, no timeout).
#[derive(Clone, Debug, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ResourceFetcher for HttpFetcher {
    async fn get_json(&self, url: &Url) -> Result<Value, FetchError> {
        log::debug!("GET {url}");
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status));
        }

        // Read the body first so a broken connection and a malformed payload
        // surface as different errors.
        let body = response.bytes().await?;
        let value = serde_json::from_slice(&body)?;
        Ok(value)
    }
}
