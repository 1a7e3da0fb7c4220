use std::env;

use directory_core::ProfileId;
use url::Url;

use crate::error::ConfigError;

/// Host of the hosted mock backend the directory reads from.
pub const DEFAULT_BASE_URL: &str = "https://68a0edbc6f8c17b8f5d8d215.mockapi.io";

/// Environment variable overriding `DEFAULT_BASE_URL`.
pub const BASE_URL_ENV: &str = "DIRECTORY_API_BASE_URL";

const RESOURCE_PATH: [&str; 2] = ["api", "test"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryConfig {
    base_url: Url,
}

impl DirectoryConfig {
    /// Build a config from a base URL such as `http://127.0.0.1:3000`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the value is not an absolute URL that can carry
    /// path segments.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let raw = base_url.trim();
        let base_url = Url::parse(raw).map_err(|source| ConfigError::InvalidBaseUrl {
            raw: raw.to_string(),
            source,
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::CannotBeABase(raw.to_string()));
        }
        Ok(Self { base_url })
    }

    /// Read `DIRECTORY_API_BASE_URL`, falling back to the hosted backend.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the variable is set to an unusable URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::new(&value),
            _ => Ok(Self::default()),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/api/test`
    #[must_use]
    pub fn collection_url(&self) -> Url {
        self.url_with_segments(&[])
    }

    /// `{base}/api/test/{id}`, with the id encoded as a single path segment.
    #[must_use]
    pub fn item_url(&self, id: &ProfileId) -> Url {
        self.url_with_segments(&[id.as_str()])
    }

    fn url_with_segments(&self, extra: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(RESOURCE_PATH)
                .extend(extra);
        }
        url
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
        }
    }
}
