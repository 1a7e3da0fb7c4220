use std::sync::Arc;

use directory_core::{ProfileDetail, ProfileId, ProfileSummary};

use crate::config::DirectoryConfig;
use crate::error::FetchError;
use crate::fetcher::{HttpFetcher, ResourceFetcher};

/// Read-only access to the profile directory backend.
///
/// Holds no state between calls; every view owns whatever it fetched.
#[derive(Clone)]
pub struct DirectoryService {
    config: DirectoryConfig,
    fetcher: Arc<dyn ResourceFetcher>,
}

impl DirectoryService {
    #[must_use]
    pub fn new(config: DirectoryConfig, fetcher: Arc<dyn ResourceFetcher>) -> Self {
        Self { config, fetcher }
    }

    /// Service talking HTTP to the configured backend.
    #[must_use]
    pub fn http(config: DirectoryConfig) -> Self {
        Self::new(config, Arc::new(HttpFetcher::new()))
    }

    /// Fetch the whole collection, in the order the backend returns it.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the request fails or the payload is not an
    /// array of profiles.
    pub async fn list_profiles(&self) -> Result<Vec<ProfileSummary>, FetchError> {
        let url = self.config.collection_url();
        let payload = self.fetcher.get_json(&url).await.inspect_err(|err| {
            log::warn!("listing profiles from {url} failed: {err}");
        })?;
        let profiles: Vec<ProfileSummary> =
            serde_json::from_value(payload).inspect_err(|err| {
                log::warn!("profiles from {url} did not decode: {err}");
            })?;
        log::info!("fetched {} profiles", profiles.len());
        Ok(profiles)
    }

    /// Fetch one profile by identifier.
    ///
    /// A `null` body is not a failure: it yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the request fails (including a 404 for an
    /// unknown identifier) or the payload is not a profile.
    pub async fn get_profile(&self, id: &ProfileId) -> Result<Option<ProfileDetail>, FetchError> {
        let url = self.config.item_url(id);
        let payload = self.fetcher.get_json(&url).await.inspect_err(|err| {
            log::warn!("loading profile {id} from {url} failed: {err}");
        })?;
        if payload.is_null() {
            log::debug!("profile {id} came back empty");
            return Ok(None);
        }
        let profile = serde_json::from_value::<ProfileDetail>(payload).inspect_err(|err| {
            log::warn!("profile {id} from {url} did not decode: {err}");
        })?;
        Ok(Some(profile))
    }
}
