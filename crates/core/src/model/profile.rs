use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::model::ids::ProfileId;

//
// ─── PROFILE ───────────────────────────────────────────────────────────────────
//

/// A directory profile as served by the backend.
///
/// The collection and item endpoints return the same shape, so the summary and
/// detail records share this type. Fetched records are never mutated; a view
/// replaces its copy wholesale on every successful refetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    id: ProfileId,
    name: String,
    #[serde(default)]
    title: String,
    // The backend spells this field `desction`.
    #[serde(rename = "desction", alias = "description", default)]
    description: Option<String>,
    #[serde(default)]
    avatar: String,
    #[serde(rename = "createdAt")]
    created_at: DateTime<Utc>,
}

/// Record returned by the collection endpoint.
pub type ProfileSummary = Profile;

/// Record returned by the item endpoint.
pub type ProfileDetail = Profile;

impl Profile {
    #[must_use]
    pub fn new(
        id: ProfileId,
        name: impl Into<String>,
        title: impl Into<String>,
        description: Option<String>,
        avatar: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            title: title.into(),
            description,
            avatar: avatar.into(),
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ProfileId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Short description; `None` when absent, null or blank.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }

    /// The avatar as an absolute http(s) URL, or `None` if it cannot be used.
    #[must_use]
    pub fn avatar_url(&self) -> Option<Url> {
        let url = Url::parse(self.avatar.trim()).ok()?;
        matches!(url.scheme(), "http" | "https").then_some(url)
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
