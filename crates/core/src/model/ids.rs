use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Opaque identifier of a profile record.
///
/// The backend hands these out as strings; they double as the list key and as
/// the path segment of the item endpoint, so they are never empty.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    /// Creates a new `ProfileId`
    ///
    /// # Errors
    ///
    /// Returns `ProfileIdError::Empty` if the value is empty or only whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, ProfileIdError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ProfileIdError::Empty);
        }
        Ok(Self(id))
    }

    /// Returns the underlying string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Error type for building a `ProfileId`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileIdError {
    #[error("profile id must not be empty")]
    Empty,
}

impl fmt::Debug for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProfileId({})", self.0)
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProfileId {
    type Err = ProfileIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ProfileId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ProfileId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        ProfileId::new(raw).map_err(serde::de::Error::custom)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
