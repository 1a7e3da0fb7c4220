use url::Url;

const FALLBACK_AVATAR_BASE: &str = "https://ui-avatars.com/api/";

/// Pixel size requested from the placeholder service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AvatarSize {
    Card,
    Detail,
}

impl AvatarSize {
    fn pixels(self) -> u32 {
        match self {
            AvatarSize::Card => 128,
            AvatarSize::Detail => 256,
        }
    }
}

/// Image sources for one avatar: the served URL (when usable) and the
/// generated placeholder it degrades to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarVm {
    pub alt: String,
    pub primary: Option<String>,
    pub fallback: String,
}

impl AvatarVm {
    #[must_use]
    pub fn new(name: &str, primary: Option<&Url>, size: AvatarSize) -> Self {
        Self {
            alt: name.to_string(),
            primary: primary.map(Url::to_string),
            fallback: fallback_avatar_url(name, size),
        }
    }

    /// Source to render, given the primary URL that already failed to load (if any).
    #[must_use]
    pub fn src(&self, failed: Option<&str>) -> &str {
        match self.primary.as_deref() {
            Some(primary) if failed != Some(primary) => primary,
            _ => &self.fallback,
        }
    }

    /// What to remember after a load error.
    ///
    /// Returns the primary URL while it is still the rendered source, and `None`
    /// once the placeholder is showing, so a broken placeholder is never swapped
    /// again.
    #[must_use]
    pub fn failure_to_record(&self, failed: Option<&str>) -> Option<String> {
        match self.primary.as_deref() {
            Some(primary) if failed != Some(primary) => Some(primary.to_string()),
            _ => None,
        }
    }
}

/// Placeholder avatar keyed by display name.
#[must_use]
pub fn fallback_avatar_url(name: &str, size: AvatarSize) -> String {
    let size = size.pixels().to_string();
    Url::parse_with_params(
        FALLBACK_AVATAR_BASE,
        &[
            ("name", name),
            ("background", "random"),
            ("size", size.as_str()),
        ],
    )
    .map_or_else(|_| FALLBACK_AVATAR_BASE.to_string(), String::from)
}
