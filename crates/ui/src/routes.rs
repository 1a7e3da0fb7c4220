use dioxus::prelude::*;
use dioxus_router::Routable;
use directory_core::ProfileId;

use crate::views::{ListingView, NotFoundView, ProfileView};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", ListingView)] Listing {},
    #[route("/profile/:id", ProfileView)] Profile { id: String },
    #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

impl Route {
    /// Target of a card's "details" action: `/profile/{id}/details`.
    ///
    /// No view is registered for this path, so it lands on the not-found page.
    #[must_use]
    pub fn profile_details(id: &ProfileId) -> Self {
        Route::NotFound {
            segments: vec!["profile".to_string(), id.to_string(), "details".to_string()],
        }
    }
}
