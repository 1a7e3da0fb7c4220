mod avatar;
mod listing;
mod not_found;
mod panels;
mod profile;
mod state;

#[cfg(test)]
mod view_smoke;

pub use listing::ListingView;
pub use not_found::NotFoundView;
pub use panels::LoadingPanel;
pub use profile::ProfileView;
pub use state::{
    AsyncResource, ViewError, ViewState, use_async_resource, view_state_from_resource,
};

#[cfg(test)]
pub(crate) use test_harness::ViewTestHandles;
