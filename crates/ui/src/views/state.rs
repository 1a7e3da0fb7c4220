use std::future::Future;

use dioxus::prelude::*;
use services::FetchError;

/// Message shown in a view's error panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewError {
    message: String,
}

impl ViewError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Fetch failure as-is: status text, transport text or parse error text.
    #[must_use]
    pub fn from_fetch(err: &FetchError) -> Self {
        Self::new(err.to_string())
    }

    /// Fetch failure of a single-profile lookup; HTTP failures read as
    /// `Profile not found (<status>)`.
    #[must_use]
    pub fn profile_lookup(err: &FetchError) -> Self {
        match err.status_code() {
            Some(code) => Self::new(format!("Profile not found ({code})")),
            None => Self::from_fetch(err),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Loading,
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

/// A fetch bound to a component: current `ViewState` plus a trigger.
///
/// Triggering while a fetch is in flight drops that fetch, so only the most
/// recently started one can publish a result. Unmounting the owning component
/// drops it as well.
pub struct AsyncResource<T: 'static> {
    inner: Resource<Result<T, ViewError>>,
}

impl<T: 'static> Clone for AsyncResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for AsyncResource<T> {}

impl<T: Clone + 'static> AsyncResource<T> {
    #[must_use]
    pub fn state(&self) -> ViewState<T> {
        view_state_from_resource(self.inner)
    }

    /// Start over: back to `Loading`, then a fresh fetch.
    pub fn trigger(&mut self) {
        self.inner.restart();
    }
}

/// Run `fetch` on mount and whenever a reactive value it reads changes.
pub fn use_async_resource<T, F, Fut>(fetch: F) -> AsyncResource<T>
where
    T: 'static,
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = Result<T, ViewError>> + 'static,
{
    AsyncResource {
        inner: use_resource(fetch),
    }
}
