use std::sync::Arc;

use services::DirectoryService;

pub trait UiApp: Send + Sync {
    fn directory(&self) -> Arc<DirectoryService>;
}

#[derive(Clone)]
pub struct AppContext {
    directory: Arc<DirectoryService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            directory: app.directory(),
        }
    }

    #[must_use]
    pub fn directory(&self) -> Arc<DirectoryService> {
        Arc::clone(&self.directory)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
