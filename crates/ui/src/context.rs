use std::sync::Arc;

use services::{AppServices, DispatchTable, ProgressService};
use tracker_core::model::WeekCatalog;

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<WeekCatalog>;
    fn progress(&self) -> Arc<ProgressService>;
    fn dispatch(&self) -> Arc<DispatchTable>;
}

impl UiApp for AppServices {
    fn catalog(&self) -> Arc<WeekCatalog> {
        AppServices::catalog(self)
    }

    fn progress(&self) -> Arc<ProgressService> {
        AppServices::progress(self)
    }

    fn dispatch(&self) -> Arc<DispatchTable> {
        AppServices::dispatch(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<WeekCatalog>,
    progress: Arc<ProgressService>,
    dispatch: Arc<DispatchTable>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            progress: app.progress(),
            dispatch: app.dispatch(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<WeekCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn dispatch(&self) -> Arc<DispatchTable> {
        Arc::clone(&self.dispatch)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
