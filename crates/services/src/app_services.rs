use std::sync::Arc;

use storage::repository::Storage;
use tracker_core::model::WeekCatalog;

use crate::Clock;
use crate::dispatch::DispatchTable;
use crate::error::AppServicesError;
use crate::progress_service::ProgressService;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<WeekCatalog>,
    progress: Arc<ProgressService>,
    dispatch: Arc<DispatchTable>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, clock: Clock, catalog: WeekCatalog) -> Self {
        let catalog = Arc::new(catalog);
        let progress = Arc::new(ProgressService::new(
            clock,
            Arc::clone(&catalog),
            Arc::clone(&storage.kv),
        ));
        Self {
            catalog,
            progress,
            dispatch: Arc::new(DispatchTable::standard()),
        }
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        catalog: WeekCatalog,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::new(&storage, clock, catalog))
    }

    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::new(&Storage::in_memory(), clock, WeekCatalog::default())
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
