use std::sync::Arc;

use storage::records::ProgressStore;
use tokio::sync::Mutex;
use storage::repository::KeyValueStore;
use tracker_core::model::{
    CompletionMap, NotesMap, ProgressSummary, StartDate, WeekCatalog, WeekId,
};
use tracker_core::schedule::current_week;

use crate::Clock;
use crate::command::{Command, ResetDecision, Rerender};
use crate::error::ProgressServiceError;

/// One consistent read of the persisted records plus derived state.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerSnapshot {
    pub completion: CompletionMap,
    pub notes: NotesMap,
    pub start_date: Option<StartDate>,
    pub current_week: Option<WeekId>,
    pub progress: ProgressSummary,
}

/// Applies user actions to the persisted records.
///
/// Every operation is a single read-modify-write against the store; nothing is
/// cached between calls, so the store stays the single source of truth.
/// Writes through one service (and its clones) run one at a time, in the
/// order they were issued.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    catalog: Arc<WeekCatalog>,
    store: ProgressStore,
    writes: Arc<Mutex<()>>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<WeekCatalog>, kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            clock,
            catalog,
            store: ProgressStore::new(kv),
            writes: Arc::new(Mutex::new(())),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<WeekCatalog> {
        Arc::clone(&self.catalog)
    }

    /// Read all records and derive the current week and progress.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the store cannot be read.
    pub async fn snapshot(&self) -> Result<TrackerSnapshot, ProgressServiceError> {
        let completion = self.store.load_completion().await?;
        let notes = self.store.load_notes().await?;
        let start_date = self.store.load_start_date().await?;
        let current_week = current_week(start_date, self.clock.now(), self.catalog.total_weeks());
        let progress = ProgressSummary::from_completion(&self.catalog, &completion);
        Ok(TrackerSnapshot {
            completion,
            notes,
            start_date,
            current_week,
            progress,
        })
    }

    /// Derive the current week from the stored start date.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the store cannot be read.
    pub async fn current_week(&self) -> Result<Option<WeekId>, ProgressServiceError> {
        let start_date = self.store.load_start_date().await?;
        Ok(current_week(
            start_date,
            self.clock.now(),
            self.catalog.total_weeks(),
        ))
    }

    /// Flip the completion flag for a week and return the new value.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the map cannot be read or written.
    pub async fn toggle_completion(&self, week_id: WeekId) -> Result<bool, ProgressServiceError> {
        let _guard = self.writes.lock().await;
        let mut completion = self.store.load_completion().await?;
        let completed = completion.toggle(week_id);
        self.store.save_completion(&completion).await?;
        tracing::debug!(week_id = %week_id, completed, "toggled week");
        Ok(completed)
    }

    /// Overwrite the note for a week.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the map cannot be read or written.
    pub async fn edit_note(
        &self,
        week_id: WeekId,
        text: impl Into<String>,
    ) -> Result<(), ProgressServiceError> {
        let _guard = self.writes.lock().await;
        let mut notes = self.store.load_notes().await?;
        notes.set(week_id, text);
        self.store.save_notes(&notes).await?;
        tracing::debug!(week_id = %week_id, "saved note");
        Ok(())
    }

    /// Store the start date from raw picker input.
    ///
    /// Blank input is ignored and returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::InvalidStartDate` for non-blank input that
    /// is not a `YYYY-MM-DD` date, or `ProgressServiceError::Storage` if the
    /// value cannot be written.
    pub async fn set_start_date(
        &self,
        raw: &str,
    ) -> Result<Option<StartDate>, ProgressServiceError> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        let date = StartDate::parse(raw)?;
        let _guard = self.writes.lock().await;
        self.store.save_start_date(date).await?;
        tracing::debug!(start_date = %date, "set start date");
        Ok(Some(date))
    }

    /// Forget the start date so a new one can be picked.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the record cannot be removed.
    pub async fn change_start_date(&self) -> Result<(), ProgressServiceError> {
        let _guard = self.writes.lock().await;
        self.store.clear_start_date().await?;
        tracing::debug!("cleared start date");
        Ok(())
    }

    /// Clear every record when the user confirmed; do nothing otherwise.
    ///
    /// Returns whether anything was cleared.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if a record cannot be removed.
    pub async fn reset_all(&self, decision: ResetDecision) -> Result<bool, ProgressServiceError> {
        match decision {
            ResetDecision::Declined => Ok(false),
            ResetDecision::Confirmed => {
                let _guard = self.writes.lock().await;
                self.store.clear_all().await?;
                tracing::info!("reset all progress, notes and start date");
                Ok(true)
            }
        }
    }

    /// Run a command and report what has to be redrawn.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying operation.
    pub async fn apply(&self, command: Command) -> Result<Rerender, ProgressServiceError> {
        match command {
            Command::ToggleCompletion(week_id) => {
                self.toggle_completion(week_id).await?;
                Ok(Rerender::WeekList)
            }
            Command::EditNote { week_id, text } => {
                self.edit_note(week_id, text).await?;
                Ok(Rerender::Nothing)
            }
            Command::SetStartDate(raw) => match self.set_start_date(&raw).await? {
                Some(_) => Ok(Rerender::All),
                None => Ok(Rerender::Nothing),
            },
            Command::ChangeStartDate => {
                self.change_start_date().await?;
                Ok(Rerender::All)
            }
            Command::ResetAll(decision) => {
                if self.reset_all(decision).await? {
                    Ok(Rerender::All)
                } else {
                    Ok(Rerender::Nothing)
                }
            }
        }
    }
}
