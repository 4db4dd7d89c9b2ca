use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{WeekCatalog, WeekId};

/// Completion flags keyed by week. A missing entry means "not completed".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionMap(BTreeMap<WeekId, bool>);

impl CompletionMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_completed(&self, id: WeekId) -> bool {
        self.0.get(&id).copied().unwrap_or(false)
    }

    /// Flip the flag for `id` and return the new value.
    ///
    /// The entry is kept (as `false`) when un-checking, matching how the
    /// record has always been persisted.
    pub fn toggle(&mut self, id: WeekId) -> bool {
        let entry = self.0.entry(id).or_insert(false);
        *entry = !*entry;
        *entry
    }

    pub fn set(&mut self, id: WeekId, completed: bool) {
        self.0.insert(id, completed);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WeekId, bool)> + '_ {
        self.0.iter().map(|(id, done)| (*id, *done))
    }
}

impl FromIterator<(WeekId, bool)> for CompletionMap {
    fn from_iter<I: IntoIterator<Item = (WeekId, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Free-text notes keyed by week. A missing entry reads as an empty note.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotesMap(BTreeMap<WeekId, String>);

impl NotesMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn note(&self, id: WeekId) -> &str {
        self.0.get(&id).map_or("", String::as_str)
    }

    /// Overwrite the note for `id`. Empty text is stored as-is.
    pub fn set(&mut self, id: WeekId, text: impl Into<String>) {
        self.0.insert(id, text.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WeekId, &str)> + '_ {
        self.0.iter().map(|(id, text)| (*id, text.as_str()))
    }
}

impl FromIterator<(WeekId, String)> for NotesMap {
    fn from_iter<I: IntoIterator<Item = (WeekId, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Aggregated completion counts, useful for the progress bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
    pub percentage: f64,
}

impl ProgressSummary {
    /// Count completed weeks of `catalog`.
    ///
    /// Entries for ids outside the catalog are ignored so the percentage
    /// never exceeds 100.
    #[must_use]
    pub fn from_completion(catalog: &WeekCatalog, completion: &CompletionMap) -> Self {
        let total = catalog.len();
        let completed = catalog
            .weeks()
            .iter()
            .filter(|week| completion.is_completed(week.id()))
            .count();
        #[allow(clippy::cast_precision_loss)]
        let percentage = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64 * 100.0
        };
        Self {
            completed,
            total,
            percentage,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}
