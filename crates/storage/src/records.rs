//! Typed access to the three tracker records.
//!
//! Maps are persisted whole as JSON objects; the start date is persisted as a
//! raw `YYYY-MM-DD` string. A record that is not a JSON object reads as its
//! empty default. Inside an object, entries are decoded one by one. Entries
//! whose value has the wrong shape are skipped. Keys that are not week ids are
//! skipped on read and written back untouched on save.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracker_core::model::{CompletionMap, NotesMap, StartDate, WeekId};

use crate::repository::{KeyValueStore, StorageError};

/// Names of the persisted records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKey {
    Completion,
    Notes,
    StartDate,
}

impl RecordKey {
    pub const ALL: [RecordKey; 3] = [Self::Completion, Self::Notes, Self::StartDate];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completion => "ai-project-progress",
            Self::Notes => "ai-project-notes",
            Self::StartDate => "ai-project-start-date",
        }
    }
}

/// Record-level facade over a `KeyValueStore`.
#[derive(Clone)]
pub struct ProgressStore {
    kv: Arc<dyn KeyValueStore>,
}

impl ProgressStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read. Malformed JSON is
    /// not an error; it reads as an empty map.
    pub async fn load_completion(&self) -> Result<CompletionMap, StorageError> {
        let object = self.load_object(RecordKey::Completion).await?;
        Ok(week_entries(RecordKey::Completion, object, coerce_flag).collect())
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the map cannot be encoded or written.
    pub async fn save_completion(&self, completion: &CompletionMap) -> Result<(), StorageError> {
        let entries = completion.iter().map(|(id, done)| (id, Value::Bool(done)));
        self.save_entries(RecordKey::Completion, entries).await
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read. Malformed JSON is
    /// not an error; it reads as an empty map.
    pub async fn load_notes(&self) -> Result<NotesMap, StorageError> {
        let object = self.load_object(RecordKey::Notes).await?;
        Ok(week_entries(RecordKey::Notes, object, coerce_note).collect())
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the map cannot be encoded or written.
    pub async fn save_notes(&self, notes: &NotesMap) -> Result<(), StorageError> {
        let entries = notes
            .iter()
            .map(|(id, text)| (id, Value::String(text.to_string())));
        self.save_entries(RecordKey::Notes, entries).await
    }

    /// Load the start date; an unparseable stored value reads as unset.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    pub async fn load_start_date(&self) -> Result<Option<StartDate>, StorageError> {
        let key = RecordKey::StartDate.as_str();
        let Some(raw) = self.kv.get(key).await? else {
            return Ok(None);
        };
        match StartDate::parse(&raw) {
            Ok(date) => Ok(Some(date)),
            Err(err) => {
                tracing::warn!(key, error = %err, "ignoring malformed start date record");
                Ok(None)
            }
        }
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written.
    pub async fn save_start_date(&self, date: StartDate) -> Result<(), StorageError> {
        self.kv
            .set(RecordKey::StartDate.as_str(), &date.to_storage_string())
            .await
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be removed.
    pub async fn clear_start_date(&self) -> Result<(), StorageError> {
        self.kv.remove(RecordKey::StartDate.as_str()).await
    }

    /// Remove all three records. Not atomic across keys.
    ///
    /// # Errors
    ///
    /// Returns the first `StorageError`; records already removed stay removed.
    pub async fn clear_all(&self) -> Result<(), StorageError> {
        for key in RecordKey::ALL {
            self.kv.remove(key.as_str()).await?;
        }
        Ok(())
    }

    async fn load_object(&self, record: RecordKey) -> Result<Map<String, Value>, StorageError> {
        let key = record.as_str();
        let Some(raw) = self.kv.get(key).await? else {
            return Ok(Map::new());
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(object)) => Ok(object),
            Ok(_) => {
                tracing::warn!(key, "ignoring record that is not a JSON object");
                Ok(Map::new())
            }
            Err(err) => {
                tracing::warn!(key, error = %err, "ignoring malformed record");
                Ok(Map::new())
            }
        }
    }

    /// Replace every week-keyed entry of the stored object with `entries`,
    /// keeping keys that are not week ids as they were.
    async fn save_entries(
        &self,
        record: RecordKey,
        entries: impl Iterator<Item = (WeekId, Value)>,
    ) -> Result<(), StorageError> {
        let mut object = self.load_object(record).await?;
        object.retain(|key, _| key.parse::<WeekId>().is_err());
        object.extend(entries.map(|(id, value)| (id.to_string(), value)));
        let encoded = serde_json::to_string(&object)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.kv.set(record.as_str(), &encoded).await
    }
}

fn week_entries<T>(
    record: RecordKey,
    object: Map<String, Value>,
    coerce: fn(Value) -> Option<T>,
) -> impl Iterator<Item = (WeekId, T)> {
    object.into_iter().filter_map(move |(raw_key, value)| {
        let Ok(id) = raw_key.parse::<WeekId>() else {
            tracing::debug!(key = record.as_str(), entry = %raw_key, "skipping non-week entry");
            return None;
        };
        let coerced = coerce(value);
        if coerced.is_none() {
            tracing::warn!(key = record.as_str(), week_id = %id, "skipping malformed entry");
        }
        coerced.map(|value| (id, value))
    })
}

fn coerce_flag(value: Value) -> Option<bool> {
    match value {
        Value::Bool(done) => Some(done),
        Value::String(text) => match text.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        Value::Number(n) => n.as_f64().map(|v| v != 0.0),
        _ => None,
    }
}

fn coerce_note(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
