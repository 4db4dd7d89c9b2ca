use std::sync::Arc;

use storage::repository::{KeyValueStore, Storage};
use storage::sqlite::SqliteRepository;
use storage::{ProgressStore, RecordKey};
use tracker_core::model::{CompletionMap, NotesMap, StartDate, WeekId};

#[tokio::test]
async fn sqlite_key_value_roundtrip() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get("missing").await.unwrap(), None);

    repo.set("k", "one").await.unwrap();
    repo.set("k", "two").await.unwrap();
    assert_eq!(repo.get("k").await.unwrap().as_deref(), Some("two"));

    repo.remove("k").await.unwrap();
    repo.remove("k").await.unwrap();
    assert_eq!(repo.get("k").await.unwrap(), None);
}

#[tokio::test]
async fn sqlite_migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.set("kept", "value").await.unwrap();
    repo.migrate().await.expect("second migrate");
    assert_eq!(repo.get("kept").await.unwrap().as_deref(), Some("value"));
}

#[tokio::test]
async fn sqlite_records_survive_reopen() {
    let url = "sqlite:file:memdb_kv_reopen?mode=memory&cache=shared";
    let first = Storage::sqlite(url).await.expect("open first");
    let records = ProgressStore::new(Arc::clone(&first.kv));

    let mut notes = NotesMap::new();
    notes.set(WeekId::new(5), "vision models: try chart reading");
    records.save_notes(&notes).await.unwrap();
    let mut completion = CompletionMap::new();
    completion.set(WeekId::new(1), true);
    records.save_completion(&completion).await.unwrap();
    records
        .save_start_date(StartDate::parse("2024-01-15").unwrap())
        .await
        .unwrap();

    // Keep the first pool alive so the shared in-memory database persists.
    let second = Storage::sqlite(url).await.expect("open second");
    let reopened = ProgressStore::new(Arc::clone(&second.kv));

    assert_eq!(
        reopened.load_notes().await.unwrap().note(WeekId::new(5)),
        "vision models: try chart reading"
    );
    assert!(reopened.load_completion().await.unwrap().is_completed(WeekId::new(1)));
    assert_eq!(
        second
            .kv
            .get(RecordKey::StartDate.as_str())
            .await
            .unwrap()
            .as_deref(),
        Some("2024-01-15")
    );
    drop(first);
}

#[tokio::test]
async fn sqlite_clear_all_removes_records() {
    let storage = Storage::sqlite("sqlite:file:memdb_kv_clear?mode=memory&cache=shared")
        .await
        .expect("open");
    let records = ProgressStore::new(Arc::clone(&storage.kv));
    records
        .save_start_date(StartDate::parse("2024-02-01").unwrap())
        .await
        .unwrap();
    records
        .save_completion(&[(WeekId::new(2), true)].into_iter().collect())
        .await
        .unwrap();

    records.clear_all().await.unwrap();

    for key in RecordKey::ALL {
        assert_eq!(storage.kv.get(key.as_str()).await.unwrap(), None);
    }
    assert_eq!(records.load_start_date().await.unwrap(), None);
}
