use std::sync::Arc;

use services::{
    ActionOrigin, AppServices, Clock, ProgressService, Rerender, UiEvent,
};
use storage::repository::{KeyValueStore, Storage, StorageError};
use tracker_core::model::{WeekCatalog, WeekId};
use tracker_core::time::fixed_now;

async fn dispatch(services: &AppServices, event: UiEvent) -> Rerender {
    let command = services.dispatch().route(&event).expect("routed event");
    services.progress().apply(command).await.expect("apply")
}

#[tokio::test]
async fn tracker_flow_through_dispatch_table() {
    let storage = Storage::sqlite("sqlite:file:memdb_tracker_flow?mode=memory&cache=shared")
        .await
        .expect("connect sqlite");
    let services = AppServices::new(&storage, Clock::fixed(fixed_now()), WeekCatalog::default());

    let rerender = dispatch(
        &services,
        UiEvent::click(ActionOrigin::SetDateButton).with_value("2024-03-06"),
    )
    .await;
    assert_eq!(rerender, Rerender::All);

    for week in [1, 2] {
        let rerender = dispatch(
            &services,
            UiEvent::click(ActionOrigin::WeekHeader).for_week(WeekId::new(week)),
        )
        .await;
        assert_eq!(rerender, Rerender::WeekList);
    }

    let rerender = dispatch(
        &services,
        UiEvent::input(ActionOrigin::NotesInput, "chart reading").for_week(WeekId::new(5)),
    )
    .await;
    assert_eq!(rerender, Rerender::Nothing);

    let snapshot = services.progress().snapshot().await.expect("snapshot");
    assert_eq!(snapshot.current_week, Some(WeekId::new(3)));
    assert_eq!(snapshot.progress.completed, 2);
    assert!((snapshot.progress.percentage - 20.0).abs() < 1e-9);
    assert_eq!(snapshot.notes.note(WeekId::new(5)), "chart reading");

    let rerender = dispatch(&services, UiEvent::click(ActionOrigin::ResetCancel)).await;
    assert_eq!(rerender, Rerender::Nothing);
    let rerender = dispatch(&services, UiEvent::click(ActionOrigin::ResetConfirm)).await;
    assert_eq!(rerender, Rerender::All);

    let snapshot = services.progress().snapshot().await.expect("snapshot");
    assert!(snapshot.completion.is_empty());
    assert!(snapshot.notes.is_empty());
    assert_eq!(snapshot.current_week, None);
}

#[tokio::test]
async fn note_survives_reload() {
    let url = "sqlite:file:memdb_note_reload?mode=memory&cache=shared";
    let clock = Clock::fixed(fixed_now());
    let first = AppServices::new_sqlite(url, clock, WeekCatalog::default())
        .await
        .expect("first open");
    first
        .progress()
        .edit_note(WeekId::new(5), "visual reasoning: compare two charts")
        .await
        .expect("save note");

    let second = AppServices::new_sqlite(url, clock, WeekCatalog::default())
        .await
        .expect("second open");
    let snapshot = second.progress().snapshot().await.expect("snapshot");
    assert_eq!(
        snapshot.notes.note(WeekId::new(5)),
        "visual reasoning: compare two charts"
    );
    drop(first);
}

struct FailingStore;

#[async_trait::async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("quota exceeded".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("quota exceeded".to_string()))
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("quota exceeded".to_string()))
    }
}

#[tokio::test]
async fn storage_failures_propagate() {
    let service = ProgressService::new(
        Clock::fixed(fixed_now()),
        Arc::new(WeekCatalog::default()),
        Arc::new(FailingStore),
    );
    assert!(service.snapshot().await.is_err());
    assert!(service.toggle_completion(WeekId::new(1)).await.is_err());
    assert!(service.set_start_date("2024-01-15").await.is_err());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_writes_are_not_lost() {
    let services = AppServices::new_sqlite(
        "sqlite:file:memdb_concurrent_writes?mode=memory&cache=shared",
        Clock::fixed(fixed_now()),
        WeekCatalog::default(),
    )
    .await
    .expect("connect sqlite");

    for round in 0..50 {
        let progress = services.progress();
        let notes_a = {
            let progress = Arc::clone(&progress);
            tokio::spawn(async move { progress.edit_note(WeekId::new(1), format!("a{round}")).await })
        };
        let notes_b = {
            let progress = Arc::clone(&progress);
            tokio::spawn(async move { progress.edit_note(WeekId::new(2), format!("b{round}")).await })
        };
        let toggle = {
            let progress = Arc::clone(&progress);
            tokio::spawn(async move { progress.toggle_completion(WeekId::new(3)).await })
        };
        notes_a.await.expect("join").expect("note a");
        notes_b.await.expect("join").expect("note b");
        toggle.await.expect("join").expect("toggle");

        let snapshot = progress.snapshot().await.expect("snapshot");
        assert_eq!(snapshot.notes.note(WeekId::new(1)), format!("a{round}"), "round {round}");
        assert_eq!(snapshot.notes.note(WeekId::new(2)), format!("b{round}"), "round {round}");
        assert_eq!(
            snapshot.completion.is_completed(WeekId::new(3)),
            round % 2 == 0,
            "round {round}"
        );
    }
}
