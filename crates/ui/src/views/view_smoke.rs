use std::sync::Arc;

use services::{ActionOrigin, AppServices, Clock, UiEvent};
use storage::repository::{KeyValueStore, Storage, StorageError};
use tracker_core::model::{WeekCatalog, WeekId};
use tracker_core::time::fixed_now;

use super::test_harness::setup_view_harness;

fn seed_services(storage: &Storage) -> AppServices {
    AppServices::new(storage, Clock::fixed(fixed_now()), WeekCatalog::default())
}

async fn render_ready(storage: &Storage) -> String {
    let mut harness = setup_view_harness(storage);
    harness.rebuild();
    harness.drive_async().await;
    harness.render()
}

#[tokio::test(flavor = "current_thread")]
async fn tracker_view_smoke_renders_fresh_state() {
    let html = render_ready(&Storage::in_memory()).await;

    assert!(html.contains("Set your project start date:"), "missing picker in {html}");
    assert!(html.contains("Set Start Date"), "missing set button in {html}");
    assert!(html.contains("Week 1 - Resolution Tracker"), "missing first week in {html}");
    assert!(html.contains("Week 10 - Build an AI App"), "missing last week in {html}");
    assert!(html.contains("Week 10 of 10"), "missing caption in {html}");
    assert!(html.contains("width: 0%;"), "missing empty bar in {html}");
    assert!(!html.contains("Current Week"), "unexpected badge in {html}");
    assert!(html.contains("Reset All Progress"), "missing reset in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn tracker_view_smoke_renders_persisted_state() {
    let storage = Storage::in_memory();
    let progress = seed_services(&storage).progress();
    progress.set_start_date("2024-03-06").await.expect("start date");
    for week in [1, 2, 3] {
        progress
            .toggle_completion(WeekId::new(week))
            .await
            .expect("toggle");
    }
    progress
        .edit_note(WeekId::new(5), "review transformer basics")
        .await
        .expect("note");

    let html = render_ready(&storage).await;

    assert!(
        html.contains("Project started: Wednesday, March 6, 2024"),
        "missing start date in {html}"
    );
    assert!(html.contains("Change"), "missing change button in {html}");
    assert!(html.contains("Current Week"), "missing badge in {html}");
    assert!(html.contains("current-week"), "missing current class in {html}");
    assert!(html.contains("width: 30%;"), "missing bar width in {html}");
    assert!(html.contains("(30%)"), "missing percent in {html}");
    assert!(
        html.contains("review transformer basics"),
        "missing note in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn tracker_view_smoke_reflects_dispatched_reset() {
    let storage = Storage::in_memory();
    let services = seed_services(&storage);
    let progress = services.progress();
    progress.set_start_date("2024-03-06").await.expect("start date");
    progress
        .toggle_completion(WeekId::new(1))
        .await
        .expect("toggle");

    let command = services
        .dispatch()
        .route(&UiEvent::click(ActionOrigin::ResetConfirm))
        .expect("routed");
    progress.apply(command).await.expect("reset");

    let html = render_ready(&storage).await;
    assert!(html.contains("Set your project start date:"), "missing picker in {html}");
    assert!(html.contains("width: 0%;"), "missing empty bar in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn tracker_view_smoke_refreshes_after_actions() {
    let mut harness = setup_view_harness(&Storage::in_memory());
    harness.rebuild();
    harness.drive_async().await;

    harness.send(UiEvent::click(ActionOrigin::WeekHeader).for_week(WeekId::new(1)));
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("width: 10%;"), "bar not refreshed in {html}");
    assert!(html.contains("✓"), "missing check mark in {html}");

    harness.set_date_input("2024-03-06");
    harness.drive_async().await;
    harness.send(UiEvent::click(ActionOrigin::SetDateButton).with_value("2024-03-06"));
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Project started: Wednesday, March 6, 2024"),
        "date region not refreshed in {html}"
    );
    assert!(html.contains("Current Week"), "missing badge in {html}");
    assert_eq!(harness.date_input(), "");

    harness.send(UiEvent::input(ActionOrigin::NotesInput, "draft outline").for_week(WeekId::new(2)));
    harness.drive_async().await;
    let snapshot = harness.services.progress().snapshot().await.expect("snapshot");
    assert_eq!(snapshot.notes.note(WeekId::new(2)), "draft outline");

    harness.send(UiEvent::click(ActionOrigin::ChangeDateButton));
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Set your project start date:"), "picker not back in {html}");
    assert!(!html.contains("Current Week"), "stale badge in {html}");
    assert!(html.contains("width: 10%;"), "completion lost in {html}");
}

struct FailingStore;

#[async_trait::async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn tracker_view_smoke_renders_error_state() {
    let storage = Storage::new(Arc::new(FailingStore));
    let html = render_ready(&storage).await;
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}
