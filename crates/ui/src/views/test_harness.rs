use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{AppServices, Clock, UiEvent};
use storage::repository::Storage;
use tracker_core::model::WeekCatalog;
use tracker_core::time::fixed_now;

use crate::context::{UiApp, build_app_context};
use crate::views::TrackerView;
use crate::views::tracker::TrackerTestHandles;

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
    handles: TrackerTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { TrackerView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: Arc<AppServices>,
    pub handles: TrackerTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    /// Feed an event to the view as if a control had fired it.
    pub fn send(&self, event: UiEvent) {
        self.dom.in_runtime(|| self.handles.on_event().call(event));
    }

    pub fn set_date_input(&self, value: &str) {
        self.dom.in_runtime(|| {
            let mut date_input = self.handles.date_input();
            date_input.set(value.to_string());
        });
    }

    pub fn date_input(&self) -> String {
        self.dom
            .in_runtime(|| self.handles.date_input().read().clone())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Build a harness over `storage` with the clock fixed at `fixed_now()`.
pub fn setup_view_harness(storage: &Storage) -> ViewHarness {
    let services = Arc::new(AppServices::new(
        storage,
        Clock::fixed(fixed_now()),
        WeekCatalog::default(),
    ));
    let handles = TrackerTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app: Arc::clone(&services),
            handles: handles.clone(),
        },
    );
    ViewHarness {
        dom,
        services,
        handles,
    }
}
