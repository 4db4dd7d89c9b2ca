#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
use services::UiEvent;

use crate::context::AppContext;
use crate::views::components::{ProgressBar, ResetModal, StartDateRegion, WeekList};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{TrackerVm, build_tracker_vm};

#[component]
pub fn TrackerView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let progress = ctx.progress();
    let dispatch = ctx.dispatch();

    let mut date_input = use_signal(String::new);
    let mut show_reset = use_signal(|| false);
    let mut action_error = use_signal(|| None::<ViewError>);

    let resource = use_resource({
        let progress = progress.clone();
        move || {
            let progress = progress.clone();
            let catalog = catalog.clone();
            async move {
                let snapshot = progress
                    .snapshot()
                    .await
                    .map_err(|_| ViewError::Unknown)?;
                Ok::<TrackerVm, ViewError>(build_tracker_vm(&catalog, &snapshot))
            }
        }
    });

    // Single entry point for every control on the page: route through the
    // dispatch table, apply, then refresh whatever the command touched.
    let on_event = use_callback(move |event: UiEvent| {
        let Some(command) = dispatch.route(&event) else {
            return;
        };
        let progress = progress.clone();
        let mut resource = resource;
        spawn(async move {
            match progress.apply(command).await {
                Ok(rerender) => {
                    action_error.set(None);
                    if rerender.start_date() {
                        date_input.set(String::new());
                    }
                    if rerender.week_list() {
                        resource.restart();
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "tracker action failed");
                    action_error.set(Some(ViewError::Unknown));
                }
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<TrackerTestHandles>() {
                handles.register(on_event, date_input);
            }
        }
    }

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page tracker",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(vm) => rsx! {
                    StartDateRegion {
                        start_date: vm.start_date.clone(),
                        date_input: date_input(),
                        on_date_input: move |value: String| date_input.set(value),
                        on_event,
                    }
                    ProgressBar { progress: vm.progress.clone() }
                    WeekList { rows: vm.rows.clone(), on_event }
                    div { class: "actions",
                        button {
                            id: "reset-btn",
                            class: "btn reset-btn",
                            r#type: "button",
                            onclick: move |_| show_reset.set(true),
                            "Reset All Progress"
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
            }
            if let Some(err) = action_error() {
                p { class: "error", "{err.message()}" }
            }
            if show_reset() {
                ResetModal {
                    on_event,
                    on_close: move |()| show_reset.set(false),
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct TrackerTestHandles {
    on_event: Rc<RefCell<Option<Callback<UiEvent>>>>,
    date_input: Rc<RefCell<Option<Signal<String>>>>,
}

#[cfg(test)]
impl TrackerTestHandles {
    pub(crate) fn register(&self, on_event: Callback<UiEvent>, date_input: Signal<String>) {
        *self.on_event.borrow_mut() = Some(on_event);
        *self.date_input.borrow_mut() = Some(date_input);
    }

    pub(crate) fn on_event(&self) -> Callback<UiEvent> {
        (*self.on_event.borrow()).expect("tracker on_event registered")
    }

    pub(crate) fn date_input(&self) -> Signal<String> {
        (*self.date_input.borrow()).expect("tracker date input registered")
    }
}
