use dioxus::prelude::*;
use services::{ActionOrigin, UiEvent};

use crate::vm::{ProgressVm, StartDateVm, WeekRowVm};

#[component]
pub fn StartDateRegion(
    start_date: StartDateVm,
    date_input: String,
    on_date_input: Callback<String>,
    on_event: Callback<UiEvent>,
) -> Element {
    let set_value = date_input.clone();
    rsx! {
        div { id: "start-date-container", class: "start-date",
            match start_date {
                StartDateVm::Set { display } => rsx! {
                    span { "Project started: {display}" }
                    button {
                        id: "change-date-btn",
                        class: "change-date-btn",
                        r#type: "button",
                        onclick: move |_| on_event.call(UiEvent::click(ActionOrigin::ChangeDateButton)),
                        "Change"
                    }
                },
                StartDateVm::Unset => rsx! {
                    label { r#for: "start-date", "Set your project start date:" }
                    input {
                        id: "start-date",
                        class: "date-input",
                        r#type: "date",
                        value: "{date_input}",
                        oninput: move |evt: FormEvent| on_date_input.call(evt.value()),
                    }
                    button {
                        id: "set-date-btn",
                        class: "set-date-btn",
                        r#type: "button",
                        onclick: move |_| {
                            on_event.call(
                                UiEvent::click(ActionOrigin::SetDateButton)
                                    .with_value(set_value.clone()),
                            );
                        },
                        "Set Start Date"
                    }
                },
            }
        }
    }
}

#[component]
pub fn ProgressBar(progress: ProgressVm) -> Element {
    let fill_style = progress.fill_style();
    let percent = progress.percent_label();
    rsx! {
        div { class: "progress",
            p { class: "progress-count",
                span { id: "completed-count", "{progress.completed}" }
                " / "
                span { id: "total-count", "{progress.total}" }
                " weeks completed "
                span { class: "progress-percent", "({percent})" }
            }
            div { class: "progress-bar",
                div { id: "progress-fill", class: "progress-fill", style: "{fill_style}" }
            }
        }
    }
}

#[component]
pub fn WeekList(rows: Vec<WeekRowVm>, on_event: Callback<UiEvent>) -> Element {
    rsx! {
        ul { id: "week-list", class: "week-list",
            for row in rows {
                WeekRow { key: "{row.id}", row, on_event }
            }
        }
    }
}

#[component]
fn WeekRow(row: WeekRowVm, on_event: Callback<UiEvent>) -> Element {
    let week_id = row.id;
    let item_class = row.item_class();
    rsx! {
        li { class: "{item_class}", "data-week": "{week_id}",
            div {
                class: "week-header",
                onclick: move |_| on_event.call(UiEvent::click(ActionOrigin::WeekHeader).for_week(week_id)),
                div { class: "checkbox",
                    if row.completed { "✓" }
                }
                div { class: "week-info",
                    div { class: "week-title",
                        "{row.title}"
                        if row.current {
                            span { class: "current-badge", " ← Current Week" }
                        }
                    }
                    div { class: "week-number", "{row.caption}" }
                }
            }
            div { class: "notes-section",
                textarea {
                    class: "notes-input",
                    "data-week": "{week_id}",
                    placeholder: "Add notes for this week...",
                    rows: "2",
                    value: "{row.note}",
                    oninput: move |evt: FormEvent| {
                        on_event.call(UiEvent::input(ActionOrigin::NotesInput, evt.value()).for_week(week_id));
                    },
                }
            }
        }
    }
}

#[component]
pub fn ResetModal(on_event: Callback<UiEvent>, on_close: Callback<()>) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| {
                on_close.call(());
                on_event.call(UiEvent::click(ActionOrigin::ResetCancel));
            },
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "modal-title", "Reset everything?" }
                p { class: "modal-body",
                    "Are you sure you want to reset all progress and notes? This cannot be undone."
                }
                div { class: "modal-actions",
                    button {
                        class: "btn modal-cancel",
                        r#type: "button",
                        onclick: move |_| {
                            on_close.call(());
                            on_event.call(UiEvent::click(ActionOrigin::ResetCancel));
                        },
                        "Cancel"
                    }
                    button {
                        class: "btn modal-confirm",
                        r#type: "button",
                        onclick: move |_| {
                            on_close.call(());
                            on_event.call(UiEvent::click(ActionOrigin::ResetConfirm));
                        },
                        "Reset"
                    }
                }
            }
        }
    }
}
