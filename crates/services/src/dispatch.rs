//! Maps raw UI events to commands.
//!
//! Each entry pairs an action origin with an event kind. Views build a
//! `UiEvent` from whatever their toolkit hands them and let the table decide
//! which command, if any, it means.

use tracker_core::model::WeekId;

use crate::command::{Command, ResetDecision};

/// The control an event came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionOrigin {
    WeekHeader,
    NotesInput,
    SetDateButton,
    ChangeDateButton,
    ResetConfirm,
    ResetCancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Input,
}

/// A toolkit-neutral UI event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiEvent {
    pub origin: ActionOrigin,
    pub kind: EventKind,
    pub week_id: Option<WeekId>,
    pub value: Option<String>,
}

impl UiEvent {
    #[must_use]
    pub fn click(origin: ActionOrigin) -> Self {
        Self {
            origin,
            kind: EventKind::Click,
            week_id: None,
            value: None,
        }
    }

    #[must_use]
    pub fn input(origin: ActionOrigin, value: impl Into<String>) -> Self {
        Self {
            origin,
            kind: EventKind::Input,
            week_id: None,
            value: Some(value.into()),
        }
    }

    #[must_use]
    pub fn for_week(mut self, week_id: WeekId) -> Self {
        self.week_id = Some(week_id);
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

pub type Handler = fn(&UiEvent) -> Option<Command>;

/// Ordered `(origin, kind) -> handler` routes. First match wins.
#[derive(Clone)]
pub struct DispatchTable {
    routes: Vec<((ActionOrigin, EventKind), Handler)>,
}

impl DispatchTable {
    #[must_use]
    pub fn empty() -> Self {
        Self { routes: Vec::new() }
    }

    /// Routes for the tracker page.
    #[must_use]
    pub fn standard() -> Self {
        Self::empty()
            .register(ActionOrigin::WeekHeader, EventKind::Click, toggle_week)
            .register(ActionOrigin::NotesInput, EventKind::Input, edit_note)
            .register(ActionOrigin::SetDateButton, EventKind::Click, set_start_date)
            .register(ActionOrigin::ChangeDateButton, EventKind::Click, |_| {
                Some(Command::ChangeStartDate)
            })
            .register(ActionOrigin::ResetConfirm, EventKind::Click, |_| {
                Some(Command::ResetAll(ResetDecision::Confirmed))
            })
            .register(ActionOrigin::ResetCancel, EventKind::Click, |_| {
                Some(Command::ResetAll(ResetDecision::Declined))
            })
    }

    #[must_use]
    pub fn register(mut self, origin: ActionOrigin, kind: EventKind, handler: Handler) -> Self {
        self.routes.push(((origin, kind), handler));
        self
    }

    /// Resolve an event. Unrouted events and events missing the data their
    /// handler needs resolve to `None`.
    #[must_use]
    pub fn route(&self, event: &UiEvent) -> Option<Command> {
        self.routes
            .iter()
            .find(|((origin, kind), _)| *origin == event.origin && *kind == event.kind)
            .and_then(|(_, handler)| handler(event))
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn toggle_week(event: &UiEvent) -> Option<Command> {
    event.week_id.map(Command::ToggleCompletion)
}

fn edit_note(event: &UiEvent) -> Option<Command> {
    let week_id = event.week_id?;
    let text = event.value.clone().unwrap_or_default();
    Some(Command::EditNote { week_id, text })
}

fn set_start_date(event: &UiEvent) -> Option<Command> {
    Some(Command::SetStartDate(event.value.clone().unwrap_or_default()))
}
