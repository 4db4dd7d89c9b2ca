use services::TrackerSnapshot;
use tracker_core::model::{
    CompletionMap, NotesMap, ProgressSummary, StartDate, WeekCatalog, WeekId,
};

/// UI-ready representation of one week row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekRowVm {
    pub id: WeekId,
    pub title: String,
    pub caption: String,
    pub completed: bool,
    pub current: bool,
    pub note: String,
}

impl WeekRowVm {
    /// CSS classes for the row's list item.
    #[must_use]
    pub fn item_class(&self) -> String {
        let mut class = String::from("week-item");
        if self.completed {
            class.push_str(" completed");
        }
        if self.current {
            class.push_str(" current-week");
        }
        class
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressVm {
    pub completed: usize,
    pub total: usize,
    pub percentage: f64,
}

impl ProgressVm {
    /// Inline style for the progress bar fill.
    #[must_use]
    pub fn fill_style(&self) -> String {
        format!("width: {}%;", self.percentage)
    }

    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{:.0}%", self.percentage)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StartDateVm {
    Unset,
    Set { display: String },
}

impl StartDateVm {
    #[must_use]
    pub fn from_start_date(start_date: Option<StartDate>) -> Self {
        match start_date {
            Some(date) => Self::Set {
                display: date.display_long(),
            },
            None => Self::Unset,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrackerVm {
    pub rows: Vec<WeekRowVm>,
    pub progress: ProgressVm,
    pub start_date: StartDateVm,
}

/// Merge the catalog with persisted state, one row per catalog week.
#[must_use]
pub fn map_week_rows(
    catalog: &WeekCatalog,
    completion: &CompletionMap,
    notes: &NotesMap,
    current_week: Option<WeekId>,
) -> Vec<WeekRowVm> {
    let total = catalog.len();
    catalog
        .weeks()
        .iter()
        .map(|week| WeekRowVm {
            id: week.id(),
            title: week.title().to_owned(),
            caption: format!("Week {} of {total}", week.id()),
            completed: completion.is_completed(week.id()),
            current: current_week == Some(week.id()),
            note: notes.note(week.id()).to_owned(),
        })
        .collect()
}

#[must_use]
pub fn map_progress(summary: &ProgressSummary) -> ProgressVm {
    ProgressVm {
        completed: summary.completed,
        total: summary.total,
        percentage: summary.percentage,
    }
}

#[must_use]
pub fn build_tracker_vm(catalog: &WeekCatalog, snapshot: &TrackerSnapshot) -> TrackerVm {
    TrackerVm {
        rows: map_week_rows(
            catalog,
            &snapshot.completion,
            &snapshot.notes,
            snapshot.current_week,
        ),
        progress: map_progress(&snapshot.progress),
        start_date: StartDateVm::from_start_date(snapshot.start_date),
    }
}
