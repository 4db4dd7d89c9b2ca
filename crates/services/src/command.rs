use tracker_core::model::WeekId;

/// Answer to the "reset everything?" prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetDecision {
    Confirmed,
    Declined,
}

/// A user action, detached from whichever widget produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleCompletion(WeekId),
    EditNote { week_id: WeekId, text: String },
    SetStartDate(String),
    ChangeStartDate,
    ResetAll(ResetDecision),
}

/// Which parts of the page must be redrawn after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rerender {
    /// Nothing visible changed (note edits, ignored input, declined reset).
    Nothing,
    /// Only the week list and progress bar.
    WeekList,
    /// The start-date region as well as the week list.
    All,
}

impl Rerender {
    #[must_use]
    pub fn week_list(self) -> bool {
        self >= Self::WeekList
    }

    #[must_use]
    pub fn start_date(self) -> bool {
        self == Self::All
    }
}
