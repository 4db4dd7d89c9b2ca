use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::WeekId;

/// One curriculum week.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    id: WeekId,
    title: String,
}

impl Week {
    #[must_use]
    pub fn new(id: WeekId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> WeekId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog must contain at least one week")]
    Empty,
    #[error("week ids must start at 1, got {0}")]
    ZeroId(WeekId),
    #[error("week ids must be unique and strictly increasing ({previous} then {next})")]
    OutOfOrder { previous: WeekId, next: WeekId },
    #[error("week {0} has an empty title")]
    EmptyTitle(WeekId),
}

const DEFAULT_TITLES: [&str; 10] = [
    "Week 1 - Resolution Tracker",
    "Week 2 - Model Mapping",
    "Week 3 - Deep Research",
    "Week 4 - Data Analyst",
    "Week 5 - Visual Reasoning",
    "Week 6 - Information Pipelines",
    "Week 7 - Automation: Distribution",
    "Week 8 - Automation: Productivity",
    "Week 9 - Context Engineering",
    "Week 10 - Build an AI App",
];

/// Immutable, ordered list of curriculum weeks.
///
/// Ids are unique, start at 1 and strictly increase. The catalog is built once
/// at startup and handed to the services and views; nothing mutates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekCatalog {
    weeks: Vec<Week>,
}

impl WeekCatalog {
    /// Build a catalog from an ordered list of weeks.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the list is empty, an id is zero, ids are not
    /// strictly increasing, or a title is blank.
    pub fn new(weeks: Vec<Week>) -> Result<Self, CatalogError> {
        let Some(first) = weeks.first() else {
            return Err(CatalogError::Empty);
        };
        if first.id.value() == 0 {
            return Err(CatalogError::ZeroId(first.id));
        }
        for pair in weeks.windows(2) {
            if pair[1].id <= pair[0].id {
                return Err(CatalogError::OutOfOrder {
                    previous: pair[0].id,
                    next: pair[1].id,
                });
            }
        }
        if let Some(week) = weeks.iter().find(|week| week.title.trim().is_empty()) {
            return Err(CatalogError::EmptyTitle(week.id));
        }
        Ok(Self { weeks })
    }

    /// The fixed ten-week curriculum.
    #[must_use]
    pub fn ten_week_curriculum() -> Self {
        let weeks = DEFAULT_TITLES
            .iter()
            .zip(1_u32..)
            .map(|(title, id)| Week::new(WeekId::new(id), *title))
            .collect();
        Self { weeks }
    }

    #[must_use]
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Number of weeks as `u32`, the upper bound for the current week.
    #[must_use]
    pub fn total_weeks(&self) -> u32 {
        u32::try_from(self.weeks.len()).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn get(&self, id: WeekId) -> Option<&Week> {
        self.weeks
            .binary_search_by_key(&id, Week::id)
            .ok()
            .map(|idx| &self.weeks[idx])
    }
}

impl Default for WeekCatalog {
    fn default() -> Self {
        Self::ten_week_curriculum()
    }
}
