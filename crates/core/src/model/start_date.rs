use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

const STORAGE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%A, %B %-d, %Y";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StartDateError {
    #[error("start date is empty")]
    Empty,
    #[error("start date `{0}` is not a YYYY-MM-DD date")]
    Malformed(String),
}

/// The day the curriculum started, anchored at local midnight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StartDate(NaiveDate);

impl StartDate {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse the `YYYY-MM-DD` form produced by a date picker.
    ///
    /// # Errors
    ///
    /// Returns `StartDateError::Empty` for blank input and
    /// `StartDateError::Malformed` for anything that is not a calendar date.
    pub fn parse(raw: &str) -> Result<Self, StartDateError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(StartDateError::Empty);
        }
        NaiveDate::parse_from_str(trimmed, STORAGE_FORMAT)
            .map(Self)
            .map_err(|_| StartDateError::Malformed(trimmed.to_string()))
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Local midnight of the start day.
    #[must_use]
    pub fn anchor(&self) -> NaiveDateTime {
        self.0.and_time(chrono::NaiveTime::MIN)
    }

    /// Persisted form, e.g. `2024-01-15`.
    #[must_use]
    pub fn to_storage_string(&self) -> String {
        self.0.format(STORAGE_FORMAT).to_string()
    }

    /// Human form, e.g. `Monday, January 15, 2024`.
    #[must_use]
    pub fn display_long(&self) -> String {
        self.0.format(DISPLAY_FORMAT).to_string()
    }
}

impl fmt::Display for StartDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(STORAGE_FORMAT))
    }
}

impl FromStr for StartDate {
    type Err = StartDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
