use chrono::NaiveDateTime;

use crate::model::{StartDate, WeekId};

//
// ─── CONSTANTS ─────────────────────────────────────────────────────────────────
//

const MILLIS_PER_DAY: i64 = 86_400_000;
const DAYS_PER_WEEK: i64 = 7;

//
// ─── CURRENT WEEK ──────────────────────────────────────────────────────────────
//

/// Whole days elapsed between local midnight of `start` and `now`.
///
/// Floors towards negative infinity, so any instant before the start day
/// yields a negative count.
#[must_use]
pub fn elapsed_days(start: StartDate, now: NaiveDateTime) -> i64 {
    let millis = (now - start.anchor()).num_milliseconds();
    millis.div_euclid(MILLIS_PER_DAY)
}

/// Derive the 1-based current week from the start date.
///
/// `week = floor(elapsed_days / 7) + 1`, clamped to `1..=total_weeks`.
/// Returns `None` when no start date is set or the catalog is empty.
///
/// # Examples
///
/// ```
/// # use tracker_core::model::{StartDate, WeekId};
/// # use tracker_core::schedule::current_week;
/// let start = StartDate::parse("2024-01-01").unwrap();
/// let now = StartDate::parse("2024-01-15").unwrap().anchor();
/// assert_eq!(current_week(Some(start), now, 10), Some(WeekId::new(3)));
/// assert_eq!(current_week(None, now, 10), None);
/// ```
#[must_use]
pub fn current_week(
    start: Option<StartDate>,
    now: NaiveDateTime,
    total_weeks: u32,
) -> Option<WeekId> {
    let start = start?;
    if total_weeks == 0 {
        return None;
    }
    let week = elapsed_days(start, now).div_euclid(DAYS_PER_WEEK) + 1;
    let clamped = week.clamp(1, i64::from(total_weeks));
    u32::try_from(clamped).ok().map(WeekId::new)
}
