//! Anniversary-aware tenure calculation.
//!
//! This module counts the whole years of service between a start date and a
//! reference date, and provides the [`anniversary`] function shared with the
//! milestone scheduler so that both agree on where a Feb 29 anniversary falls.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::LeapDayPolicy;
use crate::error::{EngineError, EngineResult};

/// The result of a tenure calculation.
///
/// # Example
///
/// ```
/// use milestone_engine::calculation::calculate_tenure;
/// use milestone_engine::config::LeapDayPolicy;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
/// let today = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
/// let tenure = calculate_tenure(start, today, LeapDayPolicy::March1);
/// assert_eq!(tenure.years_of_service, 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenureResult {
    /// Full years elapsed since the start date.
    pub years_of_service: u32,
}

/// Returns the date `years` calendar years after `start`.
///
/// The month and day of `start` are kept. When `start` is Feb 29 and the
/// target year is not a leap year, the anniversary is placed according to
/// `leap_day`.
///
/// # Errors
///
/// Returns [`EngineError::DateOutOfRange`] if the resulting year cannot be
/// represented.
///
/// # Example
///
/// ```
/// use milestone_engine::calculation::anniversary;
/// use milestone_engine::config::LeapDayPolicy;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
/// assert_eq!(
///     anniversary(start, 6, LeapDayPolicy::March1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
/// );
/// assert_eq!(
///     anniversary(start, 6, LeapDayPolicy::February28).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
/// );
/// ```
pub fn anniversary(
    start: NaiveDate,
    years: u32,
    leap_day: LeapDayPolicy,
) -> EngineResult<NaiveDate> {
    let out_of_range = || EngineError::DateOutOfRange { start, years };

    let year = i32::try_from(years)
        .ok()
        .and_then(|offset| start.year().checked_add(offset))
        .ok_or_else(out_of_range)?;

    if let Some(date) = NaiveDate::from_ymd_opt(year, start.month(), start.day()) {
        return Ok(date);
    }

    // Only a Feb 29 start in a non-leap year gets here.
    let fallback = match leap_day {
        LeapDayPolicy::February28 => NaiveDate::from_ymd_opt(year, 2, 28),
        LeapDayPolicy::March1 => NaiveDate::from_ymd_opt(year, 3, 1),
    };
    fallback.ok_or_else(out_of_range)
}

/// Counts the full anniversaries of `start` that fall on or before `reference`.
///
/// Starts from the plain calendar-year difference and takes one off when this
/// year's anniversary is still ahead of `reference`. A `reference` earlier
/// than `start` yields zero.
///
/// # Example
///
/// ```
/// use milestone_engine::calculation::years_elapsed;
/// use milestone_engine::config::LeapDayPolicy;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
/// let day_before = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
/// assert_eq!(years_elapsed(start, day_before, LeapDayPolicy::March1), 5);
/// ```
pub fn years_elapsed(start: NaiveDate, reference: NaiveDate, leap_day: LeapDayPolicy) -> u32 {
    if reference < start {
        return 0;
    }

    let naive = u32::try_from(reference.year() - start.year()).unwrap_or(0);
    match anniversary(start, naive, leap_day) {
        Ok(this_year) if this_year <= reference => naive,
        _ => naive.saturating_sub(1),
    }
}

/// Calculates the tenure of an employee who started on `start`.
pub fn calculate_tenure(
    start: NaiveDate,
    reference: NaiveDate,
    leap_day: LeapDayPolicy,
) -> TenureResult {
    TenureResult {
        years_of_service: years_elapsed(start, reference, leap_day),
    }
}
