//! Service milestone scheduling.
//!
//! This module turns a join date and a reference date into a
//! [`MilestoneReport`]: years of service, completed milestone periods, the
//! last and next milestone dates, and the schedule that follows.
//!
//! # Failure Handling
//!
//! None of the public functions here return errors. An undecodable join date,
//! or a milestone that falls outside the representable calendar, produces
//! [`MilestoneReport::degraded`] and a `warn` event.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::config::MilestonePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::MilestoneReport;

use super::date_codec::decode_join_date;
use super::tenure::{anniversary, years_elapsed};

/// Number of milestones listed after the next one.
pub const UPCOMING_MILESTONE_COUNT: u32 = 3;

/// Computes milestone reports under a [`MilestonePolicy`].
///
/// The default scheduler uses a 6-year period and places Feb 29
/// anniversaries on March 1 in non-leap years.
///
/// # Example
///
/// ```
/// use milestone_engine::calculation::MilestoneScheduler;
/// use chrono::NaiveDate;
///
/// let scheduler = MilestoneScheduler::default();
/// let start = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
/// let today = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
///
/// let report = scheduler.evaluate(start, today);
/// assert_eq!(report.years_of_service, 5);
/// assert_eq!(report.milestone_count, 0);
/// assert_eq!(report.last_milestone_date, None);
/// assert_eq!(report.days_until_next_milestone, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MilestoneScheduler {
    policy: MilestonePolicy,
}

impl MilestoneScheduler {
    /// Creates a scheduler for the given policy.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if the policy fails validation.
    pub fn new(policy: MilestonePolicy) -> EngineResult<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// Returns the policy this scheduler applies.
    pub fn policy(&self) -> MilestonePolicy {
        self.policy
    }

    /// Evaluates the milestone report for an employee who started on `start`.
    ///
    /// `reference` is the "today" the report is computed against. A
    /// `reference` before `start` is treated as zero tenure.
    ///
    /// If the milestone dates fall outside the representable calendar, the
    /// report is degraded but keeps `years_of_service`.
    pub fn evaluate(&self, start: NaiveDate, reference: NaiveDate) -> MilestoneReport {
        let years_of_service = years_elapsed(start, reference, self.policy.leap_day);
        match self.try_evaluate(start, reference, years_of_service) {
            Ok(report) => report,
            Err(err) => {
                warn!(
                    %start,
                    %reference,
                    error = %err,
                    "Milestone dates out of range, returning degraded report"
                );
                MilestoneReport {
                    years_of_service,
                    ..MilestoneReport::degraded()
                }
            }
        }
    }

    /// Decodes a `dd/mm/yyyy` join date and evaluates its milestone report.
    ///
    /// Text that does not decode yields [`MilestoneReport::degraded`].
    pub fn report_for(&self, join_date_text: &str, reference: NaiveDate) -> MilestoneReport {
        match decode_join_date(join_date_text) {
            Ok(start) => self.evaluate(start, reference),
            Err(err) => {
                warn!(error = %err, "Join date not decodable, returning degraded report");
                MilestoneReport::degraded()
            }
        }
    }

    /// Years of service for a `dd/mm/yyyy` join date, or 0 if it does not decode.
    pub fn years_of_service(&self, join_date_text: &str, reference: NaiveDate) -> u32 {
        match decode_join_date(join_date_text) {
            Ok(start) => years_elapsed(start, reference, self.policy.leap_day),
            Err(err) => {
                warn!(error = %err, "Join date not decodable, reporting zero years of service");
                0
            }
        }
    }

    fn try_evaluate(
        &self,
        start: NaiveDate,
        reference: NaiveDate,
        years_of_service: u32,
    ) -> EngineResult<MilestoneReport> {
        let milestone_count = years_of_service / self.policy.period_years;

        let next = self.milestone_date(start, milestone_count + 1)?;
        let last = if milestone_count > 0 {
            Some(self.milestone_date(start, milestone_count)?)
        } else {
            None
        };
        let upcoming = (2..=UPCOMING_MILESTONE_COUNT + 1)
            .map(|offset| self.milestone_date(start, milestone_count + offset))
            .collect::<EngineResult<Vec<_>>>()?;

        let days_until_next_milestone =
            u64::try_from(next.signed_duration_since(reference).num_days()).unwrap_or(0);

        // Literal rule; by construction `reference < next`, so this stays false.
        let eligible = reference >= next && milestone_count > 0;

        debug!(
            %start,
            %reference,
            years_of_service,
            milestone_count,
            next_milestone = %next,
            "Evaluated milestone report"
        );

        Ok(MilestoneReport {
            eligible,
            milestone_count,
            years_of_service,
            last_milestone_date: last,
            next_milestone_date: Some(next),
            days_until_next_milestone,
            upcoming_milestone_dates: upcoming,
        })
    }

    /// The date of the `index`-th milestone after `start`.
    fn milestone_date(&self, start: NaiveDate, index: u32) -> EngineResult<NaiveDate> {
        let years = index.checked_mul(self.policy.period_years).ok_or(
            EngineError::MilestoneIndexOverflow {
                index,
                period_years: self.policy.period_years,
            },
        )?;
        anniversary(start, years, self.policy.leap_day)
    }
}

/// Computes the milestone report for a `dd/mm/yyyy` join date.
///
/// This is the entry point used by the detail and export views. It never
/// fails: an unreadable join date produces [`MilestoneReport::degraded`].
///
/// # Example
///
/// ```
/// use milestone_engine::calculation::get_milestone_report;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
/// let report = get_milestone_report("2020-01-01", today);
///
/// assert!(!report.eligible);
/// assert_eq!(report.milestone_count, 0);
/// assert_eq!(report.years_of_service, 0);
/// assert!(report.next_milestone_date.is_none());
/// ```
pub fn get_milestone_report(join_date_text: &str, reference: NaiveDate) -> MilestoneReport {
    MilestoneScheduler::default().report_for(join_date_text, reference)
}

/// Years of service for a `dd/mm/yyyy` join date, used by list and export views.
///
/// Returns 0 when the join date cannot be decoded.
pub fn years_of_service(join_date_text: &str, reference: NaiveDate) -> u32 {
    MilestoneScheduler::default().years_of_service(join_date_text, reference)
}
