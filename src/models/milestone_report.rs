//! Milestone report model.
//!
//! This module contains the [`MilestoneReport`] type returned by the
//! milestone scheduler to display and export consumers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::{join_date_list_format, option_join_date_format};

/// Service milestone facts for one employee as of a reference date.
///
/// A report is recomputed on every call and never stored. Dates serialize
/// as `dd/mm/yyyy`.
///
/// A *degraded* report (see [`MilestoneReport::degraded`]) stands in for an
/// employee whose join date could not be read: it is not eligible, has zero
/// counts and carries no dates.
///
/// # Example
///
/// ```
/// use milestone_engine::calculation::get_milestone_report;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
/// let report = get_milestone_report("01/01/2015", today);
///
/// assert_eq!(report.years_of_service, 6);
/// assert_eq!(report.milestone_count, 1);
/// assert_eq!(report.next_milestone_date, NaiveDate::from_ymd_opt(2027, 1, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneReport {
    /// Whether the milestone badge is shown.
    ///
    /// True only when a milestone has been completed and the reference date
    /// is on or after the next milestone date. Pending product sign-off.
    pub eligible: bool,
    /// Number of complete milestone periods elapsed.
    pub milestone_count: u32,
    /// Full years of service.
    pub years_of_service: u32,
    /// The most recent milestone reached, present iff `milestone_count > 0`.
    #[serde(default, with = "option_join_date_format")]
    pub last_milestone_date: Option<NaiveDate>,
    /// The next milestone. Always present unless the report is degraded.
    #[serde(default, with = "option_join_date_format")]
    pub next_milestone_date: Option<NaiveDate>,
    /// Whole days from the reference date to the next milestone, never negative.
    pub days_until_next_milestone: u64,
    /// The milestones following the next one, in order.
    #[serde(default, with = "join_date_list_format")]
    pub upcoming_milestone_dates: Vec<NaiveDate>,
}

impl MilestoneReport {
    /// Returns the conservative report used when no milestone data exists.
    pub fn degraded() -> Self {
        Self {
            eligible: false,
            milestone_count: 0,
            years_of_service: 0,
            last_milestone_date: None,
            next_milestone_date: None,
            days_until_next_milestone: 0,
            upcoming_milestone_dates: Vec::new(),
        }
    }

    /// Returns true if this report was produced without a usable join date.
    pub fn is_degraded(&self) -> bool {
        self.next_milestone_date.is_none()
    }

    /// English ordinal for the milestone reached, e.g. `"2nd"`.
    ///
    /// Returns `None` before the first milestone.
    ///
    /// ```
    /// use milestone_engine::models::MilestoneReport;
    ///
    /// let mut report = MilestoneReport::degraded();
    /// assert_eq!(report.milestone_ordinal(), None);
    ///
    /// report.milestone_count = 3;
    /// assert_eq!(report.milestone_ordinal().as_deref(), Some("3rd"));
    /// ```
    pub fn milestone_ordinal(&self) -> Option<String> {
        (self.milestone_count > 0).then(|| ordinal(self.milestone_count))
    }
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn create_sample_report() -> MilestoneReport {
        MilestoneReport {
            eligible: false,
            milestone_count: 1,
            years_of_service: 6,
            last_milestone_date: Some(date(2021, 1, 1)),
            next_milestone_date: Some(date(2027, 1, 1)),
            days_until_next_milestone: 2191,
            upcoming_milestone_dates: vec![date(2033, 1, 1), date(2039, 1, 1), date(2045, 1, 1)],
        }
    }

    #[test]
    fn test_degraded_report_has_no_data() {
        let report = MilestoneReport::degraded();
        assert!(!report.eligible);
        assert_eq!(report.milestone_count, 0);
        assert_eq!(report.years_of_service, 0);
        assert_eq!(report.last_milestone_date, None);
        assert_eq!(report.next_milestone_date, None);
        assert_eq!(report.days_until_next_milestone, 0);
        assert!(report.upcoming_milestone_dates.is_empty());
        assert!(report.is_degraded());
    }

    #[test]
    fn test_computed_report_is_not_degraded() {
        assert!(!create_sample_report().is_degraded());
    }

    #[test]
    fn test_ordinals() {
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (22, "22nd"),
            (101, "101st"),
            (111, "111th"),
        ];
        for (n, expected) in cases {
            assert_eq!(ordinal(n), expected);
        }
    }

    #[test]
    fn test_serialize_uses_join_date_text() {
        let json = serde_json::to_value(create_sample_report()).unwrap();
        assert_eq!(json["last_milestone_date"], "01/01/2021");
        assert_eq!(json["next_milestone_date"], "01/01/2027");
        assert_eq!(
            json["upcoming_milestone_dates"],
            serde_json::json!(["01/01/2033", "01/01/2039", "01/01/2045"])
        );
        assert_eq!(json["milestone_count"], 1);
    }

    #[test]
    fn test_serialize_degraded_report() {
        let json = serde_json::to_value(MilestoneReport::degraded()).unwrap();
        assert_eq!(json["eligible"], false);
        assert!(json["next_milestone_date"].is_null());
        assert_eq!(json["upcoming_milestone_dates"], serde_json::json!([]));
    }

    #[test]
    fn test_report_json_round_trip() {
        let report = create_sample_report();
        let json = serde_json::to_string(&report).unwrap();
        let back: MilestoneReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
