//! Bulk service reporting.
//!
//! This module builds the per-employee rows used by list and export views:
//! years of service and a milestone summary for every record, all computed
//! against one reference date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Employee;

use super::date_codec::option_join_date_format;
use super::milestone::MilestoneScheduler;

/// One row of the service report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceReportRow {
    /// The employee record ID.
    pub employee_id: String,
    /// The employee's name.
    pub name: String,
    /// The join date exactly as stored on the record.
    pub joining_date: String,
    /// Full years of service, 0 if the join date is unreadable.
    pub years_of_service: u32,
    /// Completed milestone periods.
    pub milestone_count: u32,
    /// The next milestone, absent if the join date is unreadable.
    #[serde(default, with = "option_join_date_format")]
    pub next_milestone_date: Option<NaiveDate>,
}

/// Aggregate counts over a service report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceReportSummary {
    /// Number of rows in the report.
    pub total_employees: usize,
    /// Rows with at least one completed milestone.
    pub with_milestone: usize,
    /// Rows whose join date could not be read.
    pub undated: usize,
}

/// Builds a service report using the default milestone policy.
///
/// Rows are returned in the same order as `employees`. A record with an
/// unreadable join date still gets a row, with zero tenure and no next
/// milestone.
///
/// # Example
///
/// ```
/// use milestone_engine::calculation::build_service_report;
/// use milestone_engine::models::{Employee, EmploymentStatus};
/// use chrono::NaiveDate;
///
/// let employees = vec![Employee {
///     id: "TMJ-000001".to_string(),
///     name: "Dewi".to_string(),
///     nik: "TMJ-001".to_string(),
///     position: "Supervisor".to_string(),
///     department: "Operations".to_string(),
///     status: EmploymentStatus::Permanent,
///     joining_date: "01/01/2015".to_string(),
/// }];
///
/// let today = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
/// let rows = build_service_report(&employees, today);
/// assert_eq!(rows[0].years_of_service, 6);
/// assert_eq!(rows[0].milestone_count, 1);
/// ```
pub fn build_service_report(employees: &[Employee], reference: NaiveDate) -> Vec<ServiceReportRow> {
    build_service_report_with(&MilestoneScheduler::default(), employees, reference)
}

/// Builds a service report with the given scheduler.
pub fn build_service_report_with(
    scheduler: &MilestoneScheduler,
    employees: &[Employee],
    reference: NaiveDate,
) -> Vec<ServiceReportRow> {
    let rows: Vec<ServiceReportRow> = employees
        .iter()
        .map(|employee| {
            let report = scheduler.report_for(&employee.joining_date, reference);
            ServiceReportRow {
                employee_id: employee.id.clone(),
                name: employee.name.clone(),
                joining_date: employee.joining_date.clone(),
                years_of_service: report.years_of_service,
                milestone_count: report.milestone_count,
                next_milestone_date: report.next_milestone_date,
            }
        })
        .collect();

    debug!(%reference, rows = rows.len(), "Built service report");
    rows
}

/// Summarizes a service report.
pub fn summarize(rows: &[ServiceReportRow]) -> ServiceReportSummary {
    rows.iter().fold(
        ServiceReportSummary {
            total_employees: rows.len(),
            ..ServiceReportSummary::default()
        },
        |mut summary, row| {
            if row.milestone_count > 0 {
                summary.with_milestone += 1;
            }
            if row.next_milestone_date.is_none() {
                summary.undated += 1;
            }
            summary
        },
    )
}
