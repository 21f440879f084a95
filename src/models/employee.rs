//! Employee model and related types.
//!
//! This module defines the Employee struct and EmploymentStatus enum as the
//! surrounding records service stores them. Only the join date feeds
//! milestone calculations; the other fields label report rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::{get_milestone_report, stored_join_date};
use crate::models::MilestoneReport;

/// Represents the employment arrangement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentStatus {
    /// Permanent employment.
    Permanent,
    /// Fixed-term contract. Records without a status default to this.
    #[default]
    Contract,
}

/// Represents an employee record.
///
/// Deserializes from the records service JSON, which uses camelCase keys and
/// stores the `dd/mm/yyyy` join date under `joiningYear`. Unknown fields are
/// ignored.
///
/// # Example
///
/// ```
/// use milestone_engine::models::{Employee, EmploymentStatus};
///
/// let employee: Employee = serde_json::from_str(r#"{
///     "id": "TMJ-a1b2c3",
///     "name": "Siti Rahma",
///     "nik": "TMJ-001",
///     "position": "Engineer",
///     "department": "Operations",
///     "status": "Permanent",
///     "joiningYear": "01/01/2015"
/// }"#).unwrap();
///
/// assert_eq!(employee.status, EmploymentStatus::Permanent);
/// assert_eq!(employee.joining_date, "01/01/2015");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier for the employee record.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Company employee number.
    #[serde(default)]
    pub nik: String,
    /// Job title.
    #[serde(default)]
    pub position: String,
    /// Department name.
    #[serde(default)]
    pub department: String,
    /// Employment arrangement.
    #[serde(default)]
    pub status: EmploymentStatus,
    /// Join date as stored, expected to be `dd/mm/yyyy`.
    ///
    /// Legacy records holding a numeric year load as that year's text.
    #[serde(rename = "joiningYear", deserialize_with = "stored_join_date::deserialize")]
    pub joining_date: String,
}

impl Employee {
    /// Computes this employee's milestone report as of `reference`.
    ///
    /// An unreadable join date yields [`MilestoneReport::degraded`].
    pub fn milestone_report(&self, reference: NaiveDate) -> MilestoneReport {
        get_milestone_report(&self.joining_date, reference)
    }
}
