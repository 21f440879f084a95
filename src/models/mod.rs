//! Core data models for the Milestone Engine.
//!
//! This module contains the employee record and the milestone report.

mod employee;
mod milestone_report;

pub use employee::{Employee, EmploymentStatus};
pub use milestone_report::MilestoneReport;
