//! Service Milestone Engine
//!
//! This crate computes an employee's years of service and 6-year service
//! milestones from their `dd/mm/yyyy` join date and an explicit reference date.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
