//! Calculation logic for the Milestone Engine.
//!
//! This module contains join date decoding and encoding, anniversary-aware
//! tenure counting, milestone scheduling, and the bulk service report built
//! on top of them.

mod date_codec;
mod milestone;
mod service_report;
mod tenure;

pub use date_codec::{
    decode_join_date, encode_join_date, join_date_format, join_date_list_format,
    option_join_date_format, stored_join_date,
};
pub use milestone::{
    MilestoneScheduler, UPCOMING_MILESTONE_COUNT, get_milestone_report, years_of_service,
};
pub use service_report::{
    ServiceReportRow, ServiceReportSummary, build_service_report, build_service_report_with,
    summarize,
};
pub use tenure::{TenureResult, anniversary, calculate_tenure, years_elapsed};
