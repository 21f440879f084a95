//! Configuration types for milestone scheduling.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The fixed service milestone period, in years.
pub const MILESTONE_PERIOD_YEARS: u32 = 6;

/// Where the anniversary of a Feb 29 start date falls in a non-leap year.
///
/// The same policy governs tenure counting and milestone date generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeapDayPolicy {
    /// The anniversary rolls forward to March 1.
    #[default]
    #[serde(rename = "march_1")]
    March1,
    /// The anniversary is held on February 28.
    #[serde(rename = "february_28")]
    February28,
}

/// Policy controlling how milestones are scheduled.
///
/// # Example
///
/// ```
/// use milestone_engine::config::{LeapDayPolicy, MilestonePolicy};
///
/// let policy = MilestonePolicy::default();
/// assert_eq!(policy.period_years, 6);
/// assert_eq!(policy.leap_day, LeapDayPolicy::March1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MilestonePolicy {
    /// Length of one milestone period in years.
    pub period_years: u32,
    /// Placement of Feb 29 anniversaries in non-leap years.
    pub leap_day: LeapDayPolicy,
}

impl Default for MilestonePolicy {
    fn default() -> Self {
        Self {
            period_years: MILESTONE_PERIOD_YEARS,
            leap_day: LeapDayPolicy::default(),
        }
    }
}

impl MilestonePolicy {
    /// Checks that the policy can drive the scheduler.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if `period_years` is zero.
    pub fn validate(&self) -> EngineResult<()> {
        if self.period_years == 0 {
            return Err(EngineError::InvalidConfig {
                field: "period_years".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
