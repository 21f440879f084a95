//! Configuration loading for the Milestone Engine.
//!
//! The milestone policy (period length and leap-day handling) can be loaded
//! from a YAML file. The defaults reproduce the fixed 6-year schedule.
//!
//! # Example
//!
//! ```no_run
//! use milestone_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Leap-day policy: {:?}", config.policy().leap_day);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LeapDayPolicy, MILESTONE_PERIOD_YEARS, MilestonePolicy};
