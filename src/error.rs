//! Error types for the Milestone Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while decoding join dates,
//! computing anniversaries, and loading configuration.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Milestone Engine.
///
/// Internal operations return this error type. The public milestone entry
/// points never surface it; they fall back to a degraded report instead.
///
/// # Example
///
/// ```
/// use milestone_engine::error::EngineError;
///
/// let error = EngineError::FormatError {
///     input: "2020-01-01".to_string(),
///     message: "expected dd/mm/yyyy".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid join date '2020-01-01': expected dd/mm/yyyy"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A join date string could not be decoded into a calendar date.
    #[error("Invalid join date '{input}': {message}")]
    FormatError {
        /// The text that failed to decode.
        input: String,
        /// A description of what was wrong with it.
        message: String,
    },

    /// An anniversary of the start date is outside the representable range.
    #[error("Anniversary {years} years after {start} is out of range")]
    DateOutOfRange {
        /// The start date the anniversary was computed from.
        start: NaiveDate,
        /// The number of years added.
        years: u32,
    },

    /// A milestone index times the period does not fit in a year count.
    #[error("Milestone {index} of a {period_years}-year period exceeds the year range")]
    MilestoneIndexOverflow {
        /// The milestone index requested.
        index: u32,
        /// The policy's period length in years.
        period_years: u32,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_displays_input_and_message() {
        let error = EngineError::FormatError {
            input: "32/01/2020".to_string(),
            message: "not a calendar date".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid join date '32/01/2020': not a calendar date"
        );
    }

    #[test]
    fn test_date_out_of_range_displays_start_and_years() {
        let error = EngineError::DateOutOfRange {
            start: NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
            years: 300_000,
        };
        assert_eq!(
            error.to_string(),
            "Anniversary 300000 years after 2015-01-01 is out of range"
        );
    }

    #[test]
    fn test_milestone_index_overflow_displays_index_and_period() {
        let error = EngineError::MilestoneIndexOverflow {
            index: 4_000_000_000,
            period_years: 6,
        };
        assert_eq!(
            error.to_string(),
            "Milestone 4000000000 of a 6-year period exceeds the year range"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/policy.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "period_years".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'period_years': must be greater than zero"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_format_error() -> EngineResult<()> {
            Err(EngineError::FormatError {
                input: "".to_string(),
                message: "empty".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_format_error()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
