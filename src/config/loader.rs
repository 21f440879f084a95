//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the milestone
//! policy from YAML.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::MilestonePolicy;

/// Name of the policy file inside a configuration directory.
const POLICY_FILE: &str = "policy.yaml";

/// Loads and provides access to the milestone policy.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── policy.yaml   # period_years, leap_day
/// ```
///
/// # Example
///
/// ```no_run
/// use milestone_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Milestone every {} years", loader.policy().period_years);
/// # Ok::<(), milestone_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: MilestonePolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `policy.yaml` is missing, is not valid YAML, or
    /// holds a value the scheduler cannot use.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join(POLICY_FILE);
        let path_str = policy_path.display().to_string();

        let content = fs::read_to_string(&policy_path)
            .map_err(|_| EngineError::ConfigNotFound { path: path_str.clone() })?;

        let loader = Self::parse(&content, &path_str)?;
        debug!(path = %path_str, policy = ?loader.policy, "Loaded milestone policy");
        Ok(loader)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> EngineResult<Self> {
        let policy: MilestonePolicy =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        policy.validate()?;
        Ok(Self { policy })
    }

    /// Returns the loaded milestone policy.
    pub fn policy(&self) -> MilestonePolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LeapDayPolicy;

    fn config_path() -> &'static str {
        "./config/default"
    }

    #[test]
    fn test_load_shipped_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.policy(), MilestonePolicy::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_yaml_str_reads_leap_day_policy() {
        let loader =
            ConfigLoader::from_yaml_str("period_years: 6\nleap_day: february_28\n").unwrap();
        assert_eq!(loader.policy().leap_day, LeapDayPolicy::February28);
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        match ConfigLoader::from_yaml_str("period_years: [not, a, number]") {
            Err(EngineError::ConfigParseError { path, .. }) => assert_eq!(path, "<inline>"),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let result = ConfigLoader::from_yaml_str("bonus_amount: 100");
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_unknown_leap_day_policy_is_parse_error() {
        let result = ConfigLoader::from_yaml_str("leap_day: march_2");
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_zero_period_is_rejected() {
        let result = ConfigLoader::from_yaml_str("period_years: 0");
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }
}
