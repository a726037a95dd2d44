//! Solver configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How the solver chooses among equally good moves.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TieBreak {
    /// Uniformly random among optimal moves.
    #[default]
    Random,
    /// First optimal move in row-major order.
    First,
}

/// Configuration for a [`crate::Solver`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Tie-break policy.
    #[serde(default)]
    tie_break: TieBreak,

    /// Seed for the tie-break random source. Unseeded solvers use OS entropy.
    #[serde(default)]
    seed: Option<u64>,
}

impl SolverConfig {
    /// Creates a configuration.
    pub fn new(tie_break: TieBreak, seed: Option<u64>) -> Self {
        Self { tie_break, seed }
    }

    /// Replaces the tie-break policy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Replaces the seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(tie_break = %config.tie_break, seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(*config.tie_break(), TieBreak::Random);
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_parse_toml() {
        let config: SolverConfig = toml::from_str("tie_break = \"first\"\nseed = 42\n").unwrap();
        assert_eq!(config, SolverConfig::new(TieBreak::First, Some(42)));
    }

    #[test]
    fn test_parse_empty_toml_uses_defaults() {
        let config: SolverConfig = toml::from_str("").unwrap();
        assert_eq!(config, SolverConfig::default());
    }

    #[test]
    fn test_tie_break_from_str() {
        assert_eq!(TieBreak::from_str("first").unwrap(), TieBreak::First);
        assert_eq!(TieBreak::Random.to_string(), "random");
        assert!(TieBreak::from_str("best").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = SolverConfig::from_file("/nonexistent/solver.toml").unwrap_err();
        assert!(err.message.contains("Failed to read"));
        assert!(err.file.ends_with("config.rs"));
    }
}
