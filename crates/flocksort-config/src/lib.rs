//! Configuration system for Flocksort.
//!
//! Load engine configuration from TOML or YAML files to control group sizing
//! and age banding without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use flocksort_config::EngineConfig;
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     group_size = 8
//!     age_tolerance = 3
//! "#).unwrap();
//!
//! assert_eq!(config.group_size, 8);
//! assert_eq!(config.age_tolerance, 3);
//! ```
//!
//! Use default config when the file is missing:
//!
//! ```
//! use flocksort_config::EngineConfig;
//!
//! let config = EngineConfig::load("flocksort.toml").unwrap_or_default();
//! // Proceeds with defaults if the file doesn't exist
//! assert_eq!(config.group_size, 10);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default target members per group.
pub const DEFAULT_GROUP_SIZE: usize = 10;

/// Default half-width of an age band, in years.
pub const DEFAULT_AGE_TOLERANCE: u32 = 5;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Engine configuration.
///
/// `group_size` is the target membership per group; the distributor keeps
/// actual sizes within 80%..120% of it. `age_tolerance` is the allowed age
/// spread around a band center, so bands are `2 × age_tolerance` wide.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EngineConfig {
    /// Target members per group (>= 1).
    #[serde(default = "default_group_size")]
    pub group_size: usize,

    /// Half-width of an age band in years (>= 1).
    #[serde(default = "default_age_tolerance")]
    pub age_tolerance: u32,
}

fn default_group_size() -> usize {
    DEFAULT_GROUP_SIZE
}

fn default_age_tolerance() -> u32 {
    DEFAULT_AGE_TOLERANCE
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
            age_tolerance: DEFAULT_AGE_TOLERANCE,
        }
    }
}

impl EngineConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the target group size.
    pub fn with_group_size(mut self, group_size: usize) -> Self {
        self.group_size = group_size;
        self
    }

    /// Sets the age band half-width.
    pub fn with_age_tolerance(mut self, age_tolerance: u32) -> Self {
        self.age_tolerance = age_tolerance;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when `group_size` or `age_tolerance`
    /// is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.group_size < 1 {
            return Err(ConfigError::Invalid(
                "group_size must be at least 1".to_string(),
            ));
        }
        if self.age_tolerance < 1 {
            return Err(ConfigError::Invalid(
                "age_tolerance must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
