//! Top-level simulator configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ObservabilityConfig, PropagationConfig};
use crate::errors::ConfigError;

/// Environment variable overriding `observability.log_level`.
pub const ENV_LOG_LEVEL: &str = "DISMAL_LOG_LEVEL";
/// Environment variable overriding `propagation.random_seed`.
pub const ENV_RANDOM_SEED: &str = "DISMAL_RANDOM_SEED";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`DISMAL_*`)
/// 2. Config file
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub propagation: PropagationConfig,
    pub observability: ObservabilityConfig,
}

impl SimConfig {
    /// Parse configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load a config file, apply environment overrides, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: SimConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `DISMAL_*` environment variables on top of the current values.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup (the environment in production).
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.observability.log_level = level.trim().to_lowercase();
        }
        if let Some(seed) = lookup(ENV_RANDOM_SEED) {
            let parsed = seed
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::ValidationFailed {
                    field: "propagation.random_seed".to_string(),
                    message: format!("{ENV_RANDOM_SEED}={seed}: {e}"),
                })?;
            self.propagation.random_seed = Some(parsed);
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!(
                    "must be one of {}, got {}",
                    LOG_LEVELS.join(", "),
                    self.observability.log_level
                ),
            });
        }
        Ok(())
    }
}
