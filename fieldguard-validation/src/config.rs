//! Validator configuration and builder

use crate::{FieldGuardError, Result, StructValidator};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

/// Environment variable read by [`ValidatorConfig::from_env`]
pub const STOP_ON_FIRST_FAILURE_ENV: &str = "FIELDGUARD_STOP_ON_FIRST_FAILURE";

/// Configuration for a [`StructValidator`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// End the whole pass at the first failing rule
    pub stop_on_first_failure: bool,
}

impl ValidatorConfig {
    /// Load configuration from the environment
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(raw) = env::var(STOP_ON_FIRST_FAILURE_ENV) {
            config.stop_on_first_failure = parse_flag(STOP_ON_FIRST_FAILURE_ENV, &raw)?;
        }

        Ok(config)
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(FieldGuardError::config(format!(
            "{} must be a boolean flag, got `{}`",
            key, other
        ))),
    }
}

/// Builder for creating a StructValidator
#[derive(Debug, Default)]
pub struct StructValidatorBuilder {
    stop_on_first_failure: bool,
}

impl StructValidatorBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn config(mut self, config: ValidatorConfig) -> Self {
        self.stop_on_first_failure = config.stop_on_first_failure;
        self
    }

    /// End the pass at the first failing rule
    pub fn stop_on_first_failure(mut self, stop: bool) -> Self {
        self.stop_on_first_failure = stop;
        self
    }

    /// Build the validator
    pub fn build(self) -> StructValidator {
        debug!(
            stop_on_first_failure = self.stop_on_first_failure,
            "Building struct validator"
        );

        StructValidator::with_config(ValidatorConfig {
            stop_on_first_failure: self.stop_on_first_failure,
        })
    }
}
