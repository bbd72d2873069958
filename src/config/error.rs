//! Configuration Error Types
//!
//! Specific, actionable error messages for configuration loading and validation.

use crate::error::SchedulerError;
use thiserror::Error;

/// Configuration-related errors with detailed context
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Configuration sources could not be read or merged
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    /// Invalid configuration value
    #[error("Invalid value '{value}' for field '{field}': {context}")]
    InvalidValue {
        field: String,
        value: String,
        context: String,
    },

    /// Environment variable present but unparseable
    #[error("Failed to parse environment variable '{variable}': {context}")]
    EnvironmentVariableError { variable: String, context: String },
}

pub type ConfigResult<T> = Result<T, ConfigurationError>;

impl ConfigurationError {
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl ToString,
        context: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.to_string(),
            context: context.into(),
        }
    }
}

impl From<config::ConfigError> for ConfigurationError {
    fn from(error: config::ConfigError) -> Self {
        Self::LoadError(error.to_string())
    }
}

impl From<ConfigurationError> for SchedulerError {
    fn from(error: ConfigurationError) -> Self {
        SchedulerError::ConfigurationError(error.to_string())
    }
}
