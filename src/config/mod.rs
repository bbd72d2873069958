//! # Scheduler Configuration
//!
//! Batch width and inter-batch pause for [`BatchScheduler`](crate::scheduler::BatchScheduler).
//!
//! Values are layered: built-in defaults, then an optional configuration file, then
//! `BATCH_SCHEDULER_*` environment variables. See [`ConfigManager`].
//!
//! ```rust,no_run
//! use batch_scheduler::config::ConfigManager;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ConfigManager::load()?;
//! let batch_size = manager.config().batch_size;
//! let delay = manager.config().inter_batch_delay();
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use error::{ConfigResult, ConfigurationError};
pub use loader::ConfigManager;

pub const DEFAULT_BATCH_SIZE: usize = 10;
pub const DEFAULT_INTER_BATCH_DELAY_MS: u64 = 0;

pub const ENV_PREFIX: &str = "BATCH_SCHEDULER";
pub const ENV_BATCH_SIZE: &str = "BATCH_SCHEDULER_BATCH_SIZE";
pub const ENV_INTER_BATCH_DELAY_MS: &str = "BATCH_SCHEDULER_INTER_BATCH_DELAY_MS";
pub const ENV_CONFIG_PATH: &str = "BATCH_SCHEDULER_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Number of items processed concurrently per batch
    pub batch_size: usize,

    /// Pause between consecutive batches, in milliseconds (0 disables it)
    pub inter_batch_delay_ms: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            inter_batch_delay_ms: DEFAULT_INTER_BATCH_DELAY_MS,
        }
    }
}

impl SchedulerConfig {
    pub fn new(batch_size: usize, inter_batch_delay_ms: u64) -> Self {
        Self {
            batch_size,
            inter_batch_delay_ms,
        }
    }

    pub fn inter_batch_delay(&self) -> Duration {
        Duration::from_millis(self.inter_batch_delay_ms)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.batch_size == 0 {
            return Err(ConfigurationError::invalid_value(
                "batch_size",
                self.batch_size,
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Defaults overridden by `BATCH_SCHEDULER_BATCH_SIZE` and
    /// `BATCH_SCHEDULER_INTER_BATCH_DELAY_MS`.
    pub fn from_env() -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Ok(batch_size) = std::env::var(ENV_BATCH_SIZE) {
            config.batch_size = batch_size.trim().parse().map_err(|e| {
                ConfigurationError::EnvironmentVariableError {
                    variable: ENV_BATCH_SIZE.to_string(),
                    context: format!("{e}"),
                }
            })?;
        }

        if let Ok(delay) = std::env::var(ENV_INTER_BATCH_DELAY_MS) {
            config.inter_batch_delay_ms = delay.trim().parse().map_err(|e| {
                ConfigurationError::EnvironmentVariableError {
                    variable: ENV_INTER_BATCH_DELAY_MS.to_string(),
                    context: format!("{e}"),
                }
            })?;
        }

        config.validate()?;
        Ok(config)
    }
}
