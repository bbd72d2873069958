//! Configuration Loader
//!
//! Layers defaults, an optional configuration file and `BATCH_SCHEDULER_*`
//! environment variables using the `config` crate.

use super::error::ConfigResult;
use super::{SchedulerConfig, ENV_CONFIG_PATH, ENV_PREFIX};
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug)]
pub struct ConfigManager {
    config: SchedulerConfig,
    source_file: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration, reading the file named by `BATCH_SCHEDULER_CONFIG` if set
    pub fn load() -> ConfigResult<Arc<ConfigManager>> {
        let path = std::env::var(ENV_CONFIG_PATH).ok().map(PathBuf::from);
        Self::load_from_sources(path.as_deref(), None)
    }

    /// Load configuration from a specific file (TOML, YAML or JSON by extension)
    pub fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<Arc<ConfigManager>> {
        Self::load_from_sources(Some(path.as_ref()), None)
    }

    /// Load from an optional file plus environment overrides.
    ///
    /// `environment` replaces the process environment when given, which keeps
    /// tests independent of global state.
    pub fn load_from_sources(
        path: Option<&Path>,
        environment: Option<config::Map<String, String>>,
    ) -> ConfigResult<Arc<ConfigManager>> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            debug!(path = %path.display(), "Adding configuration file source");
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(environment),
        );

        let config: SchedulerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        info!(
            batch_size = config.batch_size,
            inter_batch_delay_ms = config.inter_batch_delay_ms,
            source_file = ?path,
            "Scheduler configuration loaded"
        );

        Ok(Arc::new(ConfigManager {
            config,
            source_file: path.map(Path::to_path_buf),
        }))
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn source_file(&self) -> Option<&Path> {
        self.source_file.as_deref()
    }
}
