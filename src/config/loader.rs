//! Configuration Loader
//!
//! Environment-aware configuration loading. Sources are layered in order:
//! built-in defaults, an optional configuration file, then environment
//! variables such as `ORDER_DISPATCH__DISPATCHER__WORKER_COUNT=4`.

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use super::AppConfig;
use crate::error::Result;

/// Prefix for environment overrides; sections are separated by `__`
pub const ENV_PREFIX: &str = "ORDER_DISPATCH";
const ENV_SEPARATOR: &str = "__";

/// Loaded, validated configuration plus where it came from
#[derive(Debug)]
pub struct ConfigManager {
    config: AppConfig,
    environment: String,
    source_file: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration with environment auto-detection
    pub fn load(config_file: Option<&Path>) -> Result<Arc<ConfigManager>> {
        Self::load_from_sources(config_file, None)
    }

    /// Load configuration, optionally replacing the process environment with an
    /// explicit map of overrides. Useful for testing without touching global state.
    pub fn load_from_sources(
        config_file: Option<&Path>,
        env_overrides: Option<HashMap<String, String>>,
    ) -> Result<Arc<ConfigManager>> {
        let environment = Self::detect_environment();

        debug!(
            environment = %environment,
            config_file = ?config_file,
            "Loading configuration"
        );

        let mut builder = config::Config::builder();
        if let Some(path) = config_file {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .try_parsing(true)
                .source(env_overrides),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        info!(
            environment = %environment,
            worker_count = config.dispatcher.worker_count,
            buffer_capacity = config.dispatcher.buffer_capacity,
            bind_address = %config.web.bind_address,
            "Configuration loaded successfully"
        );

        Ok(Arc::new(ConfigManager {
            config,
            environment,
            source_file: config_file.map(Path::to_path_buf),
        }))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn source_file(&self) -> Option<&Path> {
        self.source_file.as_deref()
    }

    /// Detect the deployment environment from environment variables
    pub fn detect_environment() -> String {
        env::var("ORDER_DISPATCH_ENV")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string())
            .to_lowercase()
    }
}
