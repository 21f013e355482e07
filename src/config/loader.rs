use super::types::ProbeConfig;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

/// Environment prefix used when none is set on the loader
pub const DEFAULT_ENV_PREFIX: &str = "ENV_PROBE";

/// Configuration loader with builder pattern
///
/// Layering order: defaults, then the config file, then the environment.
pub struct ConfigLoader {
    config_file: Option<PathBuf>,
    load_env: bool,
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            config_file: None,
            load_env: false,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }

    /// Load configuration from file
    pub fn load_from_file(mut self, path: Option<&Path>) -> Self {
        self.config_file = path.map(Path::to_path_buf);
        self
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        self.load_env = true;
        self
    }

    /// Override the environment variable prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Result<ProbeConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&ProbeConfig::default()).context("Failed to encode defaults")?,
        );

        // An explicit path must exist; the standard locations are optional
        if let Some(config_path) = &self.config_file {
            builder = builder.add_source(File::from(config_path.as_path()).required(true));
        } else {
            builder = builder
                .add_source(File::with_name("env-probe").required(false))
                .add_source(File::with_name("config/env-probe").required(false));
        }

        if self.load_env {
            builder = builder.add_source(
                Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    // values stay strings; typed fields are parsed on deserialize
                    .list_separator(",")
                    .with_list_parse_key("query.params"),
            );
        }

        let config: ProbeConfig = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate().context("Invalid configuration")?;

        tracing::debug!(
            host = %config.mysql.host,
            port = config.mysql.port,
            "Configuration loaded"
        );

        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
