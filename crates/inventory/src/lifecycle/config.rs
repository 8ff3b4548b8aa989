//! Runtime configuration, loaded from TOML.
//!
//! ```toml
//! channel_buffer = 64
//! page_size = 25
//! seed_products = 50
//! rng_seed = 7
//!
//! [latency]
//! create_ms = 500
//! update_ms = 500
//! delete_ms = 300
//! delete_many_ms = 500
//! ```
//!
//! Every key is optional.

use crate::gateway::GatewayLatency;
use crate::model::PageSize;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the path of the config file.
pub const CONFIG_ENV_VAR: &str = "INVENTORY_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Capacity of the dashboard actor's request channel.
    pub channel_buffer: usize,
    pub page_size: PageSize,
    /// Size of the generated sample catalog.
    pub seed_products: usize,
    /// Fixes the sample catalog. A fresh one is generated on every start otherwise.
    pub rng_seed: Option<u64>,
    pub latency: LatencyConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            page_size: PageSize::default(),
            seed_products: 50,
            rng_seed: None,
            latency: LatencyConfig::default(),
        }
    }
}

/// Simulated gateway delays, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LatencyConfig {
    pub create_ms: u64,
    pub update_ms: u64,
    pub delete_ms: u64,
    pub delete_many_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        let defaults = GatewayLatency::default();
        Self {
            create_ms: millis(defaults.create),
            update_ms: millis(defaults.update),
            delete_ms: millis(defaults.delete),
            delete_many_ms: millis(defaults.delete_many),
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl From<LatencyConfig> for GatewayLatency {
    fn from(config: LatencyConfig) -> Self {
        Self {
            create: Duration::from_millis(config.create_ms),
            update: Duration::from_millis(config.update_ms),
            delete: Duration::from_millis(config.delete_ms),
            delete_many: Duration::from_millis(config.delete_many_ms),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("channel_buffer must be at least 1")]
    ZeroChannelBuffer,
}

impl DashboardConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Loads the file named by `INVENTORY_CONFIG`, or the defaults when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn gateway_latency(&self) -> GatewayLatency {
        self.latency.into()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_buffer == 0 {
            return Err(ConfigError::ZeroChannelBuffer);
        }
        Ok(())
    }
}
