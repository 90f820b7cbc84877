//! Configuration file management.
//!
//! Reads the optional `.mooring.toml`. Every field has a default, so the
//! adapter runs unconfigured against a stock `ipfs` install.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Adapter configuration stored in `.mooring.toml`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Daemon invocation settings.
    #[serde(default)]
    pub daemon: DaemonConfig,
    /// Publish behavior settings.
    #[serde(default)]
    pub publish: PublishConfig,
}

/// How the daemon binary is invoked.
#[derive(Debug, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Daemon binary name or path. `MOORING_IPFS_BIN` overrides this.
    #[serde(default = "default_binary")]
    pub binary: String,
    /// Key algorithm passed to key generation.
    #[serde(default = "default_key_type")]
    pub key_type: String,
    /// Key size in bits passed to key generation.
    #[serde(default = "default_key_size")]
    pub key_size: u32,
}

/// Publish behavior settings.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Serialize concurrent publishes per name.
    ///
    /// Off by default: concurrent publishes for one name then race with
    /// the daemon arbitrating and the last write winning.
    #[serde(default)]
    pub serialize: bool,
}

fn default_binary() -> String {
    constants::DEFAULT_BINARY.to_string()
}

fn default_key_type() -> String {
    constants::DEFAULT_KEY_TYPE.to_string()
}

fn default_key_size() -> u32 {
    constants::DEFAULT_KEY_SIZE
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            key_type: default_key_type(),
            key_size: default_key_size(),
        }
    }
}

impl DaemonConfig {
    /// Binary to invoke after applying the environment override.
    pub fn effective_binary(&self) -> String {
        std::env::var(constants::BIN_ENV).unwrap_or_else(|_| self.binary.clone())
    }
}

impl Config {
    /// Path to the configuration file in the current directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Check if a configuration file exists in the current directory.
    pub fn exists() -> bool {
        Self::config_path().exists()
    }

    /// Load configuration from `.mooring.toml`, falling back to defaults
    /// when the file is absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file exists but cannot be
    /// read, or `ConfigError::Parse` if the TOML is malformed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        Ok(config)
    }
}
