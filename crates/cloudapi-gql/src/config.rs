//! Server configuration

use cloudapi_client::ClientConfig;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file looked up when no path is given explicitly
pub const DEFAULT_CONFIG_FILE: &str = "config/cloudapi.toml";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {name}: {value}")]
    InvalidEnv { name: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server bind address
    pub addr: SocketAddr,
    /// Upstream CloudAPI settings
    pub cloudapi: CloudApiConfig,
}

/// Upstream CloudAPI configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CloudApiConfig {
    /// Private key used to authenticate against CloudAPI
    pub key_path: PathBuf,
    /// Id of that key as registered with the account
    pub key_id: String,
    /// CloudAPI endpoint
    pub api_base_url: String,
    /// Account login, `my` addresses the key owner
    pub account: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Retries for failed upstream reads
    pub max_retries: u32,
}

impl Default for CloudApiConfig {
    fn default() -> Self {
        let client = ClientConfig::default();
        Self {
            key_path: client.key_path,
            key_id: client.key_id,
            api_base_url: client.base_url,
            account: client.account,
            timeout_secs: client.timeout_secs,
            max_retries: client.max_retries,
        }
    }
}

impl CloudApiConfig {
    /// Settings for the REST client
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_base_url.clone(),
            account: self.account.clone(),
            key_id: self.key_id.clone(),
            key_path: self.key_path.clone(),
            timeout_secs: self.timeout_secs,
            max_retries: self.max_retries,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 4000)),
            cloudapi: CloudApiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration
    /// Priority: Environment variables > config file > defaults
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    tracing::debug!("Config file not found: {:?}", default_path);
                    Self::default()
                }
            }
        };

        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Override fields from environment variables, read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("CLOUDAPI_GQL_ADDR") {
            self.addr = addr.parse().map_err(|_| ConfigError::InvalidEnv {
                name: "CLOUDAPI_GQL_ADDR",
                value: addr.clone(),
            })?;
        }

        if let Some(key_path) = lookup("SDC_KEY_PATH") {
            self.cloudapi.key_path = PathBuf::from(key_path);
        }

        if let Some(key_id) = lookup("SDC_KEY_ID") {
            self.cloudapi.key_id = key_id;
        }

        if let Some(url) = lookup("SDC_URL") {
            self.cloudapi.api_base_url = url;
        }

        if let Some(account) = lookup("SDC_ACCOUNT") {
            self.cloudapi.account = account;
        }

        Ok(())
    }

    /// Set a new bind address
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }
}
