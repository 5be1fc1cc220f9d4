//! Configuration for the Eventa client
//!
//! This module handles loading, parsing, validating, and defaulting the
//! client configuration from files or inline construction.

use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Client configuration
///
/// Holds everything needed to talk to one Eventa deployment: the API base
/// URL, the static API key attached to every request, the per-request
/// timeout, and the two session endpoints the coordinator must never
/// intercept.
///
/// # Examples
///
/// ```
/// use eventa_client::config::ClientConfig;
///
/// let config = ClientConfig {
///     base_url: "https://api.eventa.example/api/v1".to_string(),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API base URL, e.g. `http://localhost:5004/api/v1`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Static API key sent as `X-API-Key` on every request
    #[serde(default)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Path of the session renewal endpoint, excluded from interception
    #[serde(default = "default_refresh_path")]
    pub refresh_path: String,

    /// Path of the logout endpoint, excluded from interception
    #[serde(default = "default_logout_path")]
    pub logout_path: String,
}

fn default_base_url() -> String {
    "http://localhost:5004/api/v1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_refresh_path() -> String {
    "/auth/refresh-token".to_string()
}

fn default_logout_path() -> String {
    "/auth/logout".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_seconds: default_timeout(),
            refresh_path: default_refresh_path(),
            logout_path: default_logout_path(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from a YAML file.
    ///
    /// Missing fields fall back to their defaults, so a partial file such as
    /// `base_url: https://api.eventa.example` is valid.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Io`] if the file cannot be read and
    /// [`ClientError::Yaml`] if it is not valid YAML for this structure.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(ClientError::Io)?;
        let config: Self = serde_yaml::from_str(&contents).map_err(ClientError::Yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when the base URL does not parse,
    /// when the timeout is zero, or when either session path does not start
    /// with `/`.
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)
            .map_err(|e| ClientError::Config(format!("invalid base_url '{}': {}", self.base_url, e)))?;

        if self.timeout_seconds == 0 {
            return Err(ClientError::Config("timeout_seconds must be non-zero".to_string()).into());
        }

        for (name, path) in [
            ("refresh_path", &self.refresh_path),
            ("logout_path", &self.logout_path),
        ] {
            if !path.starts_with('/') {
                return Err(ClientError::Config(format!(
                    "{} must start with '/': got '{}'",
                    name, path
                ))
                .into());
            }
        }

        Ok(())
    }

    /// Per-request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
