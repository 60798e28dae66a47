//! gatewatch.toml configuration parser.
//!
//! Read once at startup; the daemon refuses to start when validation
//! fails. All fields are immutable after load.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Endpoint;

/// Errors raised while loading or validating configuration.
///
/// All of these are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(String),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("no endpoints configured; at least one probe URL is required")]
    NoEndpoints,

    #[error("invalid duration for {field}: {value:?}")]
    BadDuration { field: &'static str, value: String },

    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewatchConfig {
    pub monitor: MonitorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Ordered list of URLs to probe each round.
    pub endpoints: Vec<Endpoint>,
    /// Pause between rounds, e.g. "20s", "500ms", "1m".
    #[serde(default = "default_check_interval")]
    pub check_interval: String,
    /// Hard per-request timeout for each probe.
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout: String,
    /// Externally hosted dashboard embedded on the status page.
    /// Display-only; never probed.
    #[serde(default)]
    pub dashboard_url: Option<String>,
}

fn default_check_interval() -> String {
    "20s".to_string()
}

fn default_probe_timeout() -> String {
    "3s".to_string()
}

impl GatewatchConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Read(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GatewatchConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the daemon must not start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.monitor.endpoints.is_empty() {
            return Err(ConfigError::NoEndpoints);
        }
        if self.check_interval()?.is_zero() {
            return Err(ConfigError::ZeroDuration {
                field: "check_interval",
            });
        }
        if self.probe_timeout()?.is_zero() {
            return Err(ConfigError::ZeroDuration {
                field: "probe_timeout",
            });
        }
        Ok(())
    }

    pub fn check_interval(&self) -> Result<Duration, ConfigError> {
        parse_duration(&self.monitor.check_interval).ok_or_else(|| ConfigError::BadDuration {
            field: "check_interval",
            value: self.monitor.check_interval.clone(),
        })
    }

    pub fn probe_timeout(&self) -> Result<Duration, ConfigError> {
        parse_duration(&self.monitor.probe_timeout).ok_or_else(|| ConfigError::BadDuration {
            field: "probe_timeout",
            value: self.monitor.probe_timeout.clone(),
        })
    }
}

/// Parse a duration string like "5s", "500ms", "1m".
/// A bare number is taken as seconds.
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(secs) = s.strip_suffix('s') {
        if let Some(ms) = secs.strip_suffix('m') {
            ms.parse::<u64>().ok().map(Duration::from_millis)
        } else {
            secs.parse::<u64>().ok().map(Duration::from_secs)
        }
    } else if let Some(mins) = s.strip_suffix('m') {
        mins.parse::<u64>().ok().map(|m| Duration::from_secs(m * 60))
    } else {
        s.parse::<u64>().ok().map(Duration::from_secs)
    }
}
