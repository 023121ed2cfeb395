//! Telemetry configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::{ConfigError, ValidationError};

/// Logging/tracing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON log lines instead of human-readable ones
    #[serde(default)]
    pub json: bool,

    /// Install a tracing subscriber at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl TelemetryConfig {
    /// Parse the log filter directive
    pub fn env_filter(&self) -> Result<EnvFilter, ValidationError> {
        EnvFilter::try_new(&self.log_level)
            .map_err(|e| ValidationError::InvalidLogFilter(e.to_string()))
    }

    /// Validate telemetry configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.env_filter().map(|_| ())
    }

    /// Install the global tracing subscriber
    ///
    /// Intended for binaries embedding the engine; the library itself only
    /// emits events. Does nothing when telemetry is disabled.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the filter is invalid or a global subscriber
    /// is already installed.
    pub fn init_tracing(&self) -> Result<(), ConfigError> {
        if !self.enabled {
            return Ok(());
        }
        let filter = self.env_filter()?;
        let builder = tracing_subscriber::fmt().with_env_filter(filter);

        let result = if self.json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
        result.map_err(|e| ConfigError::TelemetryInit(e.to_string()))
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
            enabled: default_enabled(),
        }
    }
}

fn default_log_level() -> String {
    "info,cutoff_trends=debug".to_string()
}

fn default_enabled() -> bool {
    true
}
