//! Matching configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use idauth_utils::LogFormat;

use crate::aggregation::AggregationPolicy;
use crate::error::{IdentityMatchError, Result};

/// Configuration for biometric match resolution.
///
/// Can be loaded from a TOML file via [`MatchingConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// How per-sample scores of one modality are combined.
    #[serde(default)]
    pub aggregation: AggregationPolicy,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_log_format() -> LogFormat {
    LogFormat::Human
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl MatchingConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| IdentityMatchError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| IdentityMatchError::Config(e.to_string()))
    }

    /// Install the global tracing subscriber with this config's log settings.
    ///
    /// # Panics
    ///
    /// Panics if a global subscriber has already been set.
    pub fn init_logging(&self) {
        idauth_utils::init_logging(self.log_format, &self.log_level);
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| IdentityMatchError::Config(e.to_string()))
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            aggregation: AggregationPolicy::default(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}
