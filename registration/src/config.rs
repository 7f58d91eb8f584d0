//! Packet-generator configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{RegistrationError, Result};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationConfig {
    /// Language code passed to master-data lookups.
    #[serde(default = "default_primary_language")]
    pub primary_language: String,
}

fn default_primary_language() -> String {
    "eng".to_string()
}

impl RegistrationConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| RegistrationError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| RegistrationError::Config(e.to_string()))
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            primary_language: default_primary_language(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config = RegistrationConfig::from_toml_str("").unwrap();
        assert_eq!(config.primary_language, "eng");
    }

    #[test]
    fn language_override() {
        let config = RegistrationConfig::from_toml_str(r#"primary_language = "ara""#).unwrap();
        assert_eq!(config.primary_language, "ara");
    }

    #[test]
    fn wrong_type_is_a_config_error() {
        let err = RegistrationConfig::from_toml_str("primary_language = 3").unwrap_err();
        assert!(matches!(err, RegistrationError::Config(_)));
    }
}
