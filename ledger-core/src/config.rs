//! Configuration for the ledger

use serde::{Deserialize, Serialize};

/// Ledger configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Service name
    pub service_name: String,

    /// Form validation configuration
    pub validation: ValidationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "ledger-core".to_string(),
            validation: ValidationConfig::default(),
        }
    }
}

/// Form validation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Accept zero and negative amounts (refunds entered as expenses)
    pub allow_non_positive_amounts: bool,

    /// Reject dates that are not `YYYY-MM-DD`
    pub require_iso_date: bool,
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(value) = std::env::var("LEDGER_ALLOW_NON_POSITIVE") {
            config.validation.allow_non_positive_amounts = parse_flag("LEDGER_ALLOW_NON_POSITIVE", &value)?;
        }

        if let Ok(value) = std::env::var("LEDGER_REQUIRE_ISO_DATE") {
            config.validation.require_iso_date = parse_flag("LEDGER_REQUIRE_ISO_DATE", &value)?;
        }

        Ok(config)
    }
}

fn parse_flag(name: &str, value: &str) -> crate::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(crate::Error::Config(format!(
            "{} must be a boolean, got '{}'",
            name, other
        ))),
    }
}
