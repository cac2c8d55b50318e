//! Configuration for settlement

use serde::{Deserialize, Serialize};

/// Settlement configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Service name
    pub service_name: String,

    /// Ledger configuration
    pub ledger: ledger_core::Config,

    /// Cost split configuration
    pub split: SplitConfig,

    /// Report rendering configuration
    pub report: ReportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "expense-session".to_string(),
            ledger: ledger_core::Config::default(),
            split: SplitConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// Cost split configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Number of participants sharing the total
    ///
    /// Fixed, not derived from the payers seen in the records.
    pub number_of_participants: u32,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            number_of_participants: 2,
        }
    }
}

/// Report rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Label printed after amounts
    pub currency_label: String,

    /// Decimal places shown (arithmetic stays exact)
    pub display_scale: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency_label: "ILS".to_string(),
            display_scale: 2,
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config {
            ledger: ledger_core::Config::from_env()?,
            ..Config::default()
        };

        if let Ok(value) = std::env::var("SETTLEMENT_PARTICIPANTS") {
            config.split.number_of_participants = value.trim().parse().map_err(|e| {
                crate::Error::Config(format!("SETTLEMENT_PARTICIPANTS '{}': {}", value, e))
            })?;
        }

        if let Ok(label) = std::env::var("SETTLEMENT_CURRENCY") {
            config.report.currency_label = label;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check values that would make the summary meaningless
    pub fn validate(&self) -> crate::Result<()> {
        if self.split.number_of_participants == 0 {
            return Err(crate::Error::Config(
                "number_of_participants must be at least 1".to_string(),
            ));
        }
        if self.report.display_scale > 10 {
            return Err(crate::Error::Config(format!(
                "display_scale {} is above the maximum of 10",
                self.report.display_scale
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.split.number_of_participants, 2);
        assert_eq!(config.report.display_scale, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_participants_rejected() {
        let mut config = Config::default();
        config.split.number_of_participants = 0;
        assert!(matches!(config.validate(), Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[report]\ncurrency_label = \"EUR\"\n\n[ledger.validation]\nrequire_iso_date = true"
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.report.currency_label, "EUR");
        assert_eq!(config.report.display_scale, 2);
        assert_eq!(config.split.number_of_participants, 2);
        assert!(config.ledger.validation.require_iso_date);
    }

    #[test]
    fn test_from_file_rejects_zero_participants() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[split]\nnumber_of_participants = 0").unwrap();

        assert!(Config::from_file(file.path()).is_err());
    }
}
