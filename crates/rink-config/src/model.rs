use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

/// Stores user preferences that shape new scenarios and the as-of month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    /// Calendar selected for newly created scenarios.
    #[serde(default = "Config::default_country_code")]
    pub country_code: String,
    /// Fixes the monthly view to a month (1-12) instead of following the clock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_month: Option<u32>,
    /// Extra `tracing` filter directives, e.g. `rink_core=debug`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for stored settings. Defaults to the platform config dir.
    pub data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency: Self::default_currency(),
            country_code: Self::default_country_code(),
            pinned_month: None,
            log_filter: None,
            data_root: None,
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        "en-GB".into()
    }

    pub fn default_currency() -> String {
        "GBP".into()
    }

    pub fn default_country_code() -> String {
        "FR".into()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(month) = self.pinned_month {
            if !(1..=12).contains(&month) {
                let reason = format!("must be between 1 and 12, got {month}");
                return Err(ConfigError::invalid("pinned_month", reason));
            }
        }
        if self.country_code.trim().is_empty() {
            return Err(ConfigError::invalid("country_code", "must not be empty"));
        }
        if self.currency.trim().is_empty() {
            return Err(ConfigError::invalid("currency", "must not be empty"));
        }
        Ok(())
    }

    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }

        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("rink-projection")
    }
}
