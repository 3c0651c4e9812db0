use penny_domain::{alert::AlertThresholds, date_range::DatePreset};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// User preferences consulted by filter bars and alert banners.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default)]
    pub default_date_preset: DatePreset,
    #[serde(default)]
    pub alerts: AlertSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency: Self::default_currency(),
            default_date_preset: DatePreset::default(),
            alerts: AlertSettings::default(),
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        "en-US".into()
    }

    pub fn default_currency() -> String {
        "USD".into()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.alerts
            .thresholds
            .validate()
            .map_err(|err| ConfigError::Invalid(err.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertSettings {
    #[serde(default = "AlertSettings::default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub thresholds: AlertThresholds,
}

impl AlertSettings {
    pub fn default_enabled() -> bool {
        true
    }
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            thresholds: AlertThresholds::default(),
        }
    }
}
