//! Configuration management
//!
//! Compatible with the existing settings.json format:
//! ```json
//! {
//!   "currencySymbol": "₱",
//!   "rolloverPolicy": "first-of-month"
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::rollover::{policy_by_name, FirstOfMonth, RolloverPolicy, DEFAULT_POLICY_NAME};

/// Raw settings.json structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default = "default_currency_symbol")]
    currency_symbol: String,
    #[serde(default = "default_rollover_policy")]
    rollover_policy: String,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

fn default_currency_symbol() -> String {
    "₱".to_string()
}

fn default_rollover_policy() -> String {
    DEFAULT_POLICY_NAME.to_string()
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            rollover_policy: default_rollover_policy(),
            other: HashMap::new(),
        }
    }
}

/// BudgetBits configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub currency_symbol: String,
    pub rollover_policy: String,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        let raw = SettingsFile::default();
        Self {
            currency_symbol: raw.currency_symbol.clone(),
            rollover_policy: raw.rollover_policy.clone(),
            _raw_settings: raw,
        }
    }
}

impl Config {
    /// Load config from the data directory
    ///
    /// The rollover policy can be set via:
    /// 1. Settings file ("rolloverPolicy")
    /// 2. Environment variable BUDGETBITS_ROLLOVER (for CI/testing)
    pub fn load(data_dir: &Path) -> Result<Self> {
        let settings_path = data_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        // Check env var for rollover policy override (for CI/testing)
        let rollover_policy = match std::env::var("BUDGETBITS_ROLLOVER").ok() {
            Some(name) if !name.trim().is_empty() => name,
            _ => raw.rollover_policy.clone(),
        };

        Ok(Self {
            currency_symbol: raw.currency_symbol.clone(),
            rollover_policy,
            _raw_settings: raw,
        })
    }

    /// Save config to the data directory
    /// Preserves other settings that the CLI doesn't manage
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let settings_path = data_dir.join("settings.json");

        // Load existing settings to preserve fields we don't manage
        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        // Update only the fields we manage
        settings.currency_symbol = self.currency_symbol.clone();
        settings.rollover_policy = self.rollover_policy.clone();

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// Resolve the configured rollover policy
    ///
    /// An unknown policy name falls back to first-of-month rather than
    /// failing startup.
    pub fn policy(&self) -> Box<dyn RolloverPolicy> {
        policy_by_name(&self.rollover_policy).unwrap_or_else(|| Box::new(FirstOfMonth))
    }
}
