//! Metering configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use subscriptions_common::DEFAULT_METERING_STORAGE_KEY;

/// Metering store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeteringConfig {
    /// Whether metering is enabled for this article
    pub enabled: bool,
    /// Storage key for the serialized state
    pub storage_key: String,
}

impl Default for MeteringConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            storage_key: DEFAULT_METERING_STORAGE_KEY.to_string(),
        }
    }
}

impl MeteringConfig {
    /// Load configuration from `.env` and the environment
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let mut cfg = Self::default();
        cfg.apply_overrides(|name| std::env::var(name).ok());
        Ok(cfg)
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("SUBSCRIPTIONS_METERING_ENABLED") {
            if let Some(enabled) = parse_flag(&val) {
                self.enabled = enabled;
            }
        }
        if let Some(key) = lookup("SUBSCRIPTIONS_METERING_STORAGE_KEY") {
            if !key.trim().is_empty() {
                self.storage_key = key;
            }
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
