//! CLI configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_data::DEFAULT_BASE_URL;

/// CLI configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Simulated checkout.
    #[serde(default = "default_checkout")]
    pub checkout: DelayConfig,

    /// Simulated add-product submission.
    #[serde(default = "default_submit")]
    pub submit: DelayConfig,

    /// Logging.
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            checkout: default_checkout(),
            submit: default_submit(),
            log: LogConfig::default(),
        }
    }
}

/// Catalog API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the product API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// A simulated delay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayConfig {
    /// Delay in milliseconds.
    pub delay_ms: u64,
}

impl DelayConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

fn default_checkout() -> DelayConfig {
    DelayConfig { delay_ms: 2000 }
}

fn default_submit() -> DelayConfig {
    DelayConfig { delay_ms: 1500 }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "warn", "storefront_data=debug").
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Storefront configuration

[api]
base_url = "{base_url}"

[checkout]
# Simulated checkout delay
delay_ms = 2000

[submit]
# Simulated add-product submission delay
delay_ms = 1500

[log]
# Overridden by RUST_LOG
level = "warn"
"#,
        base_url = DEFAULT_BASE_URL
    )
}
