//! Application configuration.
//!
//! Marketplace state itself is never persisted; the config only carries
//! presentation preferences and catalog entries to pre-populate at
//! startup, so a recurring catalog does not have to be retyped every
//! session.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Currency symbol used when formatting rates and costs
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Catalog entries added at startup
    #[serde(default)]
    pub services: Vec<SeedService>,
}

/// A catalog entry declared in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedService {
    pub name: String,
    #[serde(default)]
    pub uses_own_materials: bool,
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            services: Vec::new(),
        }
    }
}

impl MarketConfig {
    /// Load configuration from file or create the default one.
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: MarketConfig =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file.
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }
}

/// Default config file location under the platform config dir.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fixly")
        .join("config.toml")
}
