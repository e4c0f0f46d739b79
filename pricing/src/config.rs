// Copyright (c) 2024 Botho Foundation

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tier_pricing::{EligibilityRequirement, Tier, TierTable};
use tracing::{debug, info};

/// Main configuration for campaign pricing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub quote: QuoteConfig,

    #[serde(default)]
    pub eligibility: EligibilityConfig,

    /// Replacement tier table. Empty means the standard marketplace table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tiers: Vec<Tier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteConfig {
    /// Currency tag attached to quotes when none is given on the command line.
    /// Display only; no conversion is performed.
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    /// Subscribers a creator needs to join a campaign.
    /// Defaults to the tier table's floor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_subscribers: Option<u64>,
}

impl Config {
    /// Build the active tier table, validating any override.
    pub fn tier_table(&self) -> Result<TierTable> {
        if self.tiers.is_empty() {
            return Ok(TierTable::standard());
        }

        let table = TierTable::new(self.tiers.clone())
            .context("Invalid [[tiers]] table in config")?;
        debug!(tiers = table.len(), "Using tier table from config");
        Ok(table)
    }

    /// Eligibility requirement, falling back to the table's floor.
    pub fn eligibility_requirement(&self, table: &TierTable) -> EligibilityRequirement {
        match self.eligibility.min_subscribers {
            Some(min) => EligibilityRequirement::new(min),
            None => EligibilityRequirement::from_table(table),
        }
    }

    /// Load config from a file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Load config, using defaults when the file is missing.
    ///
    /// A missing file is only an error if the path was given explicitly.
    pub fn load_or_default(path: &Path, explicit: bool) -> Result<Self> {
        if Self::exists(path) {
            info!("Loading config from {}", path.display());
            return Self::load(path);
        }

        if explicit {
            bail!("Config file {} does not exist", path.display());
        }

        debug!("No config at {}, using defaults", path.display());
        Ok(Self::default())
    }

    /// Save config to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Check if config file exists
    pub fn exists(path: &Path) -> bool {
        path.exists()
    }
}

/// Get the default config directory path
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".campaign-pricing")
}

/// Get the default config file path
pub fn default_config_path() -> PathBuf {
    default_data_dir().join("config.toml")
}
