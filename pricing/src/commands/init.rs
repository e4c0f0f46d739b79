// Copyright (c) 2024 Botho Foundation

use anyhow::{bail, Result};
use std::path::Path;
use tier_pricing::TierTable;
use tracing::info;

use crate::config::Config;

/// Run the init command
pub fn run(config_path: &Path, force: bool) -> Result<()> {
    // Check if config already exists
    if Config::exists(config_path) && !force {
        bail!(
            "Config already exists at {}\nUse --force to overwrite or pass another --config path.",
            config_path.display()
        );
    }

    // Write the standard table out so operators have something to edit
    let config = Config {
        tiers: TierTable::standard().tiers().to_vec(),
        ..Config::default()
    };
    config.save(config_path)?;

    info!("Config initialized at {}", config_path.display());
    println!("Config saved to: {}", config_path.display());
    println!("\nNext steps:");
    println!("  1. Edit the [[tiers]] entries to change tier ranges or prices");
    println!("  2. Run 'campaign-pricing tiers' to check the table");

    Ok(())
}
