// Copyright (c) 2024 Botho Foundation

use anyhow::Result;
use tier_pricing::{Tier, TierLevel};

use crate::config::Config;

/// Classify a subscriber count and show its tier
pub fn run(config: &Config, subscribers: i64) -> Result<()> {
    let table = config.tier_table()?;
    let tier = table.pricing_for_subscribers(subscribers)?;

    if subscribers.unsigned_abs() < table.floor() {
        println!(
            "{} subscribers is below the tier 1 floor of {}; classified as tier 1.",
            subscribers,
            table.floor()
        );
    }

    print_tier(tier);
    Ok(())
}

/// Show a tier by level
pub fn lookup(config: &Config, level: u32) -> Result<()> {
    let table = config.tier_table()?;

    match table.tier_metadata(TierLevel::new(level)) {
        Some(tier) => print_tier(tier),
        None => println!("Tier {} not found ({} tiers defined).", level, table.len()),
    }

    Ok(())
}

/// Show the active tier table
pub fn list(config: &Config) -> Result<()> {
    let table = config.tier_table()?;
    let source = if config.tiers.is_empty() { "standard" } else { "config" };

    println!();
    println!("=== Tier Table ({}) ===", source);
    println!();
    println!(
        "{:>5}  {:<22} {:<14} {:>12} {:>12} {:>10}",
        "Level", "Description", "Range", "Min", "Max", "Price"
    );
    for tier in &table {
        let max = tier
            .max_subscribers
            .map(|max| max.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>5}  {:<22} {:<14} {:>12} {:>12} {:>10}",
            tier.level,
            tier.description,
            tier.range,
            tier.min_subscribers,
            max,
            format!("{:.2}", tier.price)
        );
    }
    println!();

    Ok(())
}

fn print_tier(tier: &Tier) {
    println!("Tier {}: {}", tier.level, tier.description);
    println!("  Range: {}", tier.range);
    match tier.max_subscribers {
        Some(max) => println!("  Subscribers: {} - {}", tier.min_subscribers, max),
        None => println!("  Subscribers: {} and above", tier.min_subscribers),
    }
    println!("  Price: {:.2}", tier.price);
}
