// Copyright (c) 2024 Botho Foundation

use anyhow::Result;
use tier_pricing::{compute_fee_breakdown, Decimal, FeeBreakdown};
use tracing::debug;

use crate::config::Config;

/// Quote a campaign for a creator's subscriber count
pub fn run(config: &Config, subscribers: i64, currency: Option<&str>) -> Result<()> {
    let table = config.tier_table()?;
    let currency = currency.unwrap_or(config.quote.default_currency.as_str());

    let quote = table.quote_for_subscribers(subscribers, currency)?;
    debug!(subscribers, level = %quote.tier.level, "Quoted campaign");

    println!();
    println!("=== Campaign Quote ===");
    println!();
    println!("Creator:");
    println!("  Subscribers: {}", subscribers);
    println!("  Tier: {} ({})", quote.tier.level, quote.tier.description);
    println!("  Range: {}", quote.tier.range);
    println!();
    print_breakdown(&quote.breakdown);

    Ok(())
}

/// Show the fee breakdown for an arbitrary base price
pub fn fee(config: &Config, base_price: Decimal, currency: Option<&str>) -> Result<()> {
    let currency = currency.unwrap_or(config.quote.default_currency.as_str());
    let breakdown = compute_fee_breakdown(base_price, currency)?;

    println!();
    print_breakdown(&breakdown);

    Ok(())
}

fn print_breakdown(breakdown: &FeeBreakdown) {
    let rate_percent = breakdown.fee_rate * Decimal::ONE_HUNDRED;

    println!("Price:");
    println!("  Base price: {:.2} {}", breakdown.base_price, breakdown.currency);
    println!(
        "  Platform fee ({}%): {:.2} {}",
        rate_percent.normalize(),
        breakdown.platform_fee,
        breakdown.currency
    );
    println!("  Total: {:.2} {}", breakdown.total_price, breakdown.currency);
    println!();
}
