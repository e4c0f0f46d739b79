// Copyright (c) 2024 Botho Foundation

use anyhow::Result;
use tier_pricing::EligibilityRequirement;

use crate::config::Config;

/// Check whether a creator meets the subscriber requirement
pub fn run(config: &Config, subscribers: i64, min_subscribers: Option<u64>) -> Result<()> {
    let table = config.tier_table()?;
    let requirement = match min_subscribers {
        Some(min) => EligibilityRequirement::new(min),
        None => config.eligibility_requirement(&table),
    };

    let status = requirement.check(&table, subscribers)?;

    println!("Subscribers: {}", status.subscribers);
    println!("Required: {}", status.required);
    println!("Current tier: {}", status.tier);
    if status.is_eligible() {
        println!("Eligible: yes");
    } else {
        println!("Eligible: no ({} more subscribers needed)", status.missing_subscribers());
    }

    Ok(())
}
