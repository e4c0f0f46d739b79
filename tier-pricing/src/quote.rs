// Copyright (c) 2024 Botho Foundation

use crate::{compute_fee_breakdown, FeeBreakdown, PricingError, Tier, TierTable};

/// Price estimate for a campaign with one creator.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CampaignQuote {
    /// The creator's tier.
    pub tier: Tier,

    /// Fee breakdown of the tier price.
    pub breakdown: FeeBreakdown,
}

impl TierTable {
    /// Quote a campaign for a creator with `count` subscribers.
    pub fn quote_for_subscribers(
        &self,
        count: i64,
        currency: &str,
    ) -> Result<CampaignQuote, PricingError> {
        let tier = self.pricing_for_subscribers(count)?;
        let breakdown = compute_fee_breakdown(tier.price, currency)?;

        Ok(CampaignQuote {
            tier: tier.clone(),
            breakdown,
        })
    }
}
