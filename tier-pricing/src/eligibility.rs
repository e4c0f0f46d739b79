// Copyright (c) 2024 Botho Foundation

//! Subscriber requirements for joining a campaign.
//!
//! The requirement threshold is configured independently of the tier table:
//! a campaign may ask for more (or fewer) subscribers than tier 1's floor.

use crate::{PricingError, TierLevel, TierTable};

/// Minimum audience a creator needs to take part in a campaign.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EligibilityRequirement {
    pub min_subscribers: u64,
}

/// Outcome of checking a creator against an [`EligibilityRequirement`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EligibilityStatus {
    pub subscribers: u64,
    pub required: u64,

    /// Tier the creator's current audience classifies into.
    pub tier: TierLevel,
}

impl EligibilityRequirement {
    pub fn new(min_subscribers: u64) -> Self {
        Self { min_subscribers }
    }

    /// Require the table's tier 1 floor.
    pub fn from_table(table: &TierTable) -> Self {
        Self::new(table.floor())
    }

    /// Check a creator's live subscriber count.
    pub fn check(
        &self,
        table: &TierTable,
        subscribers: i64,
    ) -> Result<EligibilityStatus, PricingError> {
        let tier = table.tier_for_subscribers(subscribers)?;

        Ok(EligibilityStatus {
            // Non-negative once classified.
            subscribers: subscribers.unsigned_abs(),
            required: self.min_subscribers,
            tier,
        })
    }
}

impl EligibilityStatus {
    pub fn is_eligible(&self) -> bool {
        self.subscribers >= self.required
    }

    /// Subscribers still needed to meet the requirement; zero when eligible.
    pub fn missing_subscribers(&self) -> u64 {
        self.required.saturating_sub(self.subscribers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_requirement() {
        let table = TierTable::standard();
        let status = EligibilityRequirement::new(30_000).check(&table, 12_500).unwrap();

        assert!(!status.is_eligible());
        assert_eq!(status.missing_subscribers(), 17_500);
        assert_eq!(status.tier, TierLevel::FIRST);
    }

    #[test]
    fn test_exactly_at_requirement() {
        let table = TierTable::standard();
        let status = EligibilityRequirement::new(30_000).check(&table, 30_000).unwrap();

        assert!(status.is_eligible());
        assert_eq!(status.missing_subscribers(), 0);
    }

    #[test]
    fn test_threshold_independent_of_table() {
        let table = TierTable::standard();
        let requirement = EligibilityRequirement::new(100_000);
        let status = requirement.check(&table, 80_000).unwrap();

        assert_eq!(status.tier, TierLevel::new(2));
        assert!(!status.is_eligible());
        assert_eq!(status.missing_subscribers(), 20_000);
    }

    #[test]
    fn test_from_table_uses_floor() {
        let table = TierTable::standard();
        assert_eq!(EligibilityRequirement::from_table(&table).min_subscribers, 30_000);
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let table = TierTable::standard();
        assert_eq!(
            EligibilityRequirement::new(1).check(&table, -10),
            Err(PricingError::NegativeSubscriberCount(-10))
        );
    }
}
