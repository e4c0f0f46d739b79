// Copyright (c) 2024 Botho Foundation

//! Validated, immutable tier tables and subscriber-count classification.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::{PricingError, Tier, TierLevel, TierTableError};

/// An ordered set of contiguous tiers.
///
/// Invariants, checked once by [`TierTable::new`]:
/// - at least one tier;
/// - levels are exactly `1, 2, ..., n` in order;
/// - each tier starts one subscriber above the previous tier's maximum;
/// - only the last tier is unbounded, and it must be;
/// - every price is positive.
///
/// Together these guarantee that every count at or above tier 1's floor
/// falls into exactly one tier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TierTable {
    tiers: Vec<Tier>,
}

impl TierTable {
    /// Validate `tiers` and build a table from them.
    pub fn new(tiers: Vec<Tier>) -> Result<Self, TierTableError> {
        validate(&tiers)?;
        debug!(
            tiers = tiers.len(),
            floor = tiers[0].min_subscribers,
            "tier table validated"
        );
        Ok(Self { tiers })
    }

    /// The marketplace's standard ten-tier table.
    ///
    /// | Level | Subscribers       | Price |
    /// |-------|-------------------|-------|
    /// | 1     | 30,000 - 70,000   | 125   |
    /// | 2     | 70,001 - 150,000  | 250   |
    /// | 3     | 150,001 - 300,000 | 400   |
    /// | 4     | 300,001 - 500,000 | 600   |
    /// | 5     | 500,001 - 750,000 | 850   |
    /// | 6     | 750,001 - 1M      | 1100  |
    /// | 7     | 1M - 1.5M         | 1500  |
    /// | 8     | 1.5M - 2.5M       | 2000  |
    /// | 9     | 2.5M - 4M         | 2750  |
    /// | 10    | above 4M          | 3500  |
    ///
    /// The table is fixed, so it skips the runtime check in [`TierTable::new`];
    /// debug builds still run it.
    pub fn standard() -> Self {
        let tiers = standard_tiers();
        debug_assert_eq!(validate(&tiers), Ok(()));
        Self { tiers }
    }

    /// Classify a subscriber count.
    ///
    /// Counts below tier 1's floor classify as tier 1. Negative counts are
    /// rejected.
    pub fn tier_for_subscribers(&self, count: i64) -> Result<TierLevel, PricingError> {
        Ok(self.pricing_for_subscribers(count)?.level)
    }

    /// Look up a tier by level. `None` if the table has no such level.
    pub fn tier_metadata(&self, level: TierLevel) -> Option<&Tier> {
        let index = level.get().checked_sub(1)?;
        self.tiers.get(usize::try_from(index).ok()?)
    }

    /// The full tier record for a subscriber count.
    pub fn pricing_for_subscribers(&self, count: i64) -> Result<&Tier, PricingError> {
        let count = u64::try_from(count).map_err(|_| PricingError::NegativeSubscriberCount(count))?;
        let tier = self.classify(count);
        trace!(count, level = %tier.level, "classified subscriber count");
        Ok(tier)
    }

    /// Subscriber count at which tier 1 starts.
    pub fn floor(&self) -> u64 {
        self.tiers[0].min_subscribers
    }

    /// The unbounded top tier.
    pub fn top(&self) -> &Tier {
        &self.tiers[self.tiers.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Always false; a table holds at least one tier.
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tier> {
        self.tiers.iter()
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    fn classify(&self, count: u64) -> &Tier {
        // Number of tiers whose floor is at or below `count`. Zero means the
        // count is below tier 1, which falls back to tier 1.
        let above = self.tiers.partition_point(|tier| tier.min_subscribers <= count);
        &self.tiers[above.saturating_sub(1)]
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a TierTable {
    type Item = &'a Tier;
    type IntoIter = core::slice::Iter<'a, Tier>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiers.iter()
    }
}

fn validate(tiers: &[Tier]) -> Result<(), TierTableError> {
    if tiers.is_empty() {
        return Err(TierTableError::Empty);
    }

    let last = tiers.len() - 1;
    let mut expected_level = TierLevel::FIRST;
    let mut expected_min: Option<u64> = None;

    for (position, tier) in tiers.iter().enumerate() {
        let level = tier.level;

        if level != expected_level {
            return Err(TierTableError::NonSequentialLevel {
                position,
                expected: expected_level,
                found: level,
            });
        }

        if tier.price <= Decimal::ZERO {
            return Err(TierTableError::NonPositivePrice {
                level,
                price: tier.price,
            });
        }

        if let Some(expected) = expected_min {
            if tier.min_subscribers != expected {
                return Err(TierTableError::NonContiguous {
                    level,
                    expected,
                    found: tier.min_subscribers,
                });
            }
        }

        match tier.max_subscribers {
            Some(_) if position == last => {
                return Err(TierTableError::BoundedTop { level });
            }
            Some(max) => {
                if tier.min_subscribers > max {
                    return Err(TierTableError::InvertedRange {
                        level,
                        min: tier.min_subscribers,
                        max,
                    });
                }
                expected_min = Some(
                    max.checked_add(1)
                        .ok_or(TierTableError::RangeOverflow { level })?,
                );
            }
            None if position != last => {
                return Err(TierTableError::UnboundedBeforeTop { level });
            }
            None => {}
        }

        expected_level = level.next();
    }

    Ok(())
}

fn standard_tiers() -> Vec<Tier> {
    const TIERS: [(&str, &str, i64, u64, Option<u64>); 10] = [
        ("Nano Creator", "30K - 70K", 125, 30_000, Some(70_000)),
        ("Micro Creator", "70K - 150K", 250, 70_001, Some(150_000)),
        ("Rising Creator", "150K - 300K", 400, 150_001, Some(300_000)),
        ("Established Creator", "300K - 500K", 600, 300_001, Some(500_000)),
        ("Mid-Tier Creator", "500K - 750K", 850, 500_001, Some(750_000)),
        ("Prominent Creator", "750K - 1M", 1_100, 750_001, Some(1_000_000)),
        ("Macro Creator", "1M - 1.5M", 1_500, 1_000_001, Some(1_500_000)),
        ("Leading Creator", "1.5M - 2.5M", 2_000, 1_500_001, Some(2_500_000)),
        ("Star Creator", "2.5M - 4M", 2_750, 2_500_001, Some(4_000_000)),
        ("Mega Creator", "4M+", 3_500, 4_000_001, None),
    ];

    TIERS
        .iter()
        .zip(1u32..)
        .map(|(&(description, range, price, min, max), level)| {
            Tier::new(level, description, range, Decimal::from(price), min, max)
        })
        .collect()
}
