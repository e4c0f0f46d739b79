// Copyright (c) 2024 Botho Foundation

use core::fmt;

use rust_decimal::Decimal;

/// Rank of a tier within a [`TierTable`](crate::TierTable).
///
/// Level 1 is the smallest audience bracket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct TierLevel(u32);

impl TierLevel {
    /// The lowest tier; also the fallback for counts below every floor.
    pub const FIRST: TierLevel = TierLevel(1);

    pub const fn new(level: u32) -> Self {
        Self(level)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// The level ranked immediately above this one.
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u32> for TierLevel {
    fn from(level: u32) -> Self {
        Self(level)
    }
}

impl fmt::Display for TierLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A subscriber-count bracket with its flat campaign price.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tier {
    /// Rank of this tier.
    pub level: TierLevel,

    /// Human-readable label, e.g. "Micro Creator".
    pub description: String,

    /// Display-only range, e.g. "70K - 150K". Not used for classification.
    pub range: String,

    /// Flat price of a campaign with a creator in this tier.
    pub price: Decimal,

    /// Inclusive lower bound.
    pub min_subscribers: u64,

    /// Inclusive upper bound; `None` for the unbounded top tier.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub max_subscribers: Option<u64>,
}

impl Tier {
    pub fn new(
        level: u32,
        description: impl Into<String>,
        range: impl Into<String>,
        price: Decimal,
        min_subscribers: u64,
        max_subscribers: Option<u64>,
    ) -> Self {
        Self {
            level: TierLevel(level),
            description: description.into(),
            range: range.into(),
            price,
            min_subscribers,
            max_subscribers,
        }
    }

    /// Whether `count` falls inside this tier's inclusive range.
    pub fn contains(&self, count: u64) -> bool {
        count >= self.min_subscribers && self.max_subscribers.map_or(true, |max| count <= max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_subscribers.is_none()
    }
}
