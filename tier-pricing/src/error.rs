// Copyright (c) 2024 Botho Foundation

//! Error types for pricing operations and tier table validation.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::TierLevel;

/// Invalid input to a pricing operation.
///
/// Pricing never performs a partial computation: when one of these is
/// returned nothing else was calculated.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Subscriber counts start at zero.
    #[error("subscriber count cannot be negative (got {0})")]
    NegativeSubscriberCount(i64),

    /// Base prices start at zero.
    #[error("base price cannot be negative (got {0})")]
    NegativeBasePrice(Decimal),

    /// The total does not fit in a decimal.
    #[error("base price {0} is too large to price")]
    BasePriceTooLarge(Decimal),
}

/// A tier table that violates one of the table invariants.
///
/// Returned by [`TierTable::new`](crate::TierTable::new); a table that
/// constructs successfully never produces one of these later.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TierTableError {
    #[error("tier table has no tiers")]
    Empty,

    #[error("tier at position {position} has level {found}, expected level {expected}")]
    NonSequentialLevel {
        position: usize,
        expected: TierLevel,
        found: TierLevel,
    },

    #[error("tier {level} starts at {found} subscribers, expected {expected}")]
    NonContiguous {
        level: TierLevel,
        expected: u64,
        found: u64,
    },

    #[error("tier {level} has minimum {min} above maximum {max}")]
    InvertedRange { level: TierLevel, min: u64, max: u64 },

    #[error("tier {level} ends at the largest subscriber count but is not the top tier")]
    RangeOverflow { level: TierLevel },

    #[error("tier {level} is unbounded but is not the top tier")]
    UnboundedBeforeTop { level: TierLevel },

    #[error("top tier {level} must be unbounded")]
    BoundedTop { level: TierLevel },

    #[error("tier {level} has non-positive price {price}")]
    NonPositivePrice { level: TierLevel, price: Decimal },
}
