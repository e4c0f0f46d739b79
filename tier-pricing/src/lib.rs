// Copyright (c) 2024 Botho Foundation

//! Creator tier classification and platform fee pricing.
//!
//! Campaigns on the marketplace are priced by the size of the creator's
//! audience. A [`TierTable`] partitions subscriber counts into contiguous,
//! ranked brackets, each carrying a flat campaign price. On top of the tier
//! price the platform charges a fixed surcharge, computed by
//! [`compute_fee_breakdown`].
//!
//! ## Tier Lookup
//!
//! | Input                          | Result                              |
//! |--------------------------------|-------------------------------------|
//! | count inside a tier's range    | that tier (bounds are inclusive)    |
//! | count below tier 1's floor     | tier 1                              |
//! | count above the last bound     | the unbounded top tier              |
//! | negative count                 | [`PricingError::NegativeSubscriberCount`] |
//!
//! ## Fee Formula
//!
//! ```text
//! platform_fee = round2(base_price × 10%)
//! total_price  = round2(base_price + platform_fee)
//! ```
//!
//! `round2` rounds half-up to two decimal places. The fee is rounded before
//! the total is derived from it, so `total_price - platform_fee` always equals
//! the (rounded) base price and the displayed figures add up.
//!
//! Every operation is pure. A [`TierTable`] is validated once when it is
//! built and is immutable afterwards, so it can be shared freely between
//! threads.

mod eligibility;
mod error;
mod fee;
mod quote;
mod table;
mod tier;

pub use eligibility::{EligibilityRequirement, EligibilityStatus};
pub use error::{PricingError, TierTableError};
pub use fee::{compute_fee_breakdown, platform_fee_rate, round2, FeeBreakdown, PLATFORM_FEE_BPS};
pub use quote::CampaignQuote;
pub use table::TierTable;
pub use tier::{Tier, TierLevel};

/// Re-exported so callers can build prices without naming the decimal crate.
pub use rust_decimal::Decimal;
