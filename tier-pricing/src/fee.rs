// Copyright (c) 2024 Botho Foundation

//! Platform fee calculation.
//!
//! The platform adds a fixed 10% surcharge to a campaign's base price.
//! Amounts are rounded half-up to cents, fee first:
//!
//! ```text
//! platform_fee = round2(base_price × 0.10)
//! total_price  = round2(base_price + platform_fee)
//! ```
//!
//! Deriving the total from the already-rounded fee keeps the displayed fee
//! and total consistent; rounding each independently can disagree by a cent.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::PricingError;

/// Platform fee in basis points (1/10000). 1000 = 10%.
pub const PLATFORM_FEE_BPS: u32 = 1_000;

// The fee computation below relies on the rate being exactly one tenth.
const _: () = assert!(PLATFORM_FEE_BPS == 1_000);

/// The platform fee as a decimal fraction (0.1000).
pub fn platform_fee_rate() -> Decimal {
    Decimal::new(PLATFORM_FEE_BPS as i64, 4)
}

/// Round to two decimal places, half-up.
///
/// Prices are non-negative, so "away from zero" and "up" coincide at the
/// midpoint.
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Base price, platform fee and total for one price estimate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeeBreakdown {
    /// The price the fee was computed from, as given.
    pub base_price: Decimal,

    /// Always [`platform_fee_rate`].
    pub fee_rate: Decimal,

    pub platform_fee: Decimal,

    pub total_price: Decimal,

    /// Display tag carried through unchanged. Not interpreted.
    pub currency: String,
}

/// Compute the platform fee and total for `base_price`.
///
/// Fails only for negative prices (and for prices so large the total no
/// longer fits in a [`Decimal`]).
pub fn compute_fee_breakdown(
    base_price: Decimal,
    currency: &str,
) -> Result<FeeBreakdown, PricingError> {
    if base_price.is_sign_negative() && !base_price.is_zero() {
        return Err(PricingError::NegativeBasePrice(base_price));
    }

    // At one tenth, round2(base × rate) is base rounded to one place and
    // shifted a digit right. Both steps are exact, so the fee is rounded once
    // however many decimal places the base carries.
    let fee_rate = platform_fee_rate();
    let platform_fee = base_price
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        .checked_div(Decimal::TEN)
        .ok_or(PricingError::BasePriceTooLarge(base_price))?;

    // The fee is a whole number of cents, so round2(base + fee) equals
    // round2(base) + fee without rounding the sum.
    let total_price = round2(base_price)
        .checked_add(platform_fee)
        .ok_or(PricingError::BasePriceTooLarge(base_price))?;

    Ok(FeeBreakdown {
        base_price,
        fee_rate,
        platform_fee,
        total_price,
        currency: currency.to_string(),
    })
}
