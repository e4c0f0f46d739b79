// Copyright (c) 2024 Botho Foundation

//! Property-based tests for tier classification and fee computation.
//!
//! These check the pricing laws for all inputs, not just the fixed
//! marketplace scenarios.

use proptest::prelude::*;
use tier_pricing::{compute_fee_breakdown, round2, Decimal, Tier, TierLevel, TierTable};

/// Any non-negative price, at any scale a `Decimal` supports.
fn price() -> impl Strategy<Value = (i64, u32)> {
    (0i64..=i64::MAX, 0u32..=28)
}

fn to_decimal((mantissa, scale): (i64, u32)) -> Decimal {
    Decimal::new(mantissa, scale)
}

/// `numerator / denominator` rounded half-up, for non-negative operands.
fn round_half_up(numerator: i128, denominator: i128) -> i128 {
    (2 * numerator + denominator) / (2 * denominator)
}

/// Fee and total in cents, computed exactly with integers.
fn exact_cents((mantissa, scale): (i64, u32)) -> (i128, i128) {
    let unit = 10i128.pow(scale);
    let fee = round_half_up(mantissa as i128 * 10, unit);
    let base = round_half_up(mantissa as i128 * 100, unit);
    (fee, base + fee)
}

/// A valid table with `widths.len() + 1` tiers starting at `floor`.
fn table_from_widths(floor: u64, widths: &[u64]) -> TierTable {
    let mut tiers = Vec::with_capacity(widths.len() + 1);
    let mut min = floor;
    for (level, width) in (1u32..).zip(widths) {
        let max = min + width;
        tiers.push(Tier::new(level, "", "", Decimal::ONE, min, Some(max)));
        min = max + 1;
    }
    tiers.push(Tier::new(widths.len() as u32 + 1, "", "", Decimal::ONE, min, None));
    TierTable::new(tiers).expect("generated table must be valid")
}

// ============================================================================
// Tier Classification Properties
// ============================================================================

proptest! {
    /// Property: every non-negative count classifies into a level the table has.
    #[test]
    fn prop_classification_is_total(count in 0i64..=i64::MAX) {
        let table = TierTable::standard();
        let level = table.tier_for_subscribers(count).unwrap();

        prop_assert!(table.tier_metadata(level).is_some());
    }

    /// Property: more subscribers never means a lower tier.
    #[test]
    fn prop_classification_is_monotonic(a in 0i64..10_000_000, b in 0i64..10_000_000) {
        let table = TierTable::standard();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        prop_assert!(
            table.tier_for_subscribers(low).unwrap() <= table.tier_for_subscribers(high).unwrap()
        );
    }

    /// Property: the tier returned for a count at or above the floor contains it.
    #[test]
    fn prop_classified_tier_contains_count(count in 30_000i64..10_000_000) {
        let table = TierTable::standard();
        let tier = table.pricing_for_subscribers(count).unwrap();

        prop_assert!(tier.contains(count as u64));
    }

    /// Property: in any valid table, a tier's maximum belongs to it and the
    /// next count belongs to the next tier.
    #[test]
    fn prop_boundary_law_for_generated_tables(
        floor in 0u64..1_000_000,
        widths in prop::collection::vec(0u64..1_000_000, 0..12),
    ) {
        let table = table_from_widths(floor, &widths);

        for tier in table.iter() {
            if let Some(max) = tier.max_subscribers {
                let max = max as i64;
                prop_assert_eq!(table.tier_for_subscribers(max).unwrap(), tier.level);
                prop_assert_eq!(table.tier_for_subscribers(max + 1).unwrap(), tier.level.next());
            }
        }
        prop_assert_eq!(table.tier_for_subscribers(0).unwrap(), TierLevel::FIRST);
    }

    /// Property: negative counts are always rejected.
    #[test]
    fn prop_negative_counts_rejected(count in i64::MIN..0) {
        let table = TierTable::standard();
        prop_assert!(table.tier_for_subscribers(count).is_err());
    }
}

// ============================================================================
// Fee Properties
// ============================================================================

proptest! {
    /// Property: the fee is round2(base × 10%) and the total is
    /// round2(base + fee), both computed without intermediate rounding.
    #[test]
    fn prop_fee_and_total_match_exact_arithmetic(raw in price()) {
        let breakdown = compute_fee_breakdown(to_decimal(raw), "USD").unwrap();
        let (fee_cents, total_cents) = exact_cents(raw);

        prop_assert_eq!(breakdown.platform_fee, Decimal::from_i128_with_scale(fee_cents, 2));
        prop_assert_eq!(breakdown.total_price, Decimal::from_i128_with_scale(total_cents, 2));
    }

    /// Property: the total agrees with the decimal rounding helper.
    #[test]
    fn prop_total_derived_from_rounded_fee(raw in price()) {
        let base = to_decimal(raw);
        let breakdown = compute_fee_breakdown(base, "USD").unwrap();

        prop_assert_eq!(breakdown.total_price, round2(base + breakdown.platform_fee));
    }

    /// Property: a higher price never yields a lower total.
    #[test]
    fn prop_total_is_monotonic(a in price(), b in price()) {
        let (a, b) = (to_decimal(a), to_decimal(b));
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_total = compute_fee_breakdown(low, "USD").unwrap().total_price;
        let high_total = compute_fee_breakdown(high, "USD").unwrap().total_price;

        prop_assert!(low_total <= high_total);
    }

    /// Property: for whole-cent prices, fee and base add up to the total exactly.
    #[test]
    fn prop_cent_prices_add_up(cents in 0i64..1_000_000_000) {
        let base = Decimal::new(cents, 2);
        let breakdown = compute_fee_breakdown(base, "USD").unwrap();

        prop_assert_eq!(breakdown.base_price + breakdown.platform_fee, breakdown.total_price);
    }

    /// Property: results are deterministic.
    #[test]
    fn prop_fee_is_deterministic(raw in price()) {
        let base = to_decimal(raw);
        prop_assert_eq!(
            compute_fee_breakdown(base, "USD").unwrap(),
            compute_fee_breakdown(base, "USD").unwrap()
        );
    }
}
