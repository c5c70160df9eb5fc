//! Property-based tests for the quotation calculator.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::calculator::calculate;
use super::types::{Billing, LineItem, QuotationModifiers};

/// Strategy for a non-negative money-ish amount (0.00 to 100,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a percentage in 0-100 with two decimal places.
fn percent() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

/// Strategy for a single billing entry.
fn billing() -> impl Strategy<Value = Billing> {
    prop_oneof![
        (amount(), amount(), percent()).prop_map(|(hours, hourly_rate, discount_percent)| {
            Billing::Hourly {
                hours,
                hourly_rate,
                discount_percent,
            }
        }),
        amount().prop_map(|net_total| Billing::Fixed { net_total }),
    ]
}

/// Strategy for a list of line items with sequential positions.
fn line_items() -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec(billing(), 0..8).prop_map(|billings| {
        billings
            .into_iter()
            .enumerate()
            .map(|(index, billing)| LineItem {
                #[allow(clippy::cast_possible_truncation)]
                position: index as u32 + 1,
                description: format!("Position {}", index + 1),
                billing,
            })
            .collect()
    })
}

/// Strategy for arbitrary (valid-range) modifiers.
fn modifiers() -> impl Strategy<Value = QuotationModifiers> {
    (
        percent(),
        any::<bool>(),
        percent(),
        any::<bool>(),
        amount(),
        any::<bool>(),
        0u32..48,
        amount(),
        percent(),
    )
        .prop_map(
            |(
                global_discount_percent,
                express_enabled,
                express_surcharge_percent,
                hosting_enabled,
                hosting_fee,
                maintenance_enabled,
                maintenance_months,
                maintenance_monthly_fee,
                vat_percent,
            )| {
                QuotationModifiers {
                    global_discount_percent,
                    express_enabled,
                    express_surcharge_percent,
                    hosting_enabled,
                    hosting_fee,
                    maintenance_enabled,
                    maintenance_months,
                    maintenance_monthly_fee,
                    vat_percent,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For non-negative hours/rate and a 0-100 discount, an hourly item's
    /// net total matches the formula and never goes negative.
    #[test]
    fn prop_hourly_net_total_formula(
        hours in amount(),
        hourly_rate in amount(),
        discount_percent in percent(),
    ) {
        let item = LineItem {
            position: 1,
            description: "Work".to_string(),
            billing: Billing::Hourly { hours, hourly_rate, discount_percent },
        };

        let expected = hours * hourly_rate
            * (Decimal::ONE - discount_percent / Decimal::ONE_HUNDRED);
        prop_assert_eq!(item.net_total(), expected);
        prop_assert!(item.net_total() >= Decimal::ZERO);
    }

    /// With every toggle off and zero percentages, the total is exactly
    /// the positions sum.
    #[test]
    fn prop_neutral_modifiers_are_identity(items in line_items()) {
        let breakdown = calculate(&items, &QuotationModifiers::default());

        prop_assert_eq!(breakdown.total, breakdown.sum_positions);
        prop_assert_eq!(breakdown.vat_amount, Decimal::ZERO);
        prop_assert_eq!(breakdown.global_discount_amount, Decimal::ZERO);
    }

    /// The calculator is a pure function: recomputing with identical
    /// inputs yields bit-identical output.
    #[test]
    fn prop_calculate_is_deterministic(
        items in line_items(),
        modifiers in modifiers(),
    ) {
        prop_assert_eq!(
            calculate(&items, &modifiers),
            calculate(&items, &modifiers)
        );
    }

    /// VAT is applied last: total always equals the pre-VAT subtotal plus
    /// the VAT amount, and the VAT amount derives from the subtotal alone.
    #[test]
    fn prop_vat_applies_to_subtotal(
        items in line_items(),
        modifiers in modifiers(),
    ) {
        let breakdown = calculate(&items, &modifiers);

        prop_assert_eq!(
            breakdown.vat_amount,
            breakdown.subtotal_before_vat * modifiers.vat_percent / Decimal::ONE_HUNDRED
        );
        prop_assert_eq!(
            breakdown.total,
            breakdown.subtotal_before_vat + breakdown.vat_amount
        );
    }

    /// Without hourly items the effective hourly rate is exactly zero,
    /// regardless of the total.
    #[test]
    fn prop_effective_rate_zero_without_hours(
        net_totals in prop::collection::vec(amount(), 0..6),
        modifiers in modifiers(),
    ) {
        let items: Vec<LineItem> = net_totals
            .into_iter()
            .enumerate()
            .map(|(index, net_total)| LineItem {
                #[allow(clippy::cast_possible_truncation)]
                position: index as u32 + 1,
                description: format!("Position {}", index + 1),
                billing: Billing::Fixed { net_total },
            })
            .collect();

        let breakdown = calculate(&items, &modifiers);

        prop_assert_eq!(breakdown.total_hours, Decimal::ZERO);
        prop_assert_eq!(breakdown.effective_hourly_rate, Decimal::ZERO);
    }

    /// A fixed-price item contributes its amount to the positions sum
    /// unchanged, whatever the modifiers say.
    #[test]
    fn prop_fixed_amount_passes_through(
        net_total in amount(),
        modifiers in modifiers(),
    ) {
        let items = vec![LineItem {
            position: 1,
            description: "Flat".to_string(),
            billing: Billing::Fixed { net_total },
        }];

        let breakdown = calculate(&items, &modifiers);

        prop_assert_eq!(breakdown.sum_positions, net_total);
    }
}
