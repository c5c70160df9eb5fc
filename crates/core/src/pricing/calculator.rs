//! The quotation calculator.
//!
//! CRITICAL: the stage order below is a contract, not an implementation
//! detail. The express surcharge compounds on the post-discount base,
//! and VAT applies last; reordering changes totals.
//!
//! All arithmetic stays in `Decimal` at full precision. Rounding happens
//! only at display formatting, never here.

use rust_decimal::Decimal;

use super::types::{LineItem, QuotationBreakdown, QuotationModifiers};

/// Computes the full price breakdown for a set of line items and modifiers.
///
/// Pure and deterministic: no I/O, no hidden state, bit-identical output
/// for identical inputs.
///
/// Inputs are not validated here. Negative amounts and out-of-range
/// percentages flow through the arithmetic unchanged; rejecting them is
/// the caller's job (see [`super::validation`]).
#[must_use]
pub fn calculate(items: &[LineItem], modifiers: &QuotationModifiers) -> QuotationBreakdown {
    let sum_positions: Decimal = items.iter().map(LineItem::net_total).sum();

    let global_discount_amount =
        sum_positions * modifiers.global_discount_percent / Decimal::ONE_HUNDRED;
    let after_global_discount = sum_positions - global_discount_amount;

    // Surcharge base is the discounted sum, not the raw positions sum.
    let express_surcharge_amount = if modifiers.express_enabled {
        after_global_discount * modifiers.express_surcharge_percent / Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    let after_express = after_global_discount + express_surcharge_amount;

    let hosting_total = if modifiers.hosting_enabled {
        modifiers.hosting_fee
    } else {
        Decimal::ZERO
    };

    let maintenance_total = if modifiers.maintenance_enabled {
        Decimal::from(modifiers.maintenance_months) * modifiers.maintenance_monthly_fee
    } else {
        Decimal::ZERO
    };

    let subtotal_before_vat = after_express + hosting_total + maintenance_total;

    let vat_amount = subtotal_before_vat * modifiers.vat_percent / Decimal::ONE_HUNDRED;
    let total = subtotal_before_vat + vat_amount;

    let total_hours: Decimal = items.iter().map(LineItem::hours).sum();
    let effective_hourly_rate = if total_hours > Decimal::ZERO {
        total / total_hours
    } else {
        Decimal::ZERO
    };

    QuotationBreakdown {
        sum_positions,
        global_discount_amount,
        after_global_discount,
        express_surcharge_amount,
        after_express,
        hosting_total,
        maintenance_total,
        subtotal_before_vat,
        vat_amount,
        total,
        total_hours,
        effective_hourly_rate,
    }
}
