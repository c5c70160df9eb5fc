//! Pricing domain types for quotation calculation.
//!
//! This module defines the inputs (line items, modifiers) and the output
//! (breakdown) of the quotation calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a line item is billed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Billing {
    /// IT-style billing: hours times hourly rate, with a per-line discount.
    Hourly {
        /// Hours worked or estimated.
        hours: Decimal,
        /// Rate per hour.
        hourly_rate: Decimal,
        /// Per-line discount in percent (0-100).
        discount_percent: Decimal,
    },
    /// Construction-style billing: a flat negotiated amount.
    ///
    /// The supplied amount is final. The calculator never applies a
    /// discount to it.
    Fixed {
        /// The final net amount for this line.
        net_total: Decimal,
    },
}

/// A single position on an offer or invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// 1-based ordinal, sequential without gaps.
    pub position: u32,
    /// What the position covers.
    pub description: String,
    /// How the position is billed.
    pub billing: Billing,
}

impl LineItem {
    /// Returns the net total this item contributes to the positions sum.
    #[must_use]
    pub fn net_total(&self) -> Decimal {
        match &self.billing {
            Billing::Hourly {
                hours,
                hourly_rate,
                discount_percent,
            } => *hours * *hourly_rate * (Decimal::ONE - *discount_percent / Decimal::ONE_HUNDRED),
            Billing::Fixed { net_total } => *net_total,
        }
    }

    /// Returns the hours this item contributes. Fixed-price items contribute zero.
    #[must_use]
    pub fn hours(&self) -> Decimal {
        match &self.billing {
            Billing::Hourly { hours, .. } => *hours,
            Billing::Fixed { .. } => Decimal::ZERO,
        }
    }
}

/// Global modifiers applied on top of the line item sum.
///
/// The default has every toggle off and all percentages at zero, which
/// leaves the positions sum unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotationModifiers {
    /// Discount in percent (0-100), applied to the sum of all positions.
    pub global_discount_percent: Decimal,
    /// Whether the express surcharge applies.
    pub express_enabled: bool,
    /// Express surcharge in percent, computed on the post-discount base.
    pub express_surcharge_percent: Decimal,
    /// Whether the flat hosting fee applies.
    pub hosting_enabled: bool,
    /// Flat hosting fee (not a percentage).
    pub hosting_fee: Decimal,
    /// Whether the maintenance subscription applies.
    pub maintenance_enabled: bool,
    /// Number of maintenance months.
    pub maintenance_months: u32,
    /// Fee per maintenance month.
    pub maintenance_monthly_fee: Decimal,
    /// VAT in percent, applied last to the sum of all prior stages.
    pub vat_percent: Decimal,
}

/// The full price breakdown produced by the calculator.
///
/// All fields are derived. When a document is saved, the breakdown is
/// persisted as a snapshot alongside its inputs; it is never recomputed
/// implicitly from current rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotationBreakdown {
    /// Sum of all line item net totals.
    pub sum_positions: Decimal,
    /// Amount removed by the global discount.
    pub global_discount_amount: Decimal,
    /// Positions sum minus the global discount.
    pub after_global_discount: Decimal,
    /// Amount added by the express surcharge.
    pub express_surcharge_amount: Decimal,
    /// Post-discount base plus the express surcharge.
    pub after_express: Decimal,
    /// Flat hosting fee, zero when disabled.
    pub hosting_total: Decimal,
    /// Maintenance months times monthly fee, zero when disabled.
    pub maintenance_total: Decimal,
    /// Sum of all stages before VAT.
    pub subtotal_before_vat: Decimal,
    /// VAT computed on the subtotal.
    pub vat_amount: Decimal,
    /// Final total including VAT.
    pub total: Decimal,
    /// Sum of hours across hourly items only.
    pub total_hours: Decimal,
    /// Total divided by total hours; zero when there are no hours.
    pub effective_hourly_rate: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_hourly_net_total_applies_discount() {
        let item = LineItem {
            position: 1,
            description: "Backend development".to_string(),
            billing: Billing::Hourly {
                hours: dec!(10),
                hourly_rate: dec!(90),
                discount_percent: dec!(10),
            },
        };
        assert_eq!(item.net_total(), dec!(810));
        assert_eq!(item.hours(), dec!(10));
    }

    #[test]
    fn test_fixed_net_total_is_final() {
        let item = LineItem {
            position: 1,
            description: "Rohbau".to_string(),
            billing: Billing::Fixed {
                net_total: dec!(5000),
            },
        };
        assert_eq!(item.net_total(), dec!(5000));
        assert_eq!(item.hours(), dec!(0));
    }

    #[test]
    fn test_discount_over_hundred_goes_negative() {
        // Accepted mathematically; rejecting it is the caller's job.
        let item = LineItem {
            position: 1,
            description: "Support".to_string(),
            billing: Billing::Hourly {
                hours: dec!(2),
                hourly_rate: dec!(100),
                discount_percent: dec!(150),
            },
        };
        assert_eq!(item.net_total(), dec!(-100));
    }

    #[test]
    fn test_default_modifiers_are_neutral() {
        let modifiers = QuotationModifiers::default();
        assert_eq!(modifiers.global_discount_percent, dec!(0));
        assert!(!modifiers.express_enabled);
        assert!(!modifiers.hosting_enabled);
        assert!(!modifiers.maintenance_enabled);
        assert_eq!(modifiers.vat_percent, dec!(0));
    }
}
