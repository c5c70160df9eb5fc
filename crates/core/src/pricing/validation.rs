//! Caller-side input validation for pricing.
//!
//! The calculator itself never checks its inputs; these functions are
//! what document-creation flows run before invoking it.

use rust_decimal::Decimal;
use thiserror::Error;

use super::types::{Billing, LineItem, QuotationModifiers};

/// Validation errors for pricing inputs.
#[derive(Debug, Error)]
pub enum PricingValidationError {
    /// Hours must not be negative.
    #[error("Hours must not be negative (position {position})")]
    NegativeHours {
        /// Position of the offending item.
        position: u32,
    },

    /// Hourly rate must not be negative.
    #[error("Hourly rate must not be negative (position {position})")]
    NegativeHourlyRate {
        /// Position of the offending item.
        position: u32,
    },

    /// Fixed amount must not be negative.
    #[error("Fixed amount must not be negative (position {position})")]
    NegativeFixedAmount {
        /// Position of the offending item.
        position: u32,
    },

    /// Line discount outside 0-100 percent.
    #[error("Line discount must be between 0 and 100 percent (position {position}, got {percent})")]
    LineDiscountOutOfRange {
        /// Position of the offending item.
        position: u32,
        /// The rejected percentage.
        percent: Decimal,
    },

    /// Positions must be sequential starting at 1.
    #[error("Positions must be sequential starting at 1 (expected {expected}, found {found})")]
    PositionOutOfSequence {
        /// The position that was expected next.
        expected: u32,
        /// The position actually found.
        found: u32,
    },

    /// Global discount outside 0-100 percent.
    #[error("Global discount must be between 0 and 100 percent (got {percent})")]
    GlobalDiscountOutOfRange {
        /// The rejected percentage.
        percent: Decimal,
    },

    /// Express surcharge must not be negative.
    #[error("Express surcharge must not be negative (got {percent})")]
    NegativeExpressSurcharge {
        /// The rejected percentage.
        percent: Decimal,
    },

    /// Hosting fee must not be negative.
    #[error("Hosting fee must not be negative")]
    NegativeHostingFee,

    /// Maintenance monthly fee must not be negative.
    #[error("Maintenance monthly fee must not be negative")]
    NegativeMaintenanceFee,

    /// VAT percent must not be negative.
    #[error("VAT percent must not be negative (got {percent})")]
    NegativeVatPercent {
        /// The rejected percentage.
        percent: Decimal,
    },
}

/// Validates line items before they reach the calculator.
///
/// # Errors
///
/// Returns an error for negative amounts, out-of-range line discounts,
/// or positions that are not 1, 2, 3, ... in order.
pub fn validate_items(items: &[LineItem]) -> Result<(), PricingValidationError> {
    for (index, item) in items.iter().enumerate() {
        let expected = u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1);
        if item.position != expected {
            return Err(PricingValidationError::PositionOutOfSequence {
                expected,
                found: item.position,
            });
        }

        match &item.billing {
            Billing::Hourly {
                hours,
                hourly_rate,
                discount_percent,
            } => {
                if *hours < Decimal::ZERO {
                    return Err(PricingValidationError::NegativeHours {
                        position: item.position,
                    });
                }
                if *hourly_rate < Decimal::ZERO {
                    return Err(PricingValidationError::NegativeHourlyRate {
                        position: item.position,
                    });
                }
                if *discount_percent < Decimal::ZERO || *discount_percent > Decimal::ONE_HUNDRED {
                    return Err(PricingValidationError::LineDiscountOutOfRange {
                        position: item.position,
                        percent: *discount_percent,
                    });
                }
            }
            Billing::Fixed { net_total } => {
                if *net_total < Decimal::ZERO {
                    return Err(PricingValidationError::NegativeFixedAmount {
                        position: item.position,
                    });
                }
            }
        }
    }

    Ok(())
}

/// Validates modifiers before they reach the calculator.
///
/// # Errors
///
/// Returns an error for negative fees/percentages or a global discount
/// outside 0-100 percent. Disabled toggles are validated too, so a bad
/// value cannot lurk behind an off switch.
pub fn validate_modifiers(modifiers: &QuotationModifiers) -> Result<(), PricingValidationError> {
    if modifiers.global_discount_percent < Decimal::ZERO
        || modifiers.global_discount_percent > Decimal::ONE_HUNDRED
    {
        return Err(PricingValidationError::GlobalDiscountOutOfRange {
            percent: modifiers.global_discount_percent,
        });
    }
    if modifiers.express_surcharge_percent < Decimal::ZERO {
        return Err(PricingValidationError::NegativeExpressSurcharge {
            percent: modifiers.express_surcharge_percent,
        });
    }
    if modifiers.hosting_fee < Decimal::ZERO {
        return Err(PricingValidationError::NegativeHostingFee);
    }
    if modifiers.maintenance_monthly_fee < Decimal::ZERO {
        return Err(PricingValidationError::NegativeMaintenanceFee);
    }
    if modifiers.vat_percent < Decimal::ZERO {
        return Err(PricingValidationError::NegativeVatPercent {
            percent: modifiers.vat_percent,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn hourly_item(position: u32, hours: Decimal, rate: Decimal, discount: Decimal) -> LineItem {
        LineItem {
            position,
            description: "Work".to_string(),
            billing: Billing::Hourly {
                hours,
                hourly_rate: rate,
                discount_percent: discount,
            },
        }
    }

    fn fixed_item(position: u32, net_total: Decimal) -> LineItem {
        LineItem {
            position,
            description: "Flat".to_string(),
            billing: Billing::Fixed { net_total },
        }
    }

    #[test]
    fn test_valid_items_pass() {
        let items = vec![
            hourly_item(1, dec!(10), dec!(85), dec!(5)),
            fixed_item(2, dec!(1200)),
        ];
        assert!(validate_items(&items).is_ok());
    }

    #[test]
    fn test_empty_items_pass() {
        assert!(validate_items(&[]).is_ok());
    }

    #[test]
    fn test_negative_hours_rejected() {
        let items = vec![hourly_item(1, dec!(-1), dec!(85), dec!(0))];
        assert!(matches!(
            validate_items(&items),
            Err(PricingValidationError::NegativeHours { position: 1 })
        ));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let items = vec![hourly_item(1, dec!(1), dec!(-85), dec!(0))];
        assert!(matches!(
            validate_items(&items),
            Err(PricingValidationError::NegativeHourlyRate { position: 1 })
        ));
    }

    #[test]
    fn test_discount_over_hundred_rejected() {
        let items = vec![hourly_item(1, dec!(1), dec!(85), dec!(101))];
        assert!(matches!(
            validate_items(&items),
            Err(PricingValidationError::LineDiscountOutOfRange { position: 1, .. })
        ));
    }

    #[test]
    fn test_boundary_discounts_accepted() {
        let items = vec![
            hourly_item(1, dec!(1), dec!(85), dec!(0)),
            hourly_item(2, dec!(1), dec!(85), dec!(100)),
        ];
        assert!(validate_items(&items).is_ok());
    }

    #[test]
    fn test_negative_fixed_amount_rejected() {
        let items = vec![fixed_item(1, dec!(-500))];
        assert!(matches!(
            validate_items(&items),
            Err(PricingValidationError::NegativeFixedAmount { position: 1 })
        ));
    }

    #[test]
    fn test_position_gap_rejected() {
        let items = vec![fixed_item(1, dec!(100)), fixed_item(3, dec!(100))];
        assert!(matches!(
            validate_items(&items),
            Err(PricingValidationError::PositionOutOfSequence {
                expected: 2,
                found: 3,
            })
        ));
    }

    #[test]
    fn test_positions_not_starting_at_one_rejected() {
        let items = vec![fixed_item(2, dec!(100))];
        assert!(matches!(
            validate_items(&items),
            Err(PricingValidationError::PositionOutOfSequence {
                expected: 1,
                found: 2,
            })
        ));
    }

    #[test]
    fn test_valid_modifiers_pass() {
        let modifiers = QuotationModifiers {
            global_discount_percent: dec!(10),
            express_enabled: true,
            express_surcharge_percent: dec!(20),
            hosting_enabled: true,
            hosting_fee: dec!(150),
            maintenance_enabled: true,
            maintenance_months: 12,
            maintenance_monthly_fee: dec!(29),
            vat_percent: dec!(19),
        };
        assert!(validate_modifiers(&modifiers).is_ok());
    }

    #[test]
    fn test_global_discount_out_of_range_rejected() {
        let modifiers = QuotationModifiers {
            global_discount_percent: dec!(120),
            ..QuotationModifiers::default()
        };
        assert!(matches!(
            validate_modifiers(&modifiers),
            Err(PricingValidationError::GlobalDiscountOutOfRange { .. })
        ));
    }

    #[test]
    fn test_disabled_toggle_still_validated() {
        let modifiers = QuotationModifiers {
            hosting_enabled: false,
            hosting_fee: dec!(-1),
            ..QuotationModifiers::default()
        };
        assert!(matches!(
            validate_modifiers(&modifiers),
            Err(PricingValidationError::NegativeHostingFee)
        ));
    }

    #[test]
    fn test_negative_vat_rejected() {
        let modifiers = QuotationModifiers {
            vat_percent: dec!(-19),
            ..QuotationModifiers::default()
        };
        assert!(matches!(
            validate_modifiers(&modifiers),
            Err(PricingValidationError::NegativeVatPercent { .. })
        ));
    }
}
