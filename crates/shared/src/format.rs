//! Locale-aware display formatting for money and decimal values.
//!
//! All business math stays in `rust_decimal`; rounding happens here,
//! at display time, and nowhere earlier. German convention: dot as
//! thousands separator, comma as decimal separator, trailing currency
//! symbol ("1.234,56 €").

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as a German-locale Euro string, e.g. `"1.234,56 €"`.
///
/// Rounds to two fraction digits, half away from zero.
#[must_use]
pub fn format_eur(amount: Decimal) -> String {
    format!("{} €", format_decimal(amount, 2))
}

/// Formats a decimal with German grouping and separator conventions.
///
/// Rounds to `places` fraction digits, half away from zero. `places`
/// of zero yields a bare grouped integer ("1.234").
#[must_use]
pub fn format_decimal(amount: Decimal, places: u32) -> String {
    let rounded = amount
        .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (text, String::new()),
    };

    let grouped = group_thousands(&int_part);

    if places == 0 {
        return format!("{sign}{grouped}");
    }

    let width = usize::try_from(places).unwrap_or(usize::MAX);
    let mut frac = frac_part;
    while frac.len() < width {
        frac.push('0');
    }

    format!("{sign}{grouped},{frac}")
}

/// Inserts a dot between every group of three digits, right to left.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), "0,00 €")]
    #[case(dec!(7.5), "7,50 €")]
    #[case(dec!(1234.5), "1.234,50 €")]
    #[case(dec!(1234567), "1.234.567,00 €")]
    #[case(dec!(-9876543.21), "-9.876.543,21 €")]
    fn test_format_eur(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_eur(amount), expected);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(format_eur(dec!(0.005)), "0,01 €");
        assert_eq!(format_eur(dec!(-0.005)), "-0,01 €");
        assert_eq!(format_eur(dec!(2.675)), "2,68 €");
    }

    #[test]
    fn test_negative_rounding_to_zero_drops_sign() {
        assert_eq!(format_eur(dec!(-0.001)), "0,00 €");
    }

    #[test]
    fn test_format_decimal_places() {
        assert_eq!(format_decimal(dec!(1234.5678), 3), "1.234,568");
        assert_eq!(format_decimal(dec!(1234.5678), 0), "1.235");
        assert_eq!(format_decimal(dec!(12), 1), "12,0");
    }

    #[test]
    fn test_grouping_boundaries() {
        assert_eq!(format_decimal(dec!(999), 0), "999");
        assert_eq!(format_decimal(dec!(1000), 0), "1.000");
        assert_eq!(format_decimal(dec!(100000), 0), "100.000");
    }
}
