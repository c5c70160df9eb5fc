//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Document numbering configuration.
    #[serde(default)]
    pub numbering: NumberingConfig,
    /// Billing configuration.
    #[serde(default)]
    pub billing: BillingConfig,
}

/// Document numbering configuration.
///
/// The production data this system replaces reserved suffix 01 in every
/// sequence, so fresh sequences start at 02. That seed is configuration,
/// not a constant.
#[derive(Debug, Clone, Deserialize)]
pub struct NumberingConfig {
    /// First suffix assigned when no existing numbers match a prefix.
    #[serde(default = "default_start_at")]
    pub start_at: u32,
    /// Minimum width the numeric suffix is zero-padded to.
    #[serde(default = "default_pad_width")]
    pub pad_width: usize,
}

fn default_start_at() -> u32 {
    2
}

fn default_pad_width() -> usize {
    2
}

impl Default for NumberingConfig {
    fn default() -> Self {
        Self {
            start_at: default_start_at(),
            pad_width: default_pad_width(),
        }
    }
}

/// Billing configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BillingConfig {
    /// Default VAT percentage applied to new documents.
    ///
    /// Zero is the common case (§19 UStG small-business VAT exemption).
    #[serde(default = "default_vat_percent")]
    pub vat_percent: Decimal,
    /// Days until a newly issued invoice is due.
    #[serde(default = "default_payment_term_days")]
    pub payment_term_days: i64,
    /// Number prefix for offers (before the year context).
    #[serde(default = "default_offer_prefix")]
    pub offer_prefix: String,
    /// Number prefix for invoices (before the year context).
    #[serde(default = "default_invoice_prefix")]
    pub invoice_prefix: String,
}

fn default_vat_percent() -> Decimal {
    Decimal::ZERO
}

fn default_payment_term_days() -> i64 {
    14
}

fn default_offer_prefix() -> String {
    "AN".to_string()
}

fn default_invoice_prefix() -> String {
    "RE".to_string()
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            vat_percent: default_vat_percent(),
            payment_term_days: default_payment_term_days(),
            offer_prefix: default_offer_prefix(),
            invoice_prefix: default_invoice_prefix(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Every field has a default, so an empty environment still yields
    /// a working configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("KONTOR").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_numbering_defaults() {
        let numbering = NumberingConfig::default();
        assert_eq!(numbering.start_at, 2);
        assert_eq!(numbering.pad_width, 2);
    }

    #[test]
    fn test_billing_defaults() {
        let billing = BillingConfig::default();
        assert_eq!(billing.vat_percent, dec!(0));
        assert_eq!(billing.payment_term_days, 14);
        assert_eq!(billing.offer_prefix, "AN");
        assert_eq!(billing.invoice_prefix, "RE");
    }

    #[test]
    fn test_app_config_default_sections() {
        let config = AppConfig::default();
        assert_eq!(config.numbering.start_at, 2);
        assert_eq!(config.billing.invoice_prefix, "RE");
    }
}
