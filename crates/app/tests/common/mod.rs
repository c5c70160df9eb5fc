//! Shared helpers for the integration tests.
#![allow(dead_code)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use kontor_app::{DocumentService, NewInvoice, NewOffer};
use kontor_core::documents::DocumentKind;
use kontor_core::pricing::{Billing, LineItem, QuotationModifiers};
use kontor_shared::AppConfig;
use kontor_shared::types::ClientId;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn service() -> DocumentService {
    DocumentService::new(AppConfig::default())
}

pub fn hourly_item(position: u32, hours: Decimal, rate: Decimal) -> LineItem {
    LineItem {
        position,
        description: format!("Position {position}"),
        billing: Billing::Hourly {
            hours,
            hourly_rate: rate,
            discount_percent: dec!(0),
        },
    }
}

pub fn fixed_item(position: u32, net_total: Decimal) -> LineItem {
    LineItem {
        position,
        description: format!("Position {position}"),
        billing: Billing::Fixed { net_total },
    }
}

pub fn new_offer(client_id: ClientId, issued_on: NaiveDate) -> NewOffer {
    NewOffer {
        client_id,
        kind: DocumentKind::It,
        items: vec![hourly_item(1, dec!(10), dec!(100))],
        modifiers: QuotationModifiers::default(),
        issued_on,
    }
}

pub fn new_invoice(client_id: ClientId, total: Decimal, issued_on: NaiveDate) -> NewInvoice {
    NewInvoice {
        client_id,
        kind: DocumentKind::Bau,
        items: vec![fixed_item(1, total)],
        modifiers: QuotationModifiers::default(),
        issued_on,
        due_on: None,
    }
}
