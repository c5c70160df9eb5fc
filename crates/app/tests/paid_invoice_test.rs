//! The paid-invoice income coupling and the overdue sweep.

mod common;

use common::{date, new_invoice, service};
use rust_decimal_macros::dec;

use kontor_app::{
    BillingError, BillingService, InvoiceStore, MemoryStore, StoreError, TransactionStore,
};
use kontor_core::documents::InvoiceStatus;
use kontor_core::finance::{CreateTransactionInput, Transaction};
use kontor_shared::AppError;
use kontor_shared::types::ClientId;

/// A transaction store that refuses every insert.
struct FailingTransactionStore;

impl TransactionStore for FailingTransactionStore {
    fn insert_transaction(
        &mut self,
        _input: CreateTransactionInput,
    ) -> Result<Transaction, StoreError> {
        Err(StoreError::Backend("disk full".to_string()))
    }

    fn transactions(&self) -> Vec<Transaction> {
        Vec::new()
    }
}

#[test]
fn test_failed_income_record_rolls_back_status() {
    let mut store = MemoryStore::new();
    let service = service();

    let invoice = service
        .create_invoice(
            &mut store,
            new_invoice(ClientId::new(), dec!(1200), date(2026, 5, 1)),
        )
        .unwrap();

    BillingService::set_invoice_status(
        &mut store,
        &mut MemoryStore::new(),
        invoice.id,
        InvoiceStatus::Sent,
        date(2026, 5, 2),
    )
    .unwrap();

    let mut failing = FailingTransactionStore;
    let err = BillingService::set_invoice_status(
        &mut store,
        &mut failing,
        invoice.id,
        InvoiceStatus::Paid,
        date(2026, 5, 10),
    )
    .unwrap_err();

    match &err {
        BillingError::IncomeRecordingFailed {
            invoice: number,
            rolled_back,
            ..
        } => {
            assert_eq!(number, &invoice.number);
            assert!(*rolled_back);
        }
        other => panic!("expected income failure, got {other:?}"),
    }

    // The invoice must not rest in paid with no recorded income.
    assert_eq!(
        store.invoice(invoice.id).unwrap().status,
        InvoiceStatus::Sent
    );
    assert_eq!(AppError::from(err).error_code(), "PARTIAL_FAILURE");
}

#[test]
fn test_plain_transitions_do_not_touch_the_books() {
    let mut store = MemoryStore::new();
    let service = service();

    let invoice = service
        .create_invoice(
            &mut store,
            new_invoice(ClientId::new(), dec!(600), date(2026, 5, 1)),
        )
        .unwrap();

    // A failing transaction store is harmless for non-paid transitions.
    let mut failing = FailingTransactionStore;
    for status in [
        InvoiceStatus::Sent,
        InvoiceStatus::Overdue,
        InvoiceStatus::Cancelled,
        InvoiceStatus::Draft,
    ] {
        let outcome = BillingService::set_invoice_status(
            &mut store,
            &mut failing,
            invoice.id,
            status,
            date(2026, 5, 2),
        )
        .unwrap();
        assert!(outcome.income.is_none());
        assert_eq!(store.invoice(invoice.id).unwrap().status, status);
    }
}

#[test]
fn test_overdue_sweep_flips_only_sent_past_due() {
    let mut store = MemoryStore::new();
    let service = service();
    let client_id = ClientId::new();
    let mut transactions = MemoryStore::new();

    // Due 2026-05-15 under the default 14-day term.
    let past_due = service
        .create_invoice(&mut store, new_invoice(client_id, dec!(100), date(2026, 5, 1)))
        .unwrap();
    let not_due = service
        .create_invoice(&mut store, new_invoice(client_id, dec!(200), date(2026, 5, 20)))
        .unwrap();
    let draft = service
        .create_invoice(&mut store, new_invoice(client_id, dec!(300), date(2026, 5, 1)))
        .unwrap();
    let paid = service
        .create_invoice(&mut store, new_invoice(client_id, dec!(400), date(2026, 5, 1)))
        .unwrap();

    let today = date(2026, 5, 25);
    for id in [past_due.id, not_due.id] {
        BillingService::set_invoice_status(&mut store, &mut transactions, id, InvoiceStatus::Sent, today)
            .unwrap();
    }
    BillingService::set_invoice_status(&mut store, &mut transactions, paid.id, InvoiceStatus::Paid, today)
        .unwrap();

    let flipped = BillingService::refresh_overdue(&mut store, today).unwrap();

    assert_eq!(flipped, vec![past_due.id]);
    assert_eq!(
        store.invoice(past_due.id).unwrap().status,
        InvoiceStatus::Overdue
    );
    assert_eq!(store.invoice(not_due.id).unwrap().status, InvoiceStatus::Sent);
    assert_eq!(store.invoice(draft.id).unwrap().status, InvoiceStatus::Draft);
    assert_eq!(store.invoice(paid.id).unwrap().status, InvoiceStatus::Paid);
}
