//! In-memory record store.
//!
//! Backs the demo binary and the integration tests. Enforces the same
//! number-uniqueness contract a database would via a unique constraint.

use std::collections::HashMap;

use kontor_core::documents::{Invoice, InvoiceStatus, Offer};
use kontor_core::finance::{CreateTransactionInput, Transaction};
use kontor_shared::types::{InvoiceId, OfferId};

use super::{InvoiceStore, OfferStore, StoreError, TransactionStore};

/// A record store held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    offers: HashMap<OfferId, Offer>,
    invoices: HashMap<InvoiceId, Invoice>,
    transactions: Vec<Transaction>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl OfferStore for MemoryStore {
    fn insert_offer(&mut self, offer: Offer) -> Result<(), StoreError> {
        if self.offers.values().any(|o| o.number == offer.number) {
            return Err(StoreError::Conflict(format!(
                "offer number {} already exists",
                offer.number
            )));
        }
        self.offers.insert(offer.id, offer);
        Ok(())
    }

    fn offer(&self, id: OfferId) -> Result<Offer, StoreError> {
        self.offers
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("offer {id}")))
    }

    fn update_offer(&mut self, offer: &Offer) -> Result<(), StoreError> {
        match self.offers.get_mut(&offer.id) {
            Some(stored) => {
                *stored = offer.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(format!("offer {}", offer.id))),
        }
    }

    fn offer_numbers(&self, prefix: &str) -> Vec<String> {
        self.offers
            .values()
            .map(|o| o.number.clone())
            .filter(|number| number.starts_with(prefix))
            .collect()
    }
}

impl InvoiceStore for MemoryStore {
    fn insert_invoice(&mut self, invoice: Invoice) -> Result<(), StoreError> {
        if self.invoices.values().any(|i| i.number == invoice.number) {
            return Err(StoreError::Conflict(format!(
                "invoice number {} already exists",
                invoice.number
            )));
        }
        self.invoices.insert(invoice.id, invoice);
        Ok(())
    }

    fn invoice(&self, id: InvoiceId) -> Result<Invoice, StoreError> {
        self.invoices
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("invoice {id}")))
    }

    fn update_invoice(&mut self, invoice: &Invoice) -> Result<(), StoreError> {
        match self.invoices.get_mut(&invoice.id) {
            Some(stored) => {
                *stored = invoice.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(format!("invoice {}", invoice.id))),
        }
    }

    fn update_invoice_status(
        &mut self,
        id: InvoiceId,
        status: InvoiceStatus,
    ) -> Result<(), StoreError> {
        match self.invoices.get_mut(&id) {
            Some(stored) => {
                stored.status = status;
                Ok(())
            }
            None => Err(StoreError::NotFound(format!("invoice {id}"))),
        }
    }

    fn invoice_numbers(&self, prefix: &str) -> Vec<String> {
        self.invoices
            .values()
            .map(|i| i.number.clone())
            .filter(|number| number.starts_with(prefix))
            .collect()
    }

    fn invoices(&self) -> Vec<Invoice> {
        self.invoices.values().cloned().collect()
    }
}

impl TransactionStore for MemoryStore {
    fn insert_transaction(
        &mut self,
        input: CreateTransactionInput,
    ) -> Result<Transaction, StoreError> {
        let transaction = Transaction::from_input(input);
        self.transactions.push(transaction.clone());
        Ok(transaction)
    }

    fn transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use kontor_core::documents::DocumentKind;
    use kontor_core::pricing::{Billing, LineItem, QuotationModifiers};
    use kontor_shared::types::ClientId;
    use rust_decimal_macros::dec;

    fn offer(number: &str) -> Offer {
        Offer::draft(
            ClientId::new(),
            number.to_string(),
            DocumentKind::It,
            vec![LineItem {
                position: 1,
                description: "Setup".to_string(),
                billing: Billing::Fixed {
                    net_total: dec!(100),
                },
            }],
            QuotationModifiers::default(),
            NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
        )
    }

    #[test]
    fn test_duplicate_offer_number_conflicts() {
        let mut store = MemoryStore::new();
        store.insert_offer(offer("AN-2026-02")).unwrap();

        let result = store.insert_offer(offer("AN-2026-02"));
        assert!(matches!(result, Err(StoreError::Conflict(_))));
    }

    #[test]
    fn test_offer_numbers_filtered_by_prefix() {
        let mut store = MemoryStore::new();
        store.insert_offer(offer("AN-2026-02")).unwrap();
        store.insert_offer(offer("AN-2025-04")).unwrap();

        let numbers = store.offer_numbers("AN-2026");
        assert_eq!(numbers, vec!["AN-2026-02".to_string()]);
    }

    #[test]
    fn test_missing_invoice_is_not_found() {
        let store = MemoryStore::new();
        let result = store.invoice(InvoiceId::new());
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }
}
