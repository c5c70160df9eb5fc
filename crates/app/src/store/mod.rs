//! Storage traits and errors.
//!
//! Persistence is treated as a generic record store. The traits here
//! are the seam the services work against; the only implementation in
//! this repository is [`MemoryStore`]. A real backend must report
//! duplicate document numbers as [`StoreError::Conflict`] (a unique
//! constraint on the number column) so the services can retry with a
//! freshly computed number.

pub mod memory;

use thiserror::Error;

use kontor_core::documents::{Invoice, InvoiceStatus, Offer};
use kontor_core::finance::{CreateTransactionInput, Transaction};
use kontor_shared::AppError;
use kontor_shared::types::{InvoiceId, OfferId};

pub use memory::MemoryStore;

/// Errors reported by a record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Uniqueness violation, e.g. a duplicate document number.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Backend failure.
    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Returns true if the operation may succeed when retried with
    /// fresh inputs (a conflict retried with a new number, for example).
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(msg) => Self::NotFound(msg),
            StoreError::Conflict(msg) => Self::Conflict(msg),
            StoreError::Backend(msg) => Self::Storage(msg),
        }
    }
}

/// Store operations for offers.
pub trait OfferStore {
    /// Inserts a new offer. Fails with [`StoreError::Conflict`] when
    /// the offer number is already taken.
    fn insert_offer(&mut self, offer: Offer) -> Result<(), StoreError>;

    /// Loads an offer by ID.
    fn offer(&self, id: OfferId) -> Result<Offer, StoreError>;

    /// Replaces an existing offer.
    fn update_offer(&mut self, offer: &Offer) -> Result<(), StoreError>;

    /// Returns the numbers of all stored offers with the given prefix.
    fn offer_numbers(&self, prefix: &str) -> Vec<String>;
}

/// Store operations for invoices.
pub trait InvoiceStore {
    /// Inserts a new invoice. Fails with [`StoreError::Conflict`] when
    /// the invoice number is already taken.
    fn insert_invoice(&mut self, invoice: Invoice) -> Result<(), StoreError>;

    /// Loads an invoice by ID.
    fn invoice(&self, id: InvoiceId) -> Result<Invoice, StoreError>;

    /// Replaces an existing invoice.
    fn update_invoice(&mut self, invoice: &Invoice) -> Result<(), StoreError>;

    /// Writes only the status of an invoice.
    fn update_invoice_status(
        &mut self,
        id: InvoiceId,
        status: InvoiceStatus,
    ) -> Result<(), StoreError>;

    /// Returns the numbers of all stored invoices with the given prefix.
    fn invoice_numbers(&self, prefix: &str) -> Vec<String>;

    /// Returns all stored invoices.
    fn invoices(&self) -> Vec<Invoice>;
}

/// Store operations for financial transactions.
pub trait TransactionStore {
    /// Creates a transaction record, assigning its ID.
    fn insert_transaction(
        &mut self,
        input: CreateTransactionInput,
    ) -> Result<Transaction, StoreError>;

    /// Returns all stored transactions.
    fn transactions(&self) -> Vec<Transaction>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_is_retryable() {
        assert!(StoreError::Conflict("number taken".into()).is_retryable());
        assert!(!StoreError::NotFound("gone".into()).is_retryable());
        assert!(!StoreError::Backend("io".into()).is_retryable());
    }

    #[test]
    fn test_maps_to_app_error() {
        assert_eq!(
            AppError::from(StoreError::Conflict("n".into())).error_code(),
            "CONFLICT"
        );
        assert_eq!(
            AppError::from(StoreError::NotFound("n".into())).error_code(),
            "NOT_FOUND"
        );
        assert_eq!(
            AppError::from(StoreError::Backend("n".into())).error_code(),
            "STORAGE_ERROR"
        );
    }
}
