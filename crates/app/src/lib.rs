//! Application services for Kontor.
//!
//! This crate wires the pure business logic in `kontor-core` to a
//! record store. Persistence itself is an external collaborator: the
//! store is a set of traits, with an in-memory implementation for the
//! demo binary and tests.
//!
//! # Modules
//!
//! - `store` - Storage traits, errors, and the in-memory store
//! - `documents` - Offer/invoice creation, editing, and conversion
//! - `billing` - Invoice status application and the paid/income coupling

pub mod billing;
pub mod documents;
pub mod store;

pub use billing::{BillingError, BillingService, InvoiceStatusOutcome};
pub use documents::{DocumentService, DocumentServiceError, NewInvoice, NewOffer};
pub use store::{InvoiceStore, MemoryStore, OfferStore, StoreError, TransactionStore};
