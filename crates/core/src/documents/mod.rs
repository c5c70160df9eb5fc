//! Offers and invoices: types, snapshots, and the status lifecycle.
//!
//! A document carries a denormalized price breakdown computed when it is
//! created or edited. Status changes never touch the snapshot; the one
//! coupled side effect is the paid-invoice income record.

pub mod convert;
pub mod error;
pub mod lifecycle;
pub mod types;

pub use convert::offer_to_invoice_draft;
pub use error::DocumentError;
pub use lifecycle::{InvoiceStatusAction, LifecycleService};
pub use types::{DocumentKind, Invoice, InvoiceStatus, Offer, OfferStatus};
