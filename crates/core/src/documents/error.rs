//! Document error types.

use thiserror::Error;

use super::types::OfferStatus;

/// Errors that can occur during document operations.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Only accepted offers can become invoices.
    #[error("Only accepted offers can be converted to an invoice (offer is {status})", status = .0.as_str())]
    OfferNotAccepted(OfferStatus),
}
