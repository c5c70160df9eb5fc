//! Document creation, editing, and conversion.
//!
//! Number assignment is a read-compute-insert sequence and therefore
//! racy; the store's unique constraint is the backstop. On conflict the
//! service recomputes a fresh number and retries, never the same number
//! twice.

use chrono::{Datelike, Duration, NaiveDate};
use thiserror::Error;
use tracing::{info, warn};

use kontor_core::documents::{
    DocumentError, DocumentKind, Invoice, Offer, offer_to_invoice_draft,
};
use kontor_core::numbering::{next_number, yearly_prefix};
use kontor_core::pricing::{
    LineItem, PricingValidationError, QuotationModifiers, validate_items, validate_modifiers,
};
use kontor_shared::types::{ClientId, InvoiceId, OfferId};
use kontor_shared::{AppConfig, AppError};

use crate::store::{InvoiceStore, OfferStore, StoreError};

/// Attempts before number assignment gives up.
const MAX_NUMBER_ATTEMPTS: u32 = 3;

/// Errors from document service operations.
#[derive(Debug, Error)]
pub enum DocumentServiceError {
    /// Pricing inputs failed validation.
    #[error(transparent)]
    Validation(#[from] PricingValidationError),

    /// A document rule was violated.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Every computed number collided with a concurrent insert.
    #[error("Could not assign a unique document number after {attempts} attempts")]
    NumberAssignmentExhausted {
        /// How many numbers were tried.
        attempts: u32,
    },

    /// The store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<DocumentServiceError> for AppError {
    fn from(err: DocumentServiceError) -> Self {
        match err {
            DocumentServiceError::Validation(e) => Self::Validation(e.to_string()),
            DocumentServiceError::Document(e) => Self::BusinessRule(e.to_string()),
            DocumentServiceError::NumberAssignmentExhausted { .. } => {
                Self::Conflict(err.to_string())
            }
            DocumentServiceError::Store(e) => e.into(),
        }
    }
}

/// Input for creating an offer.
#[derive(Debug, Clone)]
pub struct NewOffer {
    /// The client the offer is addressed to.
    pub client_id: ClientId,
    /// Billing shape.
    pub kind: DocumentKind,
    /// The positions.
    pub items: Vec<LineItem>,
    /// Global modifiers.
    pub modifiers: QuotationModifiers,
    /// Issue date; also selects the numbering year context.
    pub issued_on: NaiveDate,
}

/// Input for creating an invoice.
#[derive(Debug, Clone)]
pub struct NewInvoice {
    /// The client being billed.
    pub client_id: ClientId,
    /// Billing shape.
    pub kind: DocumentKind,
    /// The positions.
    pub items: Vec<LineItem>,
    /// Global modifiers.
    pub modifiers: QuotationModifiers,
    /// Issue date; also selects the numbering year context.
    pub issued_on: NaiveDate,
    /// Due date; defaults to the configured payment term when `None`.
    pub due_on: Option<NaiveDate>,
}

/// Service for offer and invoice persistence flows.
pub struct DocumentService {
    config: AppConfig,
}

impl DocumentService {
    /// Creates a service with the given configuration.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Validates inputs, computes the breakdown snapshot, assigns a
    /// number, and inserts a draft offer.
    ///
    /// # Errors
    ///
    /// Returns validation errors, store errors, or
    /// [`DocumentServiceError::NumberAssignmentExhausted`] when every
    /// retry collided.
    pub fn create_offer(
        &self,
        store: &mut impl OfferStore,
        input: NewOffer,
    ) -> Result<Offer, DocumentServiceError> {
        validate_items(&input.items)?;
        validate_modifiers(&input.modifiers)?;

        let prefix = yearly_prefix(&self.config.billing.offer_prefix, input.issued_on.year());

        for attempt in 1..=MAX_NUMBER_ATTEMPTS {
            let number = next_number(
                &store.offer_numbers(&prefix),
                &prefix,
                &self.config.numbering,
            );
            let offer = Offer::draft(
                input.client_id,
                number.clone(),
                input.kind,
                input.items.clone(),
                input.modifiers.clone(),
                input.issued_on,
            );

            match store.insert_offer(offer.clone()) {
                Ok(()) => {
                    info!(number = %offer.number, total = %offer.breakdown.total, "Offer created");
                    return Ok(offer);
                }
                Err(StoreError::Conflict(_)) => {
                    warn!(number = %number, attempt, "Offer number taken, retrying with a fresh number");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(DocumentServiceError::NumberAssignmentExhausted {
            attempts: MAX_NUMBER_ATTEMPTS,
        })
    }

    /// Validates inputs, computes the breakdown snapshot, assigns a
    /// number, and inserts a draft invoice.
    ///
    /// # Errors
    ///
    /// Returns validation errors, store errors, or
    /// [`DocumentServiceError::NumberAssignmentExhausted`] when every
    /// retry collided.
    pub fn create_invoice(
        &self,
        store: &mut impl InvoiceStore,
        input: NewInvoice,
    ) -> Result<Invoice, DocumentServiceError> {
        validate_items(&input.items)?;
        validate_modifiers(&input.modifiers)?;

        let prefix = yearly_prefix(&self.config.billing.invoice_prefix, input.issued_on.year());
        let due_on = input
            .due_on
            .unwrap_or_else(|| input.issued_on + Duration::days(self.config.billing.payment_term_days));

        for attempt in 1..=MAX_NUMBER_ATTEMPTS {
            let number = next_number(
                &store.invoice_numbers(&prefix),
                &prefix,
                &self.config.numbering,
            );
            let invoice = Invoice::draft(
                input.client_id,
                number.clone(),
                input.kind,
                input.items.clone(),
                input.modifiers.clone(),
                input.issued_on,
                due_on,
            );

            match store.insert_invoice(invoice.clone()) {
                Ok(()) => {
                    info!(number = %invoice.number, total = %invoice.breakdown.total, "Invoice created");
                    return Ok(invoice);
                }
                Err(StoreError::Conflict(_)) => {
                    warn!(number = %number, attempt, "Invoice number taken, retrying with a fresh number");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(DocumentServiceError::NumberAssignmentExhausted {
            attempts: MAX_NUMBER_ATTEMPTS,
        })
    }

    /// Replaces an offer's items and modifiers, recomputing its
    /// breakdown snapshot. This is the explicit recalculation action;
    /// nothing else rewrites a stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns validation or store errors.
    pub fn update_offer_contents(
        &self,
        store: &mut impl OfferStore,
        id: OfferId,
        items: Vec<LineItem>,
        modifiers: QuotationModifiers,
    ) -> Result<Offer, DocumentServiceError> {
        validate_items(&items)?;
        validate_modifiers(&modifiers)?;

        let mut offer = store.offer(id)?;
        offer.replace_contents(items, modifiers);
        store.update_offer(&offer)?;
        info!(number = %offer.number, total = %offer.breakdown.total, "Offer recalculated");
        Ok(offer)
    }

    /// Replaces an invoice's items and modifiers, recomputing its
    /// breakdown snapshot.
    ///
    /// # Errors
    ///
    /// Returns validation or store errors.
    pub fn update_invoice_contents(
        &self,
        store: &mut impl InvoiceStore,
        id: InvoiceId,
        items: Vec<LineItem>,
        modifiers: QuotationModifiers,
    ) -> Result<Invoice, DocumentServiceError> {
        validate_items(&items)?;
        validate_modifiers(&modifiers)?;

        let mut invoice = store.invoice(id)?;
        invoice.replace_contents(items, modifiers);
        store.update_invoice(&invoice)?;
        info!(number = %invoice.number, total = %invoice.breakdown.total, "Invoice recalculated");
        Ok(invoice)
    }

    /// Converts an accepted offer into a draft invoice with a fresh
    /// invoice number and the configured payment term.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::OfferNotAccepted`] via
    /// [`DocumentServiceError::Document`] unless the offer is accepted,
    /// plus the usual numbering/store errors.
    pub fn convert_offer_to_invoice<S>(
        &self,
        store: &mut S,
        offer_id: OfferId,
        today: NaiveDate,
    ) -> Result<Invoice, DocumentServiceError>
    where
        S: OfferStore + InvoiceStore,
    {
        let offer = store.offer(offer_id)?;
        let due_on = today + Duration::days(self.config.billing.payment_term_days);
        let prefix = yearly_prefix(&self.config.billing.invoice_prefix, today.year());

        for attempt in 1..=MAX_NUMBER_ATTEMPTS {
            let number = next_number(
                &store.invoice_numbers(&prefix),
                &prefix,
                &self.config.numbering,
            );
            let invoice = offer_to_invoice_draft(&offer, number.clone(), today, due_on)?;

            match store.insert_invoice(invoice.clone()) {
                Ok(()) => {
                    info!(
                        offer = %offer.number,
                        invoice = %invoice.number,
                        "Offer converted to invoice"
                    );
                    return Ok(invoice);
                }
                Err(StoreError::Conflict(_)) => {
                    warn!(number = %number, attempt, "Invoice number taken, retrying with a fresh number");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(DocumentServiceError::NumberAssignmentExhausted {
            attempts: MAX_NUMBER_ATTEMPTS,
        })
    }
}
