//! Invoice status application and the paid/income coupling.
//!
//! The in-memory store cannot make the status write and the income
//! insert atomic, so the service compensates: if the income record
//! cannot be created, the status write is rolled back and a partial
//! failure is surfaced. An invoice must never rest in `paid` with no
//! recorded income.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{error, info};

use kontor_core::documents::{InvoiceStatus, InvoiceStatusAction, LifecycleService};
use kontor_core::finance::Transaction;
use kontor_shared::AppError;
use kontor_shared::types::InvoiceId;

use crate::store::{InvoiceStore, StoreError, TransactionStore};

/// Errors from billing operations.
#[derive(Debug, Error)]
pub enum BillingError {
    /// The income record for a paid invoice could not be created.
    ///
    /// The status change is not complete. `rolled_back` reports whether
    /// the compensating status write succeeded; when false the store
    /// holds a paid invoice with no recorded income and needs repair.
    #[error(
        "Income for invoice {invoice} could not be recorded (status rolled back: {rolled_back}): {source}"
    )]
    IncomeRecordingFailed {
        /// Number of the affected invoice.
        invoice: String,
        /// Whether the status was restored to its previous value.
        rolled_back: bool,
        /// The underlying store failure.
        #[source]
        source: StoreError,
    },

    /// The store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<BillingError> for AppError {
    fn from(err: BillingError) -> Self {
        match err {
            BillingError::IncomeRecordingFailed { .. } => Self::PartialFailure(err.to_string()),
            BillingError::Store(e) => e.into(),
        }
    }
}

/// The result of applying an invoice status change.
#[derive(Debug, Clone)]
pub struct InvoiceStatusOutcome {
    /// The status now persisted on the invoice.
    pub new_status: InvoiceStatus,
    /// The income transaction booked by a paid transition, if any.
    pub income: Option<Transaction>,
}

/// Service for invoice status changes.
pub struct BillingService;

impl BillingService {
    /// Applies a status change to a stored invoice.
    ///
    /// Moving to `Paid` additionally books an income transaction for
    /// the invoice's payable amount (partial amount when flagged). The
    /// status write and the income insert land together or not at all:
    /// on insert failure the status is rolled back and
    /// [`BillingError::IncomeRecordingFailed`] is returned.
    ///
    /// # Errors
    ///
    /// Returns store errors, or the partial-failure error described
    /// above.
    pub fn set_invoice_status<S, T>(
        invoices: &mut S,
        transactions: &mut T,
        invoice_id: InvoiceId,
        new_status: InvoiceStatus,
        today: NaiveDate,
    ) -> Result<InvoiceStatusOutcome, BillingError>
    where
        S: InvoiceStore,
        T: TransactionStore,
    {
        let invoice = invoices.invoice(invoice_id)?;
        let previous = invoice.status;

        match LifecycleService::set_invoice_status(&invoice, new_status, today) {
            InvoiceStatusAction::Plain { new_status } => {
                invoices.update_invoice_status(invoice_id, new_status)?;
                info!(
                    number = %invoice.number,
                    from = previous.as_str(),
                    to = new_status.as_str(),
                    "Invoice status changed"
                );
                Ok(InvoiceStatusOutcome {
                    new_status,
                    income: None,
                })
            }
            InvoiceStatusAction::Paid { new_status, income } => {
                invoices.update_invoice_status(invoice_id, new_status)?;
                match transactions.insert_transaction(income) {
                    Ok(transaction) => {
                        info!(
                            number = %invoice.number,
                            amount = %transaction.amount,
                            "Invoice paid, income booked"
                        );
                        Ok(InvoiceStatusOutcome {
                            new_status,
                            income: Some(transaction),
                        })
                    }
                    Err(source) => {
                        let rolled_back = invoices
                            .update_invoice_status(invoice_id, previous)
                            .is_ok();
                        error!(
                            number = %invoice.number,
                            rolled_back,
                            "Income record failed, paid status not applied"
                        );
                        Err(BillingError::IncomeRecordingFailed {
                            invoice: invoice.number,
                            rolled_back,
                            source,
                        })
                    }
                }
            }
        }
    }

    /// Moves every sent invoice past its due date to `Overdue`.
    ///
    /// Returns the IDs of the invoices that were flipped.
    ///
    /// # Errors
    ///
    /// Returns the first store error encountered.
    pub fn refresh_overdue(
        invoices: &mut impl InvoiceStore,
        today: NaiveDate,
    ) -> Result<Vec<InvoiceId>, BillingError> {
        let mut flipped = Vec::new();

        for invoice in invoices.invoices() {
            if invoice.status == InvoiceStatus::Sent && invoice.is_past_due(today) {
                invoices.update_invoice_status(invoice.id, InvoiceStatus::Overdue)?;
                flipped.push(invoice.id);
            }
        }

        if !flipped.is_empty() {
            info!(count = flipped.len(), "Invoices marked overdue");
        }
        Ok(flipped)
    }
}
