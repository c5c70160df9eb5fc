//! Status lifecycle rules for invoices.
//!
//! Any status may move to any other within its enum; there is no
//! transition matrix. What this module pins down is the one coupled
//! side effect: marking an invoice paid books an income transaction.
//! The service is stateless and returns an action record; applying it
//! against storage is the caller's job.

use chrono::NaiveDate;

use crate::finance::{CreateTransactionInput, TransactionKind};

use super::types::{Invoice, InvoiceStatus};

/// Booking category used for invoice-driven income records.
pub const INVOICE_CATEGORY: &str = "Invoice";

/// The outcome of a requested invoice status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvoiceStatusAction {
    /// A plain status write with no side effects.
    Plain {
        /// The status to persist.
        new_status: InvoiceStatus,
    },
    /// A status write that must be accompanied by an income record.
    ///
    /// Both writes must land together; if the income record cannot be
    /// created the status change is not complete.
    Paid {
        /// The status to persist (always `Paid`).
        new_status: InvoiceStatus,
        /// The income transaction to create alongside the write.
        income: CreateTransactionInput,
    },
}

/// Stateless service for invoice status transitions.
pub struct LifecycleService;

impl LifecycleService {
    /// Resolves a requested status change into the action to apply.
    ///
    /// Moving to `Paid` yields the income record for the invoice's
    /// payable amount (the partial amount when flagged, otherwise the
    /// snapshot total). Setting `Paid` on an already-paid invoice is a
    /// plain no-op write, so repeating the request cannot book income
    /// twice.
    #[must_use]
    pub fn set_invoice_status(
        invoice: &Invoice,
        new_status: InvoiceStatus,
        today: NaiveDate,
    ) -> InvoiceStatusAction {
        if new_status == InvoiceStatus::Paid && invoice.status != InvoiceStatus::Paid {
            let income = CreateTransactionInput {
                kind: TransactionKind::Income,
                amount: invoice.payable_amount(),
                date: today,
                category: INVOICE_CATEGORY.to_string(),
                description: format!("Invoice {}", invoice.number),
                related_invoice_id: Some(invoice.id),
            };
            InvoiceStatusAction::Paid {
                new_status,
                income,
            }
        } else {
            InvoiceStatusAction::Plain { new_status }
        }
    }
}
