//! Financial transaction types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kontor_shared::types::{InvoiceId, TransactionId};

/// Direction of a financial transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

impl TransactionKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

/// A booked income or expense record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Income or expense.
    pub kind: TransactionKind,
    /// Amount in euros.
    pub amount: Decimal,
    /// Booking date.
    pub date: NaiveDate,
    /// Free-form category ("Invoice", "Office", ...).
    pub category: String,
    /// Description for the books.
    pub description: String,
    /// Set when the record was created by an invoice payment.
    pub related_invoice_id: Option<InvoiceId>,
}

impl Transaction {
    /// Materializes a transaction from its input, assigning a fresh ID.
    #[must_use]
    pub fn from_input(input: CreateTransactionInput) -> Self {
        Self {
            id: TransactionId::new(),
            kind: input.kind,
            amount: input.amount,
            date: input.date,
            category: input.category,
            description: input.description,
            related_invoice_id: input.related_invoice_id,
        }
    }
}

/// Input for creating a new transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTransactionInput {
    /// Income or expense.
    pub kind: TransactionKind,
    /// Amount in euros.
    pub amount: Decimal,
    /// Booking date.
    pub date: NaiveDate,
    /// Free-form category.
    pub category: String,
    /// Description for the books.
    pub description: String,
    /// Invoice that triggered this record, if any.
    pub related_invoice_id: Option<InvoiceId>,
}
