//! Income/expense totals over a date range.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{Transaction, TransactionKind};

/// Aggregated totals for a reporting period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceSummary {
    /// Sum of income transactions in the period.
    pub income_total: Decimal,
    /// Sum of expense transactions in the period.
    pub expense_total: Decimal,
}

impl FinanceSummary {
    /// Income minus expenses.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.income_total - self.expense_total
    }
}

/// Sums transactions with a booking date inside `[from, to]` (inclusive).
#[must_use]
pub fn summarize<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    from: NaiveDate,
    to: NaiveDate,
) -> FinanceSummary {
    let mut income_total = Decimal::ZERO;
    let mut expense_total = Decimal::ZERO;

    for transaction in transactions {
        if transaction.date < from || transaction.date > to {
            continue;
        }
        match transaction.kind {
            TransactionKind::Income => income_total += transaction.amount,
            TransactionKind::Expense => expense_total += transaction.amount,
        }
    }

    FinanceSummary {
        income_total,
        expense_total,
    }
}
