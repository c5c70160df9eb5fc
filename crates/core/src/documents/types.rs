//! Document types for offers and invoices.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kontor_shared::types::{ClientId, InvoiceId, OfferId};

use crate::pricing::{LineItem, QuotationBreakdown, QuotationModifiers, calculate};

/// Which line item shape a document uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Hours-based IT billing.
    It,
    /// Fixed-price construction billing.
    Bau,
}

impl DocumentKind {
    /// Parse a kind from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "it" => Some(Self::It),
            "bau" => Some(Self::Bau),
            _ => None,
        }
    }

    /// Returns the string representation of the kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::It => "it",
            Self::Bau => "bau",
        }
    }
}

/// Offer status. Transitions are user-driven and unrestricted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    /// Being drafted. Creation default.
    #[default]
    Draft,
    /// Sent to the client.
    Sent,
    /// Accepted by the client; convertible to an invoice.
    Accepted,
    /// Declined by the client.
    Rejected,
}

impl OfferStatus {
    /// Parse a status from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "sent" => Some(Self::Sent),
            "accepted" => Some(Self::Accepted),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

/// Invoice status. Transitions are user-driven and unrestricted; moving
/// to `Paid` carries the income side effect (see `lifecycle`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Being drafted. Creation default.
    #[default]
    Draft,
    /// Sent to the client, awaiting payment.
    Sent,
    /// Payment received and booked.
    Paid,
    /// Past due without payment.
    Overdue,
    /// Withdrawn; no payment expected.
    Cancelled,
}

impl InvoiceStatus {
    /// Parse a status from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "sent" => Some(Self::Sent),
            "paid" => Some(Self::Paid),
            "overdue" => Some(Self::Overdue),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
            Self::Cancelled => "cancelled",
        }
    }
}

/// A price quotation sent to a prospective or existing client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    /// Unique identifier.
    pub id: OfferId,
    /// The client this offer is addressed to.
    pub client_id: ClientId,
    /// Human-readable document number, e.g. `AN-2026-02`.
    pub number: String,
    /// Current status.
    pub status: OfferStatus,
    /// Billing shape.
    pub kind: DocumentKind,
    /// The positions.
    pub items: Vec<LineItem>,
    /// Global modifiers.
    pub modifiers: QuotationModifiers,
    /// Price breakdown snapshot, computed at creation/edit time.
    pub breakdown: QuotationBreakdown,
    /// Issue date.
    pub issued_on: NaiveDate,
}

impl Offer {
    /// Creates a draft offer with a freshly computed breakdown snapshot.
    #[must_use]
    pub fn draft(
        client_id: ClientId,
        number: String,
        kind: DocumentKind,
        items: Vec<LineItem>,
        modifiers: QuotationModifiers,
        issued_on: NaiveDate,
    ) -> Self {
        let breakdown = calculate(&items, &modifiers);
        Self {
            id: OfferId::new(),
            client_id,
            number,
            status: OfferStatus::Draft,
            kind,
            items,
            modifiers,
            breakdown,
            issued_on,
        }
    }

    /// Replaces items and modifiers, recomputing the snapshot.
    ///
    /// This is the only way the persisted breakdown changes; status
    /// updates leave it untouched.
    pub fn replace_contents(&mut self, items: Vec<LineItem>, modifiers: QuotationModifiers) {
        self.breakdown = calculate(&items, &modifiers);
        self.items = items;
        self.modifiers = modifiers;
    }
}

/// A billing document tied to payment tracking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier.
    pub id: InvoiceId,
    /// The client being billed.
    pub client_id: ClientId,
    /// Human-readable document number, e.g. `RE-2026-02`.
    pub number: String,
    /// Current status.
    pub status: InvoiceStatus,
    /// Billing shape.
    pub kind: DocumentKind,
    /// The positions.
    pub items: Vec<LineItem>,
    /// Global modifiers.
    pub modifiers: QuotationModifiers,
    /// Price breakdown snapshot, computed at creation/edit time.
    pub breakdown: QuotationBreakdown,
    /// Issue date.
    pub issued_on: NaiveDate,
    /// Payment due date.
    pub due_on: NaiveDate,
    /// Whether this invoice covers only part of a larger total.
    pub is_partial_payment: bool,
    /// The partial amount, when `is_partial_payment` is set.
    pub partial_payment_of_total: Option<Decimal>,
}

impl Invoice {
    /// Creates a draft invoice with a freshly computed breakdown snapshot.
    #[must_use]
    pub fn draft(
        client_id: ClientId,
        number: String,
        kind: DocumentKind,
        items: Vec<LineItem>,
        modifiers: QuotationModifiers,
        issued_on: NaiveDate,
        due_on: NaiveDate,
    ) -> Self {
        let breakdown = calculate(&items, &modifiers);
        Self {
            id: InvoiceId::new(),
            client_id,
            number,
            status: InvoiceStatus::Draft,
            kind,
            items,
            modifiers,
            breakdown,
            issued_on,
            due_on,
            is_partial_payment: false,
            partial_payment_of_total: None,
        }
    }

    /// Replaces items and modifiers, recomputing the snapshot.
    pub fn replace_contents(&mut self, items: Vec<LineItem>, modifiers: QuotationModifiers) {
        self.breakdown = calculate(&items, &modifiers);
        self.items = items;
        self.modifiers = modifiers;
    }

    /// Marks this invoice as a partial payment over the given amount.
    pub fn set_partial_payment(&mut self, amount: Decimal) {
        self.is_partial_payment = true;
        self.partial_payment_of_total = Some(amount);
    }

    /// The amount a payment of this invoice books as income.
    ///
    /// The partial amount when flagged, otherwise the snapshot total.
    #[must_use]
    pub fn payable_amount(&self) -> Decimal {
        if self.is_partial_payment {
            self.partial_payment_of_total
                .unwrap_or(self.breakdown.total)
        } else {
            self.breakdown.total
        }
    }

    /// Whether the due date has passed.
    #[must_use]
    pub fn is_past_due(&self, today: NaiveDate) -> bool {
        today > self.due_on
    }
}
