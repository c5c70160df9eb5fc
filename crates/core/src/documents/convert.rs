//! Offer to invoice conversion.

use chrono::NaiveDate;

use super::error::DocumentError;
use super::types::{Invoice, Offer, OfferStatus};

/// Converts an accepted offer into a draft invoice.
///
/// The invoice copies the offer's kind, items, and modifiers and gets a
/// freshly recomputed breakdown snapshot. The caller supplies the new
/// invoice number (assigned against the invoice sequence, not the offer
/// sequence) and the due date.
///
/// # Errors
///
/// Returns [`DocumentError::OfferNotAccepted`] unless the offer is
/// `Accepted`.
pub fn offer_to_invoice_draft(
    offer: &Offer,
    number: String,
    issued_on: NaiveDate,
    due_on: NaiveDate,
) -> Result<Invoice, DocumentError> {
    if offer.status != OfferStatus::Accepted {
        return Err(DocumentError::OfferNotAccepted(offer.status));
    }

    Ok(Invoice::draft(
        offer.client_id,
        number,
        offer.kind,
        offer.items.clone(),
        offer.modifiers.clone(),
        issued_on,
        due_on,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::types::{DocumentKind, InvoiceStatus};
    use crate::pricing::{Billing, LineItem, QuotationModifiers};
    use kontor_shared::types::ClientId;
    use rust_decimal_macros::dec;

    fn offer(status: OfferStatus) -> Offer {
        let mut offer = Offer::draft(
            ClientId::new(),
            "AN-2026-03".to_string(),
            DocumentKind::It,
            vec![LineItem {
                position: 1,
                description: "Konzeption".to_string(),
                billing: Billing::Hourly {
                    hours: dec!(12),
                    hourly_rate: dec!(95),
                    discount_percent: dec!(0),
                },
            }],
            QuotationModifiers::default(),
            NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
        );
        offer.status = status;
        offer
    }

    #[test]
    fn test_accepted_offer_converts_to_draft_invoice() {
        let offer = offer(OfferStatus::Accepted);
        let issued = NaiveDate::from_ymd_opt(2026, 6, 10).unwrap();
        let due = NaiveDate::from_ymd_opt(2026, 6, 24).unwrap();

        let invoice =
            offer_to_invoice_draft(&offer, "RE-2026-02".to_string(), issued, due).unwrap();

        assert_eq!(invoice.status, InvoiceStatus::Draft);
        assert_eq!(invoice.number, "RE-2026-02");
        assert_eq!(invoice.client_id, offer.client_id);
        assert_eq!(invoice.kind, offer.kind);
        assert_eq!(invoice.items, offer.items);
        assert_eq!(invoice.breakdown, offer.breakdown);
        assert_eq!(invoice.due_on, due);
    }

    #[test]
    fn test_unaccepted_offers_rejected() {
        for status in [OfferStatus::Draft, OfferStatus::Sent, OfferStatus::Rejected] {
            let offer = offer(status);
            let result = offer_to_invoice_draft(
                &offer,
                "RE-2026-02".to_string(),
                NaiveDate::from_ymd_opt(2026, 6, 10).unwrap(),
                NaiveDate::from_ymd_opt(2026, 6, 24).unwrap(),
            );
            assert!(matches!(result, Err(DocumentError::OfferNotAccepted(_))));
        }
    }
}
