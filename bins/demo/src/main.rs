//! Kontor walkthrough
//!
//! Drives the full billing flow against the in-memory store: client and
//! project setup, an offer with modifiers, conversion to an invoice,
//! payment, and the resulting books.

use chrono::{Duration, Utc};
use rust_decimal_macros::dec;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kontor_app::{BillingService, DocumentService, MemoryStore, NewOffer, OfferStore, TransactionStore};
use kontor_core::crm::{Client, ClientStatus, Project, ProjectStatus};
use kontor_core::documents::{DocumentKind, InvoiceStatus, OfferStatus};
use kontor_core::finance::summarize;
use kontor_core::pricing::{Billing, LineItem, QuotationBreakdown, QuotationModifiers};
use kontor_shared::format::format_eur;
use kontor_shared::{AppConfig, AppError};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kontor=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");
    info!(
        offer_prefix = %config.billing.offer_prefix,
        invoice_prefix = %config.billing.invoice_prefix,
        "Configuration loaded"
    );

    let service = DocumentService::new(config);
    let mut documents = MemoryStore::new();
    let mut books = MemoryStore::new();
    let today = Utc::now().date_naive();

    // A lead turns into a customer with a project.
    let mut client = Client::new("Musterbau GmbH");
    client.status = ClientStatus::Customer;
    let mut project = Project::new(client.id, "Website-Relaunch");
    project.status = ProjectStatus::Active;
    println!(
        "Client {} ({}), project {} ({})",
        client.name,
        client.status.as_str(),
        project.name,
        project.status.as_str()
    );

    // Draft an offer with the usual modifiers.
    let mut offer = service
        .create_offer(
            &mut documents,
            NewOffer {
                client_id: client.id,
                kind: DocumentKind::It,
                items: vec![
                    LineItem {
                        position: 1,
                        description: "Konzeption und Design".to_string(),
                        billing: Billing::Hourly {
                            hours: dec!(24),
                            hourly_rate: dec!(95),
                            discount_percent: dec!(0),
                        },
                    },
                    LineItem {
                        position: 2,
                        description: "Umsetzung".to_string(),
                        billing: Billing::Hourly {
                            hours: dec!(60),
                            hourly_rate: dec!(95),
                            discount_percent: dec!(10),
                        },
                    },
                ],
                modifiers: QuotationModifiers {
                    global_discount_percent: dec!(5),
                    express_enabled: true,
                    express_surcharge_percent: dec!(20),
                    hosting_enabled: true,
                    hosting_fee: dec!(150),
                    maintenance_enabled: true,
                    maintenance_months: 12,
                    maintenance_monthly_fee: dec!(29),
                    ..QuotationModifiers::default()
                },
                issued_on: today,
            },
        )
        .map_err(AppError::from)?;

    println!("\nOffer {}", offer.number);
    print_breakdown(&offer.breakdown);

    // The client accepts; the offer becomes an invoice.
    offer.status = OfferStatus::Accepted;
    documents.update_offer(&offer).map_err(AppError::from)?;

    let invoice = service
        .convert_offer_to_invoice(&mut documents, offer.id, today)
        .map_err(AppError::from)?;
    println!("\nInvoice {} (due {})", invoice.number, invoice.due_on);

    BillingService::set_invoice_status(
        &mut documents,
        &mut books,
        invoice.id,
        InvoiceStatus::Sent,
        today,
    )
    .map_err(AppError::from)?;

    // Payment arrives two weeks later and lands in the books.
    let paid_on = today + Duration::days(14);
    let outcome = BillingService::set_invoice_status(
        &mut documents,
        &mut books,
        invoice.id,
        InvoiceStatus::Paid,
        paid_on,
    )
    .map_err(AppError::from)?;

    if let Some(income) = outcome.income {
        println!(
            "\nPaid on {}: booked {} as {}",
            income.date,
            format_eur(income.amount),
            income.category
        );
    }

    let transactions = books.transactions();
    let summary = summarize(&transactions, today, paid_on);
    println!(
        "Books {} to {}: income {}, expenses {}, net {}",
        today,
        paid_on,
        format_eur(summary.income_total),
        format_eur(summary.expense_total),
        format_eur(summary.net())
    );

    Ok(())
}

/// Prints a breakdown the way the document PDF lays it out.
fn print_breakdown(breakdown: &QuotationBreakdown) {
    println!("  Positions         {:>14}", format_eur(breakdown.sum_positions));
    if !breakdown.global_discount_amount.is_zero() {
        println!(
            "  Discount          {:>14}",
            format_eur(-breakdown.global_discount_amount)
        );
    }
    if !breakdown.express_surcharge_amount.is_zero() {
        println!(
            "  Express           {:>14}",
            format_eur(breakdown.express_surcharge_amount)
        );
    }
    if !breakdown.hosting_total.is_zero() {
        println!("  Hosting           {:>14}", format_eur(breakdown.hosting_total));
    }
    if !breakdown.maintenance_total.is_zero() {
        println!(
            "  Maintenance       {:>14}",
            format_eur(breakdown.maintenance_total)
        );
    }
    println!(
        "  Subtotal          {:>14}",
        format_eur(breakdown.subtotal_before_vat)
    );
    // No VAT line when VAT is zero (§19 UStG).
    if !breakdown.vat_amount.is_zero() {
        println!("  VAT               {:>14}", format_eur(breakdown.vat_amount));
    }
    println!("  Total             {:>14}", format_eur(breakdown.total));
    if !breakdown.total_hours.is_zero() {
        println!(
            "  ({} hours, effective {}/h)",
            breakdown.total_hours,
            format_eur(breakdown.effective_hourly_rate)
        );
    }
}
