//! Renders invoices and proposals into email, SMS and clipboard texts.

use std::fmt::Write as _;

use chrono::NaiveDateTime;

use crate::application::dto::ShareMessage;
use crate::domain::entities::{Invoice, LineItem, Proposal};
use crate::domain::money::{format_currency, format_number};
use crate::domain::services::LineItemCalculator;

const SMS_PREVIEW_CHARS: usize = 100;
const SIGN_OFF: &str = "Best regards,\nCrewlo Team";

/// Formats a date the way share texts show it, or `N/A`.
#[must_use]
pub fn display_date(date: Option<NaiveDateTime>) -> String {
    date.map_or_else(|| "N/A".to_string(), |d| d.format("%m/%d/%Y").to_string())
}

/// Builds the texts a document is shared with.
///
/// Invoices and proposals each get an email, a short SMS and a plain
/// clipboard rendering. Dates show as `MM/DD/YYYY` and money as `$1,234.50`.
pub struct ShareFormatter;

impl ShareFormatter {
    /// Share texts for an invoice, addressed to its client email when set.
    #[must_use]
    pub fn invoice(invoice: &Invoice) -> ShareMessage {
        let due = display_date(invoice.due_date);
        let total = format_currency(invoice.total_amount);
        let summary = Self::invoice_summary(invoice, &due);
        let items = Self::item_lines(&invoice.items);

        let email_body = format!(
            "Dear {},\n\nPlease find your invoice details below:\n\nInvoice Number: {}\n{summary}\n\nItems:\n{items}\n\nThank you for your business!\n\n{SIGN_OFF}\n",
            invoice.client_name, invoice.invoice_number
        );

        let clipboard = format!(
            "Invoice: {}\nClient: {}\n{summary}\n\nItems:\n{items}\n",
            invoice.invoice_number, invoice.client_name
        );

        ShareMessage {
            label: format!("Invoice {}", invoice.invoice_number),
            email_to: Some(invoice.client_email.clone()).filter(|e| !e.is_empty()),
            email_subject: format!("Invoice {}", invoice.invoice_number),
            email_body,
            sms: format!(
                "Invoice {} for {total} is ready. Due: {due}. Check your email for details.",
                invoice.invoice_number
            ),
            clipboard,
        }
    }

    /// Share texts for a proposal. The SMS carries only the first 100
    /// characters of the content.
    #[must_use]
    pub fn proposal(proposal: &Proposal) -> ShareMessage {
        let valid_until = display_date(proposal.valid_until);
        let preview: String = proposal.content.chars().take(SMS_PREVIEW_CHARS).collect();

        ShareMessage {
            label: format!("Proposal {}", proposal.title),
            email_to: None,
            email_subject: format!("Proposal: {}", proposal.title),
            email_body: format!(
                "Hi,\n\nPlease find attached the proposal: {}\n\n{}\n\nTerms: {}\n\nValid until: {valid_until}\n\n{SIGN_OFF}\n",
                proposal.title, proposal.content, proposal.terms
            ),
            sms: format!(
                "Proposal: {} - {preview}... View full proposal for details.",
                proposal.title
            ),
            clipboard: format!(
                "Proposal: {}\n\n{}\n\nTerms: {}\n\nValid until: {valid_until}\n",
                proposal.title, proposal.content, proposal.terms
            ),
        }
    }

    fn invoice_summary(invoice: &Invoice, due: &str) -> String {
        let tax = LineItemCalculator::tax(invoice.amount, invoice.tax_rate);
        format!(
            "Description: {}\nAmount: {}\nTax ({}%): {}\nTotal: {}\nDue Date: {due}",
            invoice.description,
            format_currency(invoice.amount),
            format_number(invoice.tax_rate),
            format_currency(tax),
            format_currency(invoice.total_amount),
        )
    }

    fn item_lines(items: &[LineItem]) -> String {
        let mut out = String::new();
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = write!(
                out,
                "- {}: {} x {} = {}",
                item.description(),
                format_number(item.quantity()),
                format_currency(item.rate()),
                format_currency(item.amount())
            );
        }
        out
    }
}
