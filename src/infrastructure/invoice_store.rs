//! In-memory invoice store.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::{Invoice, InvoiceDraft, InvoiceStatus, ResourceKind};
use crate::domain::errors::ApiError;
use crate::domain::ports::ResourcePort;
use crate::domain::services::InvoiceTotals;

/// Invoices kept for the lifetime of the process, in insertion order.
#[derive(Default)]
pub struct InvoiceStore {
    invoices: RwLock<Vec<Invoice>>,
}

impl InvoiceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn not_found(id: &str) -> ApiError {
        ApiError::not_found(ResourceKind::Invoices.singular(), id)
    }

    /// Applies the draft and recomputes the money fields. Every save puts the
    /// invoice back into draft with a fresh creation timestamp.
    fn apply(invoice: &mut Invoice, draft: &InvoiceDraft) {
        let totals = InvoiceTotals::compute(&draft.items, draft.tax_rate);
        invoice.invoice_number = if draft.invoice_number.trim().is_empty() {
            format!("INV-{}", Utc::now().timestamp_millis())
        } else {
            draft.invoice_number.trim().to_string()
        };
        invoice.project_id.clone_from(&draft.project_id);
        invoice.client_name.clone_from(&draft.client_name);
        invoice.client_email.clone_from(&draft.client_email);
        invoice.description.clone_from(&draft.description);
        invoice.items.clone_from(&draft.items);
        invoice.tax_rate = draft.tax_rate;
        invoice.due_date = draft.due_date;
        invoice.amount = totals.subtotal;
        invoice.total_amount = totals.total;
        invoice.status = InvoiceStatus::Draft;
        invoice.created_at = Some(Utc::now().naive_utc());
    }
}

#[async_trait]
impl ResourcePort<Invoice> for InvoiceStore {
    async fn list(&self) -> Result<Vec<Invoice>, ApiError> {
        Ok(self.invoices.read().clone())
    }

    async fn get(&self, id: &str) -> Result<Invoice, ApiError> {
        self.invoices
            .read()
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, draft: &InvoiceDraft) -> Result<Invoice, ApiError> {
        let mut invoice = Invoice {
            id: Uuid::new_v4().to_string(),
            invoice_number: String::new(),
            project_id: String::new(),
            client_name: String::new(),
            client_email: String::new(),
            description: String::new(),
            items: Vec::new(),
            tax_rate: draft.tax_rate,
            amount: rust_decimal::Decimal::ZERO,
            total_amount: rust_decimal::Decimal::ZERO,
            status: InvoiceStatus::Draft,
            due_date: None,
            created_at: None,
        };
        Self::apply(&mut invoice, draft);
        debug!(id = %invoice.id, number = %invoice.invoice_number, "Invoice created");

        self.invoices.write().push(invoice.clone());
        Ok(invoice)
    }

    async fn update(&self, id: &str, draft: &InvoiceDraft) -> Result<Invoice, ApiError> {
        let mut invoices = self.invoices.write();
        let invoice = invoices
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        Self::apply(invoice, draft);
        debug!(id, number = %invoice.invoice_number, "Invoice updated");
        Ok(invoice.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let mut invoices = self.invoices.write();
        let before = invoices.len();
        invoices.retain(|i| i.id != id);
        if invoices.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
