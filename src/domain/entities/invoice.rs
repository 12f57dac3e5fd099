//! Invoice entity and its line items.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Entity, ResourceKind};
use crate::domain::serde_utils::api_datetime;

/// Payment status of an invoice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Not yet sent.
    #[default]
    Draft,
    /// Sent to the client.
    Sent,
    /// Settled.
    Paid,
    /// Past the due date.
    Overdue,
}

impl InvoiceStatus {
    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Sent => "Sent",
            Self::Paid => "Paid",
            Self::Overdue => "Overdue",
        }
    }
}

/// Editable field of a line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemField {
    /// Free-text description; leaves the amount untouched.
    Description(String),
    /// Quantity; recomputes the amount.
    Quantity(Decimal),
    /// Unit rate; recomputes the amount.
    Rate(Decimal),
}

#[derive(Deserialize)]
struct LineItemRecord {
    #[serde(default)]
    description: String,
    #[serde(default)]
    quantity: Decimal,
    #[serde(default)]
    rate: Decimal,
}

/// One billed row. The amount always equals `quantity * rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    description: String,
    quantity: Decimal,
    rate: Decimal,
    amount: Decimal,
}

impl LineItem {
    /// Creates a line item and derives its amount.
    #[must_use]
    pub fn new(description: impl Into<String>, quantity: Decimal, rate: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            rate,
            amount: line_amount(quantity, rate),
        }
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the quantity.
    #[must_use]
    pub const fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Returns the unit rate.
    #[must_use]
    pub const fn rate(&self) -> Decimal {
        self.rate
    }

    /// Returns the derived amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns a copy with one field replaced.
    #[must_use]
    pub fn with_field(&self, field: ItemField) -> Self {
        match field {
            ItemField::Description(description) => Self {
                description,
                ..self.clone()
            },
            ItemField::Quantity(quantity) => {
                Self::new(self.description.clone(), quantity, self.rate)
            }
            ItemField::Rate(rate) => Self::new(self.description.clone(), self.quantity, rate),
        }
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self::new(String::new(), Decimal::ONE, Decimal::ZERO)
    }
}

impl<'de> Deserialize<'de> for LineItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let record = LineItemRecord::deserialize(deserializer)?;
        Ok(Self::new(record.description, record.quantity, record.rate))
    }
}

fn line_amount(quantity: Decimal, rate: Decimal) -> Decimal {
    quantity.checked_mul(rate).unwrap_or(Decimal::MAX)
}

/// Stored invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct Invoice {
    pub id: String,
    pub invoice_number: String,
    #[serde(default)]
    pub project_id: String,
    pub client_name: String,
    pub client_email: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    /// Percentage, e.g. `8.5`.
    #[serde(default)]
    pub tax_rate: Decimal,
    /// Subtotal before tax.
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub total_amount: Decimal,
    #[serde(default)]
    pub status: InvoiceStatus,
    #[serde(default, with = "api_datetime::option")]
    pub due_date: Option<NaiveDateTime>,
    #[serde(default, with = "api_datetime::option")]
    pub created_at: Option<NaiveDateTime>,
}

/// Create/update body for an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct InvoiceDraft {
    pub project_id: String,
    pub client_name: String,
    pub client_email: String,
    /// Left blank to have one generated.
    pub invoice_number: String,
    pub description: String,
    pub tax_rate: Decimal,
    #[serde(default, with = "api_datetime::option")]
    pub due_date: Option<NaiveDateTime>,
    pub items: Vec<LineItem>,
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            client_name: String::new(),
            client_email: String::new(),
            invoice_number: String::new(),
            description: String::new(),
            tax_rate: Decimal::ZERO,
            due_date: None,
            items: vec![LineItem::default()],
        }
    }
}

impl Entity for Invoice {
    type Draft = InvoiceDraft;

    const KIND: ResourceKind = ResourceKind::Invoices;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> InvoiceDraft {
        InvoiceDraft {
            project_id: self.project_id.clone(),
            client_name: self.client_name.clone(),
            client_email: self.client_email.clone(),
            invoice_number: self.invoice_number.clone(),
            description: self.description.clone(),
            tax_rate: self.tax_rate,
            due_date: self.due_date,
            items: self.items.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_amount() {
        let item = LineItem::new("Tile", Decimal::new(25, 1), Decimal::from(40));
        assert_eq!(item.amount(), Decimal::from(100));
    }

    #[test]
    fn test_deserialize_ignores_stale_amount() {
        let item: LineItem =
            serde_json::from_str(r#"{"description":"x","quantity":2,"rate":5,"amount":99}"#)
                .unwrap();
        assert_eq!(item.amount(), Decimal::from(10));
    }

    #[test]
    fn test_with_field_description_keeps_amount() {
        let item = LineItem::new("a", Decimal::from(3), Decimal::from(7));
        let renamed = item.with_field(ItemField::Description("b".into()));
        assert_eq!(renamed.description(), "b");
        assert_eq!(renamed.amount(), Decimal::from(21));
    }

    #[test]
    fn test_default_draft_has_one_blank_item() {
        let draft = InvoiceDraft::default();
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].quantity(), Decimal::ONE);
        assert_eq!(draft.items[0].amount(), Decimal::ZERO);
    }
}
