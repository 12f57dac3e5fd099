//! Cost estimate entity.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Entity, ResourceKind};
use crate::domain::serde_utils::api_datetime;

/// Estimate review status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimateStatus {
    /// Still being prepared; counted as pending on the dashboard.
    #[default]
    Draft,
    /// Sent to the client.
    Sent,
    /// Accepted by the client.
    Approved,
    /// Declined by the client.
    Rejected,
    /// Status string this client does not know.
    #[serde(other)]
    Unknown,
}

impl EstimateStatus {
    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Sent => "Sent",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Unknown => "Unknown",
        }
    }
}

/// Cost breakdown for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct Estimate {
    pub id: String,
    pub project_id: String,
    #[serde(default)]
    pub lead_id: Option<String>,
    pub description: String,
    /// Sum of the four cost components, computed by the server.
    #[serde(default)]
    pub total_cost: Decimal,
    #[serde(default)]
    pub materials_cost: Decimal,
    #[serde(default)]
    pub labor_cost: Decimal,
    #[serde(default)]
    pub overhead_cost: Decimal,
    #[serde(default)]
    pub profit_margin: Decimal,
    /// Free-form rows, passed through untouched.
    #[serde(default)]
    pub line_items: Vec<Value>,
    #[serde(default)]
    pub status: EstimateStatus,
    #[serde(default, with = "api_datetime::option")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, with = "api_datetime::option")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Create/update body for an estimate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct EstimateDraft {
    pub project_id: String,
    pub lead_id: Option<String>,
    pub description: String,
    pub materials_cost: Decimal,
    pub labor_cost: Decimal,
    pub overhead_cost: Decimal,
    pub profit_margin: Decimal,
    #[serde(default)]
    pub line_items: Vec<Value>,
}

impl EstimateDraft {
    /// Previews the total the server will store.
    #[must_use]
    pub fn total(&self) -> Decimal {
        estimate_total(
            self.materials_cost,
            self.labor_cost,
            self.overhead_cost,
            self.profit_margin,
        )
    }
}

/// Sums the cost components of an estimate, saturating on overflow.
#[must_use]
pub fn estimate_total(
    materials: Decimal,
    labor: Decimal,
    overhead: Decimal,
    profit: Decimal,
) -> Decimal {
    [labor, overhead, profit]
        .into_iter()
        .try_fold(materials, Decimal::checked_add)
        .unwrap_or(Decimal::MAX)
}

impl Entity for Estimate {
    type Draft = EstimateDraft;

    const KIND: ResourceKind = ResourceKind::Estimates;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> EstimateDraft {
        EstimateDraft {
            project_id: self.project_id.clone(),
            lead_id: self.lead_id.clone(),
            description: self.description.clone(),
            materials_cost: self.materials_cost,
            labor_cost: self.labor_cost,
            overhead_cost: self.overhead_cost,
            profit_margin: self.profit_margin,
            line_items: self.line_items.clone(),
        }
    }
}
