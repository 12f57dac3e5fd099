//! Sales lead entity.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Entity, ProjectType, ResourceKind};
use crate::domain::serde_utils::api_datetime;

/// Position of a lead in the sales funnel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    /// Not yet contacted.
    #[default]
    New,
    /// First contact made.
    Contacted,
    /// Confirmed as a real opportunity.
    Qualified,
    /// Became a project.
    Converted,
    /// Went elsewhere.
    Lost,
    /// Status string this client does not know.
    #[serde(other)]
    Unknown,
}

impl LeadStatus {
    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Contacted => "Contacted",
            Self::Qualified => "Qualified",
            Self::Converted => "Converted",
            Self::Lost => "Lost",
            Self::Unknown => "Unknown",
        }
    }
}

/// Where a lead came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadSource {
    /// Web form.
    #[default]
    Website,
    /// Word of mouth.
    Referral,
    /// Social media.
    Social,
    /// Phone call.
    Phone,
    /// Source string this client does not know.
    #[serde(other)]
    Unknown,
}

impl LeadSource {
    /// All sources in form order.
    pub const ALL: [Self; 4] = [Self::Website, Self::Referral, Self::Social, Self::Phone];

    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Referral => "referral",
            Self::Social => "social",
            Self::Phone => "phone",
            Self::Unknown => "",
        }
    }

    /// Parses the wire value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Website => "Website",
            Self::Referral => "Referral",
            Self::Social => "Social Media",
            Self::Phone => "Phone",
            Self::Unknown => "Unknown",
        }
    }
}

/// Prospective client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub project_type: ProjectType,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: LeadStatus,
    #[serde(default)]
    pub source: LeadSource,
    #[serde(default)]
    pub estimated_budget: Decimal,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, with = "api_datetime::option")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, with = "api_datetime::option")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Create/update body for a lead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct LeadDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub project_type: ProjectType,
    pub description: Option<String>,
    pub source: LeadSource,
    pub estimated_budget: Decimal,
    pub notes: Option<String>,
}

impl Entity for Lead {
    type Draft = LeadDraft;

    const KIND: ResourceKind = ResourceKind::Leads;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> LeadDraft {
        LeadDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            project_type: self.project_type,
            description: self.description.clone(),
            source: self.source,
            estimated_budget: self.estimated_budget,
            notes: self.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_to_sparse_payload() {
        let json = r#"{"id":"l-1","name":"Dana","email":"dana@example.com",
            "phone":"555-0100","address":"4 Elm","project_type":"residential"}"#;

        let lead: Lead = serde_json::from_str(json).unwrap();

        assert_eq!(lead.status, LeadStatus::New);
        assert_eq!(lead.source, LeadSource::Website);
        assert_eq!(lead.estimated_budget, Decimal::ZERO);
        assert!(lead.notes.is_none());
    }

    #[test]
    fn test_to_draft_keeps_editable_fields() {
        let json = r#"{"id":"l-2","name":"Sam","email":"s@example.com","phone":"1",
            "address":"a","project_type":"commercial","status":"qualified",
            "source":"referral","estimated_budget":90000,"notes":"call back"}"#;
        let lead: Lead = serde_json::from_str(json).unwrap();

        let draft = lead.to_draft();

        assert_eq!(draft.source, LeadSource::Referral);
        assert_eq!(draft.project_type, ProjectType::Commercial);
        assert_eq!(draft.estimated_budget, Decimal::from(90000));
        assert_eq!(draft.notes.as_deref(), Some("call back"));
    }

    #[test]
    fn test_source_labels() {
        assert_eq!(LeadSource::parse("social").map(LeadSource::label), Some("Social Media"));
    }

    #[test]
    fn test_list_with_unknown_source_decodes() {
        let json = r#"[
            {"id":"l-1","name":"A","email":"a@x","phone":"1","address":"a",
             "project_type":"residential","source":"phone"},
            {"id":"l-2","name":"B","email":"b@x","phone":"2","address":"b",
             "project_type":"industrial","source":"email"},
            {"id":"l-3","name":"C","email":"c@x","phone":"3","address":"c",
             "project_type":"renovation","source":"Referral"}
        ]"#;

        let leads: Vec<Lead> = serde_json::from_str(json).unwrap();

        assert_eq!(leads.len(), 3);
        assert_eq!(leads[0].source, LeadSource::Phone);
        assert_eq!(leads[1].source, LeadSource::Unknown);
        assert_eq!(leads[1].project_type, ProjectType::Unknown);
        assert_eq!(leads[2].source, LeadSource::Unknown);
        assert_eq!(LeadSource::parse("email"), None);
    }
}
