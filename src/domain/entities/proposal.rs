//! Client proposal entity.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Entity, ResourceKind};
use crate::domain::serde_utils::api_datetime;

/// Proposal delivery status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    /// Not yet sent.
    #[default]
    Draft,
    /// Sent to the client.
    Sent,
    /// Opened by the client.
    Viewed,
    /// Accepted.
    Accepted,
    /// Declined.
    Rejected,
    /// Status string this client does not know.
    #[serde(other)]
    Unknown,
}

impl ProposalStatus {
    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Sent => "Sent",
            Self::Viewed => "Viewed",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::Unknown => "Unknown",
        }
    }
}

/// Written offer built from an estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct Proposal {
    pub id: String,
    pub estimate_id: String,
    pub title: String,
    pub content: String,
    pub terms: String,
    #[serde(default)]
    pub status: ProposalStatus,
    #[serde(default, with = "api_datetime::option")]
    pub valid_until: Option<NaiveDateTime>,
    #[serde(default, with = "api_datetime::option")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, with = "api_datetime::option")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Create/update body for a proposal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct ProposalDraft {
    pub estimate_id: String,
    pub title: String,
    pub content: String,
    pub terms: String,
    #[serde(default, with = "api_datetime::option")]
    pub valid_until: Option<NaiveDateTime>,
}

impl Entity for Proposal {
    type Draft = ProposalDraft;

    const KIND: ResourceKind = ResourceKind::Proposals;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> ProposalDraft {
        ProposalDraft {
            estimate_id: self.estimate_id.clone(),
            title: self.title.clone(),
            content: self.content.clone(),
            terms: self.terms.clone(),
            valid_until: self.valid_until,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_until_accepts_date_input() {
        let json = r#"{"estimate_id":"e-1","title":"Deck","content":"c","terms":"t",
            "valid_until":"2025-12-31"}"#;

        let draft: ProposalDraft = serde_json::from_str(json).unwrap();

        let until = draft.valid_until.unwrap();
        assert_eq!(until.format("%Y-%m-%d").to_string(), "2025-12-31");
        assert_eq!(
            serde_json::to_value(&draft).unwrap()["valid_until"],
            "2025-12-31T00:00:00"
        );
    }

    #[test]
    fn test_status_fallback() {
        let json = r#"{"id":"x","estimate_id":"e","title":"t","content":"c","terms":"t",
            "status":"archived"}"#;
        let proposal: Proposal = serde_json::from_str(json).unwrap();
        assert_eq!(proposal.status, ProposalStatus::Unknown);
    }
}
