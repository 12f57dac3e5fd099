//! Construction project entity.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Entity, ResourceKind};
use crate::domain::serde_utils::api_datetime;

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Work in progress.
    #[default]
    Active,
    /// Finished.
    Completed,
    /// Abandoned.
    Cancelled,
    /// Status string this client does not know.
    #[serde(other)]
    Unknown,
}

impl ProjectStatus {
    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Unknown => "Unknown",
        }
    }
}

/// Kind of construction work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Homes.
    #[default]
    Residential,
    /// Business premises.
    Commercial,
    /// Remodeling of existing buildings.
    Renovation,
    /// Type string this client does not know.
    #[serde(other)]
    Unknown,
}

impl ProjectType {
    /// All project types in form order.
    pub const ALL: [Self; 3] = [Self::Residential, Self::Commercial, Self::Renovation];

    /// Returns the wire value. `Unknown` maps to an empty string so a form
    /// built from it starts with no selection.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::Renovation => "renovation",
            Self::Unknown => "",
        }
    }

    /// Parses the wire value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
            Self::Renovation => "Renovation",
            Self::Unknown => "Unknown",
        }
    }
}

/// Construction project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub address: String,
    pub client_id: String,
    #[serde(default)]
    pub status: ProjectStatus,
    pub project_type: ProjectType,
    #[serde(default)]
    pub estimated_cost: Decimal,
    #[serde(default)]
    pub actual_cost: Decimal,
    #[serde(default, with = "api_datetime::option")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default, with = "api_datetime::option")]
    pub end_date: Option<NaiveDateTime>,
    #[serde(default, with = "api_datetime::option")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, with = "api_datetime::option")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Create/update body for a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct ProjectDraft {
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub client_id: String,
    pub project_type: ProjectType,
    pub estimated_cost: Decimal,
    #[serde(default, with = "api_datetime::option")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default, with = "api_datetime::option")]
    pub end_date: Option<NaiveDateTime>,
}

impl Entity for Project {
    type Draft = ProjectDraft;

    const KIND: ResourceKind = ResourceKind::Projects;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> ProjectDraft {
        ProjectDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            address: self.address.clone(),
            client_id: self.client_id.clone(),
            project_type: self.project_type,
            estimated_cost: self.estimated_cost,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}
