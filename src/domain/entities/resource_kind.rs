//! Resource kinds and their endpoint table.

use serde::{Deserialize, Serialize};

/// Every collection the client manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Construction projects.
    Projects,
    /// Sales leads.
    Leads,
    /// Cost estimates.
    Estimates,
    /// Material catalog.
    Materials,
    /// Client proposals.
    Proposals,
    /// Invoices (held locally).
    Invoices,
}

impl ResourceKind {
    /// All kinds in navigation order.
    pub const ALL: [Self; 6] = [
        Self::Projects,
        Self::Leads,
        Self::Estimates,
        Self::Materials,
        Self::Proposals,
        Self::Invoices,
    ];

    /// Returns the API collection path, or `None` when the kind is not API backed.
    #[must_use]
    pub const fn path(self) -> Option<&'static str> {
        match self {
            Self::Projects => Some("projects"),
            Self::Leads => Some("leads"),
            Self::Estimates => Some("estimates"),
            Self::Materials => Some("materials"),
            Self::Proposals => Some("proposals"),
            Self::Invoices => None,
        }
    }

    /// Returns the plural display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Leads => "Leads",
            Self::Estimates => "Estimates",
            Self::Materials => "Materials",
            Self::Proposals => "Proposals",
            Self::Invoices => "Invoices",
        }
    }

    /// Returns the singular lowercase noun.
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Projects => "project",
            Self::Leads => "lead",
            Self::Estimates => "estimate",
            Self::Materials => "material",
            Self::Proposals => "proposal",
            Self::Invoices => "invoice",
        }
    }

    /// Returns whether records of this kind can be shared.
    #[must_use]
    pub const fn is_shareable(self) -> bool {
        matches!(self, Self::Proposals | Self::Invoices)
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_table() {
        assert_eq!(ResourceKind::Projects.path(), Some("projects"));
        assert_eq!(ResourceKind::Leads.path(), Some("leads"));
        assert_eq!(ResourceKind::Materials.path(), Some("materials"));
        assert_eq!(ResourceKind::Estimates.path(), Some("estimates"));
        assert_eq!(ResourceKind::Proposals.path(), Some("proposals"));
        assert_eq!(ResourceKind::Invoices.path(), None);
    }

    #[test]
    fn test_shareable_kinds() {
        let shareable: Vec<_> = ResourceKind::ALL
            .into_iter()
            .filter(|k| k.is_shareable())
            .collect();
        assert_eq!(shareable, vec![ResourceKind::Proposals, ResourceKind::Invoices]);
    }
}
