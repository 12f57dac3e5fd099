//! Dashboard DTOs.

/// Counters shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    /// All projects.
    pub total_projects: usize,
    /// Projects with status active.
    pub active_projects: usize,
    /// All leads.
    pub total_leads: usize,
    /// Leads with status new.
    pub new_leads: usize,
    /// All estimates.
    pub total_estimates: usize,
    /// Estimates still in draft.
    pub pending_estimates: usize,
}
