use crate::application::dto::DashboardStats;
use crate::domain::entities::{Estimate, EstimateStatus, Lead, LeadStatus, Project, ProjectStatus};

/// Aggregates the dashboard counters from the three collections.
#[must_use]
pub fn compute_stats(projects: &[Project], leads: &[Lead], estimates: &[Estimate]) -> DashboardStats {
    DashboardStats {
        total_projects: projects.len(),
        active_projects: projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Active)
            .count(),
        total_leads: leads.len(),
        new_leads: leads.iter().filter(|l| l.status == LeadStatus::New).count(),
        total_estimates: estimates.len(),
        pending_estimates: estimates
            .iter()
            .filter(|e| e.status == EstimateStatus::Draft)
            .count(),
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{estimate, lead, project};
    use super::*;

    #[test]
    fn test_counts_by_status() {
        let projects = vec![
            project("p1", "A", "active"),
            project("p2", "B", "completed"),
            project("p3", "C", "active"),
        ];
        let leads = vec![lead("l1", "new"), lead("l2", "contacted")];
        let estimates = vec![
            estimate("e1", "p1", "draft"),
            estimate("e2", "p1", "sent"),
            estimate("e3", "p2", "approved"),
            estimate("e4", "p3", "draft"),
        ];

        let stats = compute_stats(&projects, &leads, &estimates);

        assert_eq!(
            stats,
            DashboardStats {
                total_projects: 3,
                active_projects: 2,
                total_leads: 2,
                new_leads: 1,
                total_estimates: 4,
                pending_estimates: 2,
            }
        );
    }

    #[test]
    fn test_unknown_status_counts_only_in_totals() {
        let projects = vec![project("p1", "A", "paused")];
        let stats = compute_stats(&projects, &[], &[]);
        assert_eq!(stats.total_projects, 1);
        assert_eq!(stats.active_projects, 0);
    }

    #[test]
    fn test_empty_collections() {
        assert_eq!(compute_stats(&[], &[], &[]), DashboardStats::default());
    }
}
