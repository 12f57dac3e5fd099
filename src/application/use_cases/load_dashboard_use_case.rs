//! Dashboard loading use case.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::dto::DashboardStats;
use crate::application::services::compute_stats;
use crate::domain::entities::{Estimate, Lead, Project};
use crate::domain::errors::ApiError;
use crate::domain::ports::ResourcePort;

/// Fetches projects, leads and estimates concurrently and aggregates them.
#[derive(Clone)]
pub struct LoadDashboardUseCase {
    projects: Arc<dyn ResourcePort<Project>>,
    leads: Arc<dyn ResourcePort<Lead>>,
    estimates: Arc<dyn ResourcePort<Estimate>>,
}

impl LoadDashboardUseCase {
    /// Creates new dashboard use case.
    #[must_use]
    pub fn new(
        projects: Arc<dyn ResourcePort<Project>>,
        leads: Arc<dyn ResourcePort<Lead>>,
        estimates: Arc<dyn ResourcePort<Estimate>>,
    ) -> Self {
        Self {
            projects,
            leads,
            estimates,
        }
    }

    /// Loads the dashboard counters.
    ///
    /// # Errors
    /// Returns the first failure; no partial stats are produced.
    pub async fn execute(&self) -> Result<DashboardStats, ApiError> {
        let (projects, leads, estimates) = tokio::try_join!(
            self.projects.list(),
            self.leads.list(),
            self.estimates.list()
        )
        .inspect_err(|e| warn!(error = %e, "Dashboard fetch failed"))?;

        let stats = compute_stats(&projects, &leads, &estimates);
        debug!(
            projects = stats.total_projects,
            leads = stats.total_leads,
            estimates = stats.total_estimates,
            "Dashboard loaded"
        );
        Ok(stats)
    }
}
