//! Record listing and editing use case.

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{debug, info, warn};

use crate::application::dto::{RecordCard, RecordForm, RecordSet, References, SelectOption};
use crate::application::services::{Presentable, references_of};
use crate::domain::entities::{Estimate, Invoice, Lead, Material, Project, Proposal, ResourceKind};
use crate::domain::errors::ApiError;
use crate::domain::ports::ResourcePort;

/// One resource port per collection.
#[derive(Clone)]
#[allow(missing_docs)]
pub struct ResourcePorts {
    pub projects: Arc<dyn ResourcePort<Project>>,
    pub leads: Arc<dyn ResourcePort<Lead>>,
    pub estimates: Arc<dyn ResourcePort<Estimate>>,
    pub materials: Arc<dyn ResourcePort<Material>>,
    pub proposals: Arc<dyn ResourcePort<Proposal>>,
    pub invoices: Arc<dyn ResourcePort<Invoice>>,
}

macro_rules! dispatch {
    ($self:ident, $kind:expr, $method:ident($($arg:expr),*)) => {
        match $kind {
            ResourceKind::Projects => Self::$method(&$self.ports.projects $(, $arg)*).await,
            ResourceKind::Leads => Self::$method(&$self.ports.leads $(, $arg)*).await,
            ResourceKind::Estimates => Self::$method(&$self.ports.estimates $(, $arg)*).await,
            ResourceKind::Materials => Self::$method(&$self.ports.materials $(, $arg)*).await,
            ResourceKind::Proposals => Self::$method(&$self.ports.proposals $(, $arg)*).await,
            ResourceKind::Invoices => Self::$method(&$self.ports.invoices $(, $arg)*).await,
        }
    };
}

/// Loads, saves and deletes records of any kind through its port.
#[derive(Clone)]
pub struct ManageRecordsUseCase {
    ports: ResourcePorts,
}

impl ManageRecordsUseCase {
    /// Creates new records use case.
    #[must_use]
    pub const fn new(ports: ResourcePorts) -> Self {
        Self { ports }
    }

    /// Loads a collection as cards, with the options of the collections it
    /// refers to fetched concurrently.
    ///
    /// # Errors
    /// Returns error if the collection itself cannot be fetched. Failed
    /// reference fetches only leave their options empty.
    pub async fn load(&self, kind: ResourceKind) -> Result<RecordSet, ApiError> {
        let (cards, references) = dispatch!(self, kind, load_typed(self.references(kind)))
            .inspect_err(|e| warn!(kind = %kind, error = %e, "Failed to load records"))?;
        debug!(kind = %kind, count = cards.len(), "Records loaded");

        Ok(RecordSet {
            kind,
            cards,
            references,
        })
    }

    /// Creates a record when `id` is `None`, otherwise updates it.
    ///
    /// # Errors
    /// Returns error if the port rejects the call.
    pub async fn save(
        &self,
        kind: ResourceKind,
        id: Option<&str>,
        form: &RecordForm,
    ) -> Result<(), ApiError> {
        dispatch!(self, kind, save_typed(id, form))
            .inspect_err(|e| warn!(kind = %kind, error = %e, "Failed to save record"))?;
        info!(kind = %kind, updated = id.is_some(), "Record saved");
        Ok(())
    }

    /// Deletes a record.
    ///
    /// # Errors
    /// Returns error if the port rejects the call.
    pub async fn delete(&self, kind: ResourceKind, id: &str) -> Result<(), ApiError> {
        dispatch!(self, kind, delete_typed(id))
            .inspect_err(|e| warn!(kind = %kind, id, error = %e, "Failed to delete record"))?;
        info!(kind = %kind, id, "Record deleted");
        Ok(())
    }

    async fn references(&self, kind: ResourceKind) -> References {
        let kinds = references_of(kind);
        let fetched = join_all(kinds.iter().map(|k| self.options(*k))).await;

        let mut references = References::default();
        for (kind, options) in kinds.iter().zip(fetched) {
            references.insert(*kind, options);
        }
        references
    }

    async fn options(&self, kind: ResourceKind) -> Vec<SelectOption> {
        dispatch!(self, kind, options_typed()).unwrap_or_else(|e| {
            warn!(kind = %kind, error = %e, "Failed to load reference options");
            Vec::new()
        })
    }

    async fn load_typed<E: Presentable>(
        port: &Arc<dyn ResourcePort<E>>,
        references: impl Future<Output = References>,
    ) -> Result<(Vec<RecordCard>, References), ApiError> {
        let (records, references) = tokio::join!(port.list(), references);
        let cards = records?.iter().map(|r| r.card(&references)).collect();
        Ok((cards, references))
    }

    async fn options_typed<E: Presentable>(
        port: &Arc<dyn ResourcePort<E>>,
    ) -> Result<Vec<SelectOption>, ApiError> {
        Ok(port.list().await?.iter().map(Presentable::option).collect())
    }

    async fn save_typed<E: Presentable>(
        port: &Arc<dyn ResourcePort<E>>,
        id: Option<&str>,
        form: &RecordForm,
    ) -> Result<(), ApiError> {
        let draft = E::draft_from_form(form);
        match id {
            Some(id) => port.update(id, &draft).await?,
            None => port.create(&draft).await?,
        };
        Ok(())
    }

    async fn delete_typed<E: Presentable>(
        port: &Arc<dyn ResourcePort<E>>,
        id: &str,
    ) -> Result<(), ApiError> {
        port.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::FormValues;
    use crate::application::services::blank_form;
    use crate::application::services::dashboard_stats::fixtures::{estimate, lead, project};
    use crate::domain::ports::mocks::InMemoryResourcePort;

    struct Fixture {
        projects: Arc<InMemoryResourcePort<Project>>,
        leads: Arc<InMemoryResourcePort<Lead>>,
        estimates: Arc<InMemoryResourcePort<Estimate>>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                projects: Arc::new(InMemoryResourcePort::new(vec![
                    project("p1", "Kitchen Remodel", "active"),
                    project("p2", "Garage", "completed"),
                ])),
                leads: Arc::new(InMemoryResourcePort::new(vec![lead("l1", "new")])),
                estimates: Arc::new(InMemoryResourcePort::new(vec![
                    estimate("e1", "p1", "draft"),
                    estimate("e2", "p9", "sent"),
                ])),
            }
        }

        fn use_case(&self) -> ManageRecordsUseCase {
            ManageRecordsUseCase::new(ResourcePorts {
                projects: self.projects.clone(),
                leads: self.leads.clone(),
                estimates: self.estimates.clone(),
                materials: Arc::new(InMemoryResourcePort::<Material>::new(Vec::new())),
                proposals: Arc::new(InMemoryResourcePort::<Proposal>::new(Vec::new())),
                invoices: Arc::new(InMemoryResourcePort::<Invoice>::new(Vec::new())),
            })
        }
    }

    #[tokio::test]
    async fn test_load_resolves_references() {
        let fixture = Fixture::new();

        let set = fixture.use_case().load(ResourceKind::Estimates).await.unwrap();

        assert_eq!(set.kind, ResourceKind::Estimates);
        assert_eq!(set.cards.len(), 2);
        assert_eq!(set.cards[0].subtitle.as_deref(), Some("Kitchen Remodel"));
        assert_eq!(set.cards[1].subtitle.as_deref(), Some("Unknown Project"));
        assert_eq!(set.references.options(ResourceKind::Projects).len(), 2);
        assert_eq!(set.references.options(ResourceKind::Leads).len(), 1);
    }

    #[tokio::test]
    async fn test_reference_failure_keeps_collection() {
        let fixture = Fixture::new();
        fixture.projects.set_should_fail(true);

        let set = fixture.use_case().load(ResourceKind::Estimates).await.unwrap();

        assert_eq!(set.cards.len(), 2);
        assert!(set.references.options(ResourceKind::Projects).is_empty());
        assert_eq!(set.cards[0].subtitle.as_deref(), Some("Unknown Project"));
    }

    #[tokio::test]
    async fn test_collection_failure_is_returned() {
        let fixture = Fixture::new();
        fixture.leads.set_should_fail(true);

        let result = fixture.use_case().load(ResourceKind::Leads).await;

        assert!(matches!(result, Err(ApiError::Network { .. })));
    }

    #[tokio::test]
    async fn test_save_routes_create_and_update() {
        let fixture = Fixture::new();
        let use_case = fixture.use_case();
        let mut form = blank_form(ResourceKind::Projects);
        form.values = FormValues::default()
            .with("name", "Porch")
            .with("address", "9 Bay Rd")
            .with("client_id", "c-2")
            .with("project_type", "renovation")
            .with("estimated_cost", "$4,500");

        use_case.save(ResourceKind::Projects, None, &form).await.unwrap();
        use_case
            .save(ResourceKind::Projects, Some("p2"), &form)
            .await
            .unwrap();

        let submitted = fixture.projects.submitted().await;
        assert_eq!(submitted.len(), 2);
        assert_eq!(submitted[0].name, "Porch");
        assert_eq!(submitted[0].estimated_cost, rust_decimal::Decimal::from(4500));
    }

    #[tokio::test]
    async fn test_save_failure_is_returned() {
        let fixture = Fixture::new();
        fixture.projects.set_should_fail(true);

        let result = fixture
            .use_case()
            .save(ResourceKind::Projects, None, &blank_form(ResourceKind::Projects))
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let fixture = Fixture::new();

        fixture
            .use_case()
            .delete(ResourceKind::Estimates, "e2")
            .await
            .unwrap();

        let remaining = fixture.estimates.records().await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "e1");
    }
}
