//! Resource port definition.

use async_trait::async_trait;

use crate::domain::entities::Entity;
use crate::domain::errors::ApiError;

/// Port for create/read/update/delete access to one collection.
#[async_trait]
pub trait ResourcePort<E: Entity>: Send + Sync {
    /// Fetches every record of the collection.
    async fn list(&self) -> Result<Vec<E>, ApiError>;

    /// Fetches one record.
    async fn get(&self, id: &str) -> Result<E, ApiError>;

    /// Creates a record and returns it as stored.
    async fn create(&self, draft: &E::Draft) -> Result<E, ApiError>;

    /// Replaces the editable fields of a record and returns it as stored.
    async fn update(&self, id: &str, draft: &E::Draft) -> Result<E, ApiError>;

    /// Deletes a record.
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::RwLock;

    /// In-memory port for testing. Creates and updates echo a preset record.
    pub struct InMemoryResourcePort<E: Entity> {
        records: Arc<RwLock<Vec<E>>>,
        submitted: Arc<RwLock<Vec<E::Draft>>>,
        should_fail: Arc<AtomicBool>,
    }

    impl<E: Entity> InMemoryResourcePort<E> {
        /// Creates a port holding `records`.
        pub fn new(records: Vec<E>) -> Self {
            Self {
                records: Arc::new(RwLock::new(records)),
                submitted: Arc::new(RwLock::new(Vec::new())),
                should_fail: Arc::new(AtomicBool::new(false)),
            }
        }

        /// Creates a port whose every call fails with a network error.
        pub fn failing() -> Self {
            let port = Self::new(Vec::new());
            port.set_should_fail(true);
            port
        }

        /// Sets failure behavior.
        pub fn set_should_fail(&self, value: bool) {
            self.should_fail.store(value, Ordering::SeqCst);
        }

        /// Returns drafts passed to create and update.
        pub async fn submitted(&self) -> Vec<E::Draft> {
            self.submitted.read().await.clone()
        }

        /// Returns the current records.
        pub async fn records(&self) -> Vec<E> {
            self.records.read().await.clone()
        }

        fn check(&self) -> Result<(), ApiError> {
            if self.should_fail.load(Ordering::SeqCst) {
                Err(ApiError::network("mock failure"))
            } else {
                Ok(())
            }
        }

        async fn echo(&self, id: Option<&str>, draft: &E::Draft) -> Result<E, ApiError> {
            self.check()?;
            self.submitted.write().await.push(draft.clone());
            let records = self.records.read().await;
            let found = match id {
                Some(id) => records.iter().find(|r| r.id() == id),
                None => records.first(),
            };
            found
                .cloned()
                .ok_or_else(|| ApiError::not_found(E::KIND.singular(), id.unwrap_or_default()))
        }
    }

    #[async_trait]
    impl<E: Entity> ResourcePort<E> for InMemoryResourcePort<E> {
        async fn list(&self) -> Result<Vec<E>, ApiError> {
            self.check()?;
            Ok(self.records.read().await.clone())
        }

        async fn get(&self, id: &str) -> Result<E, ApiError> {
            self.check()?;
            self.records
                .read()
                .await
                .iter()
                .find(|r| r.id() == id)
                .cloned()
                .ok_or_else(|| ApiError::not_found(E::KIND.singular(), id))
        }

        async fn create(&self, draft: &E::Draft) -> Result<E, ApiError> {
            self.echo(None, draft).await
        }

        async fn update(&self, id: &str, draft: &E::Draft) -> Result<E, ApiError> {
            self.echo(Some(id), draft).await
        }

        async fn delete(&self, id: &str) -> Result<(), ApiError> {
            self.check()?;
            let mut records = self.records.write().await;
            let before = records.len();
            records.retain(|r| r.id() != id);
            if records.len() == before {
                return Err(ApiError::not_found(E::KIND.singular(), id));
            }
            Ok(())
        }
    }
}
