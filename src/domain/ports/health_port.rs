//! Backend reachability port.

use async_trait::async_trait;

use crate::domain::errors::ApiError;

/// Banner the backend reports when reachable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
}

/// Port for probing the backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthPort: Send + Sync {
    /// Asks the backend for its banner.
    async fn check(&self) -> Result<ServiceInfo, ApiError>;
}
