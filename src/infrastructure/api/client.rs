//! HTTP client for the Crewlo API.

use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{ApiInfo, DeleteResponse, ErrorResponse};
use crate::domain::entities::Entity;
use crate::domain::errors::ApiError;
use crate::domain::ports::{HealthPort, ResourcePort, ServiceInfo};

const API_PREFIX: &str = "/api";
const USER_AGENT: &str = concat!("crewlo/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client bound to one API base URL.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates client for `base_url`, e.g. `http://localhost:8001`.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the port for `E`, or `None` when the kind has no API endpoint.
    #[must_use]
    pub fn resource<E: Entity>(&self) -> Option<HttpResource<E>> {
        E::KIND.path().map(|path| HttpResource {
            client: self.clone(),
            path,
            _entity: PhantomData,
        })
    }

    /// Calls `GET /api/` and returns the service banner.
    ///
    /// # Errors
    /// Returns error if the API is unreachable or answers with an error.
    pub async fn health_check(&self) -> Result<ApiInfo, ApiError> {
        debug!("Performing API health check");
        let response = self
            .client
            .get(self.url(&format!("{API_PREFIX}/")))
            .send()
            .await
            .map_err(map_transport_error)?;
        decode(check_status(response, "api", "").await?).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl HealthPort for ApiClient {
    async fn check(&self) -> Result<ServiceInfo, ApiError> {
        let info = self.health_check().await?;
        Ok(ServiceInfo {
            message: info.message,
            version: info.version,
        })
    }
}

fn map_transport_error(e: reqwest::Error) -> ApiError {
    warn!(error = %e, "Failed to reach API");
    if e.is_connect() {
        ApiError::network("failed to connect to API")
    } else {
        ApiError::network(e.to_string())
    }
}

async fn check_status(response: Response, resource: &str, id: &str) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND && !id.is_empty() {
        return Err(ApiError::not_found(resource, id));
    }

    let detail = match response.json::<ErrorResponse>().await {
        Ok(body) => body.message(),
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    };
    warn!(status = status.as_u16(), %detail, "API rejected request");
    Err(ApiError::rejected(status.as_u16(), detail))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| {
        warn!(error = %e, "Failed to parse API response");
        ApiError::decode(e.to_string())
    })
}

/// [`ResourcePort`] over one `/api/<resource>` collection.
pub struct HttpResource<E> {
    client: ApiClient,
    path: &'static str,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> HttpResource<E> {
    fn collection_url(&self) -> String {
        self.client.url(&format!("{API_PREFIX}/{}", self.path))
    }

    fn record_url(&self, id: &str) -> String {
        self.client.url(&format!("{API_PREFIX}/{}/{id}", self.path))
    }
}

#[async_trait]
impl<E: Entity> ResourcePort<E> for HttpResource<E> {
    async fn list(&self) -> Result<Vec<E>, ApiError> {
        debug!(resource = self.path, "Fetching collection");
        let response = self
            .client
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(map_transport_error)?;
        decode(check_status(response, E::KIND.singular(), "").await?).await
    }

    async fn get(&self, id: &str) -> Result<E, ApiError> {
        let response = self
            .client
            .client
            .get(self.record_url(id))
            .send()
            .await
            .map_err(map_transport_error)?;
        decode(check_status(response, E::KIND.singular(), id).await?).await
    }

    async fn create(&self, draft: &E::Draft) -> Result<E, ApiError> {
        debug!(resource = self.path, "Creating record");
        let response = self
            .client
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode(check_status(response, E::KIND.singular(), "").await?).await
    }

    async fn update(&self, id: &str, draft: &E::Draft) -> Result<E, ApiError> {
        debug!(resource = self.path, id, "Updating record");
        let response = self
            .client
            .client
            .put(self.record_url(id))
            .json(draft)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode(check_status(response, E::KIND.singular(), id).await?).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        debug!(resource = self.path, id, "Deleting record");
        let response = self
            .client
            .client
            .delete(self.record_url(id))
            .send()
            .await
            .map_err(map_transport_error)?;
        let body: DeleteResponse = decode(check_status(response, E::KIND.singular(), id).await?).await?;
        debug!(message = %body.message, "Record deleted");
        Ok(())
    }
}
