use super::PostOptions;
use crate::client::{Request, Svix};
use crate::error::Result;
use crate::method::RestMethod;
use crate::models::{
    ListResponse, OperationalWebhookEndpointIn, OperationalWebhookEndpointOut,
    OperationalWebhookEndpointSecretIn, OperationalWebhookEndpointSecretOut,
    OperationalWebhookEndpointUpdate, Ordering,
};

#[derive(Debug, Clone, Default)]
pub struct OperationalWebhookEndpointListOptions {
    pub limit: Option<u64>,
    pub iterator: Option<String>,
    pub order: Option<Ordering>,
}

/// Operations on the environment's operational webhook endpoints.
pub struct OperationalWebhookEndpoint<'a> {
    svix: &'a Svix,
}

impl<'a> OperationalWebhookEndpoint<'a> {
    pub(crate) fn new(svix: &'a Svix) -> Self {
        Self { svix }
    }

    pub async fn list(
        &self,
        options: OperationalWebhookEndpointListOptions,
    ) -> Result<ListResponse<OperationalWebhookEndpointOut>> {
        let OperationalWebhookEndpointListOptions {
            limit,
            iterator,
            order,
        } = options;

        Request::new(RestMethod::Get, "/api/v1/operational-webhook/endpoint")
            .with_optional_query_param("limit", limit)
            .with_optional_query_param("iterator", iterator)
            .with_optional_query_param("order", order)
            .execute(self.svix)
            .await
    }

    pub async fn create(
        &self,
        endpoint_in: OperationalWebhookEndpointIn,
        options: PostOptions,
    ) -> Result<OperationalWebhookEndpointOut> {
        Request::new(RestMethod::Post, "/api/v1/operational-webhook/endpoint")
            .with_idempotency_key(options.idempotency_key)
            .with_body(&endpoint_in)
            .execute(self.svix)
            .await
    }

    pub async fn get(
        &self,
        endpoint_id: impl Into<String>,
    ) -> Result<OperationalWebhookEndpointOut> {
        Request::new(
            RestMethod::Get,
            "/api/v1/operational-webhook/endpoint/{endpoint_id}",
        )
        .with_path_param("endpoint_id", endpoint_id)
        .execute(self.svix)
        .await
    }

    pub async fn update(
        &self,
        endpoint_id: impl Into<String>,
        endpoint_update: OperationalWebhookEndpointUpdate,
    ) -> Result<OperationalWebhookEndpointOut> {
        Request::new(
            RestMethod::Put,
            "/api/v1/operational-webhook/endpoint/{endpoint_id}",
        )
        .with_path_param("endpoint_id", endpoint_id)
        .with_body(&endpoint_update)
        .execute(self.svix)
        .await
    }

    pub async fn delete(&self, endpoint_id: impl Into<String>) -> Result<()> {
        Request::new(
            RestMethod::Delete,
            "/api/v1/operational-webhook/endpoint/{endpoint_id}",
        )
        .with_path_param("endpoint_id", endpoint_id)
        .execute(self.svix)
        .await
    }

    /// Gets the secret used to sign this endpoint's webhooks.
    pub async fn get_secret(
        &self,
        endpoint_id: impl Into<String>,
    ) -> Result<OperationalWebhookEndpointSecretOut> {
        Request::new(
            RestMethod::Get,
            "/api/v1/operational-webhook/endpoint/{endpoint_id}/secret",
        )
        .with_path_param("endpoint_id", endpoint_id)
        .execute(self.svix)
        .await
    }

    /// Replaces the signing secret. The previous secret stays valid for 24
    /// hours.
    pub async fn rotate_secret(
        &self,
        endpoint_id: impl Into<String>,
        secret_in: OperationalWebhookEndpointSecretIn,
        options: PostOptions,
    ) -> Result<()> {
        Request::new(
            RestMethod::Post,
            "/api/v1/operational-webhook/endpoint/{endpoint_id}/secret/rotate",
        )
        .with_path_param("endpoint_id", endpoint_id)
        .with_idempotency_key(options.idempotency_key)
        .with_body(&secret_in)
        .execute(self.svix)
        .await
    }
}
