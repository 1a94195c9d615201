use super::PostOptions;
use crate::client::{Request, Svix};
use crate::error::Result;
use crate::method::RestMethod;
use crate::models::{
    BackgroundTaskOut, EndpointHeadersIn, EndpointHeadersOut, EndpointIn, EndpointOut,
    EndpointPatch, EndpointSecretOut, EndpointSecretRotateIn, EndpointUpdate, EventExampleIn,
    ListResponse, MessageOut, Ordering, RecoverIn, ReplayIn,
};

#[derive(Debug, Clone, Default)]
pub struct EndpointListOptions {
    pub limit: Option<u64>,
    pub iterator: Option<String>,
    pub order: Option<Ordering>,
}

/// Operations on an application's endpoints.
pub struct Endpoint<'a> {
    svix: &'a Svix,
}

impl<'a> Endpoint<'a> {
    pub(crate) fn new(svix: &'a Svix) -> Self {
        Self { svix }
    }

    pub async fn list(
        &self,
        app_id: impl Into<String>,
        options: EndpointListOptions,
    ) -> Result<ListResponse<EndpointOut>> {
        let EndpointListOptions {
            limit,
            iterator,
            order,
        } = options;

        Request::new(RestMethod::Get, "/api/v1/app/{app_id}/endpoint")
            .with_path_param("app_id", app_id)
            .with_optional_query_param("limit", limit)
            .with_optional_query_param("iterator", iterator)
            .with_optional_query_param("order", order)
            .execute(self.svix)
            .await
    }

    pub async fn create(
        &self,
        app_id: impl Into<String>,
        endpoint_in: EndpointIn,
        options: PostOptions,
    ) -> Result<EndpointOut> {
        Request::new(RestMethod::Post, "/api/v1/app/{app_id}/endpoint")
            .with_path_param("app_id", app_id)
            .with_idempotency_key(options.idempotency_key)
            .with_body(&endpoint_in)
            .execute(self.svix)
            .await
    }

    pub async fn get(
        &self,
        app_id: impl Into<String>,
        endpoint_id: impl Into<String>,
    ) -> Result<EndpointOut> {
        Request::new(RestMethod::Get, "/api/v1/app/{app_id}/endpoint/{endpoint_id}")
            .with_path_param("app_id", app_id)
            .with_path_param("endpoint_id", endpoint_id)
            .execute(self.svix)
            .await
    }

    pub async fn update(
        &self,
        app_id: impl Into<String>,
        endpoint_id: impl Into<String>,
        endpoint_update: EndpointUpdate,
    ) -> Result<EndpointOut> {
        Request::new(RestMethod::Put, "/api/v1/app/{app_id}/endpoint/{endpoint_id}")
            .with_path_param("app_id", app_id)
            .with_path_param("endpoint_id", endpoint_id)
            .with_body(&endpoint_update)
            .execute(self.svix)
            .await
    }

    pub async fn patch(
        &self,
        app_id: impl Into<String>,
        endpoint_id: impl Into<String>,
        endpoint_patch: EndpointPatch,
    ) -> Result<EndpointOut> {
        Request::new(RestMethod::Patch, "/api/v1/app/{app_id}/endpoint/{endpoint_id}")
            .with_path_param("app_id", app_id)
            .with_path_param("endpoint_id", endpoint_id)
            .with_body(&endpoint_patch)
            .execute(self.svix)
            .await
    }

    pub async fn delete(
        &self,
        app_id: impl Into<String>,
        endpoint_id: impl Into<String>,
    ) -> Result<()> {
        Request::new(RestMethod::Delete, "/api/v1/app/{app_id}/endpoint/{endpoint_id}")
            .with_path_param("app_id", app_id)
            .with_path_param("endpoint_id", endpoint_id)
            .execute(self.svix)
            .await
    }

    /// Gets the signing secret for an endpoint.
    pub async fn get_secret(
        &self,
        app_id: impl Into<String>,
        endpoint_id: impl Into<String>,
    ) -> Result<EndpointSecretOut> {
        Request::new(
            RestMethod::Get,
            "/api/v1/app/{app_id}/endpoint/{endpoint_id}/secret",
        )
        .with_path_param("app_id", app_id)
        .with_path_param("endpoint_id", endpoint_id)
        .execute(self.svix)
        .await
    }

    /// Rotates the signing secret. The previous secret stays valid for 24
    /// hours.
    pub async fn rotate_secret(
        &self,
        app_id: impl Into<String>,
        endpoint_id: impl Into<String>,
        endpoint_secret_rotate_in: EndpointSecretRotateIn,
        options: PostOptions,
    ) -> Result<()> {
        Request::new(
            RestMethod::Post,
            "/api/v1/app/{app_id}/endpoint/{endpoint_id}/secret/rotate",
        )
        .with_path_param("app_id", app_id)
        .with_path_param("endpoint_id", endpoint_id)
        .with_idempotency_key(options.idempotency_key)
        .with_body(&endpoint_secret_rotate_in)
        .execute(self.svix)
        .await
    }

    /// Resends failed messages since the given time.
    pub async fn recover(
        &self,
        app_id: impl Into<String>,
        endpoint_id: impl Into<String>,
        recover_in: RecoverIn,
        options: PostOptions,
    ) -> Result<BackgroundTaskOut> {
        Request::new(
            RestMethod::Post,
            "/api/v1/app/{app_id}/endpoint/{endpoint_id}/recover",
        )
        .with_path_param("app_id", app_id)
        .with_path_param("endpoint_id", endpoint_id)
        .with_idempotency_key(options.idempotency_key)
        .with_body(&recover_in)
        .execute(self.svix)
        .await
    }

    /// Sends messages that were never attempted on this endpoint.
    pub async fn replay_missing(
        &self,
        app_id: impl Into<String>,
        endpoint_id: impl Into<String>,
        replay_in: ReplayIn,
        options: PostOptions,
    ) -> Result<BackgroundTaskOut> {
        Request::new(
            RestMethod::Post,
            "/api/v1/app/{app_id}/endpoint/{endpoint_id}/replay-missing",
        )
        .with_path_param("app_id", app_id)
        .with_path_param("endpoint_id", endpoint_id)
        .with_idempotency_key(options.idempotency_key)
        .with_body(&replay_in)
        .execute(self.svix)
        .await
    }

    /// Gets the custom headers sent with each delivery.
    pub async fn get_headers(
        &self,
        app_id: impl Into<String>,
        endpoint_id: impl Into<String>,
    ) -> Result<EndpointHeadersOut> {
        Request::new(
            RestMethod::Get,
            "/api/v1/app/{app_id}/endpoint/{endpoint_id}/headers",
        )
        .with_path_param("app_id", app_id)
        .with_path_param("endpoint_id", endpoint_id)
        .execute(self.svix)
        .await
    }

    /// Replaces all custom headers.
    pub async fn update_headers(
        &self,
        app_id: impl Into<String>,
        endpoint_id: impl Into<String>,
        endpoint_headers_in: EndpointHeadersIn,
    ) -> Result<()> {
        Request::new(
            RestMethod::Put,
            "/api/v1/app/{app_id}/endpoint/{endpoint_id}/headers",
        )
        .with_path_param("app_id", app_id)
        .with_path_param("endpoint_id", endpoint_id)
        .with_body(&endpoint_headers_in)
        .execute(self.svix)
        .await
    }

    /// Merges the given headers into the existing ones.
    pub async fn patch_headers(
        &self,
        app_id: impl Into<String>,
        endpoint_id: impl Into<String>,
        endpoint_headers_in: EndpointHeadersIn,
    ) -> Result<()> {
        Request::new(
            RestMethod::Patch,
            "/api/v1/app/{app_id}/endpoint/{endpoint_id}/headers",
        )
        .with_path_param("app_id", app_id)
        .with_path_param("endpoint_id", endpoint_id)
        .with_body(&endpoint_headers_in)
        .execute(self.svix)
        .await
    }

    /// Sends an example message for an event type.
    pub async fn send_example(
        &self,
        app_id: impl Into<String>,
        endpoint_id: impl Into<String>,
        event_example_in: EventExampleIn,
        options: PostOptions,
    ) -> Result<MessageOut> {
        Request::new(
            RestMethod::Post,
            "/api/v1/app/{app_id}/endpoint/{endpoint_id}/send-example",
        )
        .with_path_param("app_id", app_id)
        .with_path_param("endpoint_id", endpoint_id)
        .with_idempotency_key(options.idempotency_key)
        .with_body(&event_example_in)
        .execute(self.svix)
        .await
    }
}
