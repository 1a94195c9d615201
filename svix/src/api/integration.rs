use super::PostOptions;
use crate::client::{Request, Svix};
use crate::error::Result;
use crate::method::RestMethod;
use crate::models::{
    IntegrationIn, IntegrationKeyOut, IntegrationOut, IntegrationUpdate, ListResponse, Ordering,
};

#[derive(Debug, Clone, Default)]
pub struct IntegrationListOptions {
    pub limit: Option<u64>,
    pub iterator: Option<String>,
    pub order: Option<Ordering>,
}

/// Operations on an application's integrations.
pub struct Integration<'a> {
    svix: &'a Svix,
}

impl<'a> Integration<'a> {
    pub(crate) fn new(svix: &'a Svix) -> Self {
        Self { svix }
    }

    pub async fn list(
        &self,
        app_id: impl Into<String>,
        options: IntegrationListOptions,
    ) -> Result<ListResponse<IntegrationOut>> {
        let IntegrationListOptions {
            limit,
            iterator,
            order,
        } = options;

        Request::new(RestMethod::Get, "/api/v1/app/{app_id}/integration")
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
        integration_in: IntegrationIn,
        options: PostOptions,
    ) -> Result<IntegrationOut> {
        Request::new(RestMethod::Post, "/api/v1/app/{app_id}/integration")
            .with_path_param("app_id", app_id)
            .with_idempotency_key(options.idempotency_key)
            .with_body(&integration_in)
            .execute(self.svix)
            .await
    }

    pub async fn get(
        &self,
        app_id: impl Into<String>,
        integ_id: impl Into<String>,
    ) -> Result<IntegrationOut> {
        Request::new(RestMethod::Get, "/api/v1/app/{app_id}/integration/{integ_id}")
            .with_path_param("app_id", app_id)
            .with_path_param("integ_id", integ_id)
            .execute(self.svix)
            .await
    }

    pub async fn update(
        &self,
        app_id: impl Into<String>,
        integ_id: impl Into<String>,
        integration_update: IntegrationUpdate,
    ) -> Result<IntegrationOut> {
        Request::new(RestMethod::Put, "/api/v1/app/{app_id}/integration/{integ_id}")
            .with_path_param("app_id", app_id)
            .with_path_param("integ_id", integ_id)
            .with_body(&integration_update)
            .execute(self.svix)
            .await
    }

    pub async fn delete(&self, app_id: impl Into<String>, integ_id: impl Into<String>) -> Result<()> {
        Request::new(RestMethod::Delete, "/api/v1/app/{app_id}/integration/{integ_id}")
            .with_path_param("app_id", app_id)
            .with_path_param("integ_id", integ_id)
            .execute(self.svix)
            .await
    }

    /// Gets the integration's API key.
    pub async fn get_key(
        &self,
        app_id: impl Into<String>,
        integ_id: impl Into<String>,
    ) -> Result<IntegrationKeyOut> {
        Request::new(
            RestMethod::Get,
            "/api/v1/app/{app_id}/integration/{integ_id}/key",
        )
        .with_path_param("app_id", app_id)
        .with_path_param("integ_id", integ_id)
        .execute(self.svix)
        .await
    }

    /// Replaces the integration's API key and returns the new one.
    pub async fn rotate_key(
        &self,
        app_id: impl Into<String>,
        integ_id: impl Into<String>,
        options: PostOptions,
    ) -> Result<IntegrationKeyOut> {
        Request::new(
            RestMethod::Post,
            "/api/v1/app/{app_id}/integration/{integ_id}/key/rotate",
        )
        .with_path_param("app_id", app_id)
        .with_path_param("integ_id", integ_id)
        .with_idempotency_key(options.idempotency_key)
        .execute(self.svix)
        .await
    }
}
