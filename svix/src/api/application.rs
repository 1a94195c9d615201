use super::PostOptions;
use crate::client::{Request, Svix};
use crate::error::Result;
use crate::method::RestMethod;
use crate::models::{ApplicationIn, ApplicationOut, ApplicationPatch, ListResponse, Ordering};

#[derive(Debug, Clone, Default)]
pub struct ApplicationListOptions {
    /// Page size.
    pub limit: Option<u64>,
    /// Cursor returned by the previous page.
    pub iterator: Option<String>,
    pub order: Option<Ordering>,
}

/// Operations on applications, the tenants messages are sent to.
pub struct Application<'a> {
    svix: &'a Svix,
}

impl<'a> Application<'a> {
    pub(crate) fn new(svix: &'a Svix) -> Self {
        Self { svix }
    }

    /// Lists applications.
    pub async fn list(
        &self,
        options: ApplicationListOptions,
    ) -> Result<ListResponse<ApplicationOut>> {
        let ApplicationListOptions {
            limit,
            iterator,
            order,
        } = options;

        Request::new(RestMethod::Get, "/api/v1/app")
            .with_optional_query_param("limit", limit)
            .with_optional_query_param("iterator", iterator)
            .with_optional_query_param("order", order)
            .execute(self.svix)
            .await
    }

    /// Creates an application.
    pub async fn create(
        &self,
        application_in: ApplicationIn,
        options: PostOptions,
    ) -> Result<ApplicationOut> {
        Request::new(RestMethod::Post, "/api/v1/app")
            .with_idempotency_key(options.idempotency_key)
            .with_body(&application_in)
            .execute(self.svix)
            .await
    }

    /// Creates an application, or returns the existing one with the same
    /// `uid`.
    pub async fn get_or_create(
        &self,
        application_in: ApplicationIn,
        options: PostOptions,
    ) -> Result<ApplicationOut> {
        Request::new(RestMethod::Post, "/api/v1/app")
            .with_query_param("get_if_exists", true)
            .with_idempotency_key(options.idempotency_key)
            .with_body(&application_in)
            .execute(self.svix)
            .await
    }

    /// Gets an application by ID or `uid`.
    pub async fn get(&self, app_id: impl Into<String>) -> Result<ApplicationOut> {
        Request::new(RestMethod::Get, "/api/v1/app/{app_id}")
            .with_path_param("app_id", app_id)
            .execute(self.svix)
            .await
    }

    /// Replaces an application.
    pub async fn update(
        &self,
        app_id: impl Into<String>,
        application_in: ApplicationIn,
    ) -> Result<ApplicationOut> {
        Request::new(RestMethod::Put, "/api/v1/app/{app_id}")
            .with_path_param("app_id", app_id)
            .with_body(&application_in)
            .execute(self.svix)
            .await
    }

    /// Updates the fields set in `application_patch`.
    pub async fn patch(
        &self,
        app_id: impl Into<String>,
        application_patch: ApplicationPatch,
    ) -> Result<ApplicationOut> {
        Request::new(RestMethod::Patch, "/api/v1/app/{app_id}")
            .with_path_param("app_id", app_id)
            .with_body(&application_patch)
            .execute(self.svix)
            .await
    }

    pub async fn delete(&self, app_id: impl Into<String>) -> Result<()> {
        Request::new(RestMethod::Delete, "/api/v1/app/{app_id}")
            .with_path_param("app_id", app_id)
            .execute(self.svix)
            .await
    }
}
