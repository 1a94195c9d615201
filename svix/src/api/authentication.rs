use super::PostOptions;
use crate::client::{Request, Svix};
use crate::error::Result;
use crate::method::RestMethod;
use crate::models::{
    AppPortalAccessIn, AppPortalAccessOut, ApplicationTokenExpireIn, DashboardAccessOut,
};

/// Access tokens for the consumer-facing application portal.
pub struct Authentication<'a> {
    svix: &'a Svix,
}

impl<'a> Authentication<'a> {
    pub(crate) fn new(svix: &'a Svix) -> Self {
        Self { svix }
    }

    /// Issues a magic link and token for an application's portal.
    pub async fn app_portal_access(
        &self,
        app_id: impl Into<String>,
        app_portal_access_in: AppPortalAccessIn,
        options: PostOptions,
    ) -> Result<AppPortalAccessOut> {
        Request::new(RestMethod::Post, "/api/v1/auth/app-portal-access/{app_id}")
            .with_path_param("app_id", app_id)
            .with_idempotency_key(options.idempotency_key)
            .with_body(&app_portal_access_in)
            .execute(self.svix)
            .await
    }

    /// Expires every token issued for an application.
    pub async fn expire_all(
        &self,
        app_id: impl Into<String>,
        application_token_expire_in: ApplicationTokenExpireIn,
        options: PostOptions,
    ) -> Result<()> {
        Request::new(RestMethod::Post, "/api/v1/auth/app/{app_id}/expire-all")
            .with_path_param("app_id", app_id)
            .with_idempotency_key(options.idempotency_key)
            .with_body(&application_token_expire_in)
            .execute(self.svix)
            .await
    }

    /// Older form of [`app_portal_access`](Self::app_portal_access) without
    /// options.
    pub async fn dashboard_access(
        &self,
        app_id: impl Into<String>,
        options: PostOptions,
    ) -> Result<DashboardAccessOut> {
        Request::new(RestMethod::Post, "/api/v1/auth/dashboard-access/{app_id}")
            .with_path_param("app_id", app_id)
            .with_idempotency_key(options.idempotency_key)
            .execute(self.svix)
            .await
    }

    /// Invalidates the token used by this client.
    pub async fn logout(&self, options: PostOptions) -> Result<()> {
        Request::new(RestMethod::Post, "/api/v1/auth/logout")
            .with_idempotency_key(options.idempotency_key)
            .execute(self.svix)
            .await
    }
}
