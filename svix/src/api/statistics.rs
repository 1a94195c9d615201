use super::PostOptions;
use crate::client::{Request, Svix};
use crate::error::Result;
use crate::method::RestMethod;
use crate::models::{AppUsageStatsIn, AppUsageStatsOut, BackgroundTaskOut};

/// Usage statistics for the environment.
pub struct Statistics<'a> {
    svix: &'a Svix,
}

impl<'a> Statistics<'a> {
    pub(crate) fn new(svix: &'a Svix) -> Self {
        Self { svix }
    }

    /// Starts a background task that aggregates message usage per
    /// application over the given window.
    pub async fn aggregate_app_stats(
        &self,
        stats_in: AppUsageStatsIn,
        options: PostOptions,
    ) -> Result<AppUsageStatsOut> {
        Request::new(RestMethod::Post, "/api/v1/stats/usage/app")
            .with_idempotency_key(options.idempotency_key)
            .with_body(&stats_in)
            .execute(self.svix)
            .await
    }

    /// Starts a background task that lists the event types each application
    /// has sent.
    pub async fn aggregate_event_types(&self) -> Result<BackgroundTaskOut> {
        Request::new(RestMethod::Put, "/api/v1/stats/usage/event-types")
            .execute(self.svix)
            .await
    }
}
