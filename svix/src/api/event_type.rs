use super::PostOptions;
use crate::client::{Request, Svix};
use crate::error::Result;
use crate::method::RestMethod;
use crate::models::{
    EventTypeIn, EventTypeOut, EventTypePatch, EventTypeUpdate, ListResponse, Ordering,
};

#[derive(Debug, Clone, Default)]
pub struct EventTypeListOptions {
    pub limit: Option<u64>,
    pub iterator: Option<String>,
    pub order: Option<Ordering>,
    /// Include archived event types.
    pub include_archived: Option<bool>,
    /// Include the schemas in the response.
    pub with_content: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct EventTypeDeleteOptions {
    /// Delete permanently instead of archiving. Only allowed for event
    /// types created within the last hour.
    pub expunge: Option<bool>,
}

/// Operations on the event-type catalog.
pub struct EventType<'a> {
    svix: &'a Svix,
}

impl<'a> EventType<'a> {
    pub(crate) fn new(svix: &'a Svix) -> Self {
        Self { svix }
    }

    pub async fn list(&self, options: EventTypeListOptions) -> Result<ListResponse<EventTypeOut>> {
        let EventTypeListOptions {
            limit,
            iterator,
            order,
            include_archived,
            with_content,
        } = options;

        Request::new(RestMethod::Get, "/api/v1/event-type")
            .with_optional_query_param("limit", limit)
            .with_optional_query_param("iterator", iterator)
            .with_optional_query_param("order", order)
            .with_optional_query_param("include_archived", include_archived)
            .with_optional_query_param("with_content", with_content)
            .execute(self.svix)
            .await
    }

    pub async fn create(
        &self,
        event_type_in: EventTypeIn,
        options: PostOptions,
    ) -> Result<EventTypeOut> {
        Request::new(RestMethod::Post, "/api/v1/event-type")
            .with_idempotency_key(options.idempotency_key)
            .with_body(&event_type_in)
            .execute(self.svix)
            .await
    }

    pub async fn get(&self, event_type_name: impl Into<String>) -> Result<EventTypeOut> {
        Request::new(RestMethod::Get, "/api/v1/event-type/{event_type_name}")
            .with_path_param("event_type_name", event_type_name)
            .execute(self.svix)
            .await
    }

    pub async fn update(
        &self,
        event_type_name: impl Into<String>,
        event_type_update: EventTypeUpdate,
    ) -> Result<EventTypeOut> {
        Request::new(RestMethod::Put, "/api/v1/event-type/{event_type_name}")
            .with_path_param("event_type_name", event_type_name)
            .with_body(&event_type_update)
            .execute(self.svix)
            .await
    }

    pub async fn patch(
        &self,
        event_type_name: impl Into<String>,
        event_type_patch: EventTypePatch,
    ) -> Result<EventTypeOut> {
        Request::new(RestMethod::Patch, "/api/v1/event-type/{event_type_name}")
            .with_path_param("event_type_name", event_type_name)
            .with_body(&event_type_patch)
            .execute(self.svix)
            .await
    }

    /// Archives an event type, or deletes it when `expunge` is set.
    pub async fn delete(
        &self,
        event_type_name: impl Into<String>,
        options: EventTypeDeleteOptions,
    ) -> Result<()> {
        Request::new(RestMethod::Delete, "/api/v1/event-type/{event_type_name}")
            .with_path_param("event_type_name", event_type_name)
            .with_optional_query_param("expunge", options.expunge)
            .execute(self.svix)
            .await
    }
}
