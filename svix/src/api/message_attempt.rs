use chrono::{DateTime, Utc};

use super::PostOptions;
use crate::client::{Request, Svix};
use crate::error::Result;
use crate::method::RestMethod;
use crate::models::{
    EndpointMessageOut, ListResponse, MessageAttemptOut, MessageEndpointOut, MessageStatus,
    StatusCodeClass,
};

/// Filters for listing delivery attempts.
#[derive(Debug, Clone, Default)]
pub struct MessageAttemptListOptions {
    pub limit: Option<u64>,
    pub iterator: Option<String>,
    pub status: Option<MessageStatus>,
    pub status_code_class: Option<StatusCodeClass>,
    pub channel: Option<String>,
    pub tag: Option<String>,
    /// Only attempts to this endpoint. Ignored when listing by endpoint.
    pub endpoint_id: Option<String>,
    pub before: Option<DateTime<Utc>>,
    pub after: Option<DateTime<Utc>>,
    pub with_content: Option<bool>,
    pub event_types: Option<Vec<String>>,
}

/// Filters for listing the messages attempted on one endpoint.
#[derive(Debug, Clone, Default)]
pub struct AttemptedMessagesListOptions {
    pub limit: Option<u64>,
    pub iterator: Option<String>,
    pub channel: Option<String>,
    pub tag: Option<String>,
    pub status: Option<MessageStatus>,
    pub before: Option<DateTime<Utc>>,
    pub after: Option<DateTime<Utc>>,
    pub with_content: Option<bool>,
    pub event_types: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct DestinationsListOptions {
    pub limit: Option<u64>,
    pub iterator: Option<String>,
}

/// Operations on delivery attempts.
pub struct MessageAttempt<'a> {
    svix: &'a Svix,
}

impl<'a> MessageAttempt<'a> {
    pub(crate) fn new(svix: &'a Svix) -> Self {
        Self { svix }
    }

    /// Lists attempts made to one endpoint.
    pub async fn list_by_endpoint(
        &self,
        app_id: impl Into<String>,
        endpoint_id: impl Into<String>,
        options: MessageAttemptListOptions,
    ) -> Result<ListResponse<MessageAttemptOut>> {
        let MessageAttemptListOptions {
            limit,
            iterator,
            status,
            status_code_class,
            channel,
            tag,
            endpoint_id: _,
            before,
            after,
            with_content,
            event_types,
        } = options;

        Request::new(
            RestMethod::Get,
            "/api/v1/app/{app_id}/attempt/endpoint/{endpoint_id}",
        )
        .with_path_param("app_id", app_id)
        .with_path_param("endpoint_id", endpoint_id)
        .with_optional_query_param("limit", limit)
        .with_optional_query_param("iterator", iterator)
        .with_optional_query_param("status", status)
        .with_optional_query_param("status_code_class", status_code_class)
        .with_optional_query_param("channel", channel)
        .with_optional_query_param("tag", tag)
        .with_optional_query_param("before", before)
        .with_optional_query_param("after", after)
        .with_optional_query_param("with_content", with_content)
        .with_optional_query_list("event_types", event_types)
        .execute(self.svix)
        .await
    }

    /// Lists attempts made for one message.
    pub async fn list_by_msg(
        &self,
        app_id: impl Into<String>,
        msg_id: impl Into<String>,
        options: MessageAttemptListOptions,
    ) -> Result<ListResponse<MessageAttemptOut>> {
        let MessageAttemptListOptions {
            limit,
            iterator,
            status,
            status_code_class,
            channel,
            tag,
            endpoint_id,
            before,
            after,
            with_content,
            event_types,
        } = options;

        Request::new(RestMethod::Get, "/api/v1/app/{app_id}/attempt/msg/{msg_id}")
            .with_path_param("app_id", app_id)
            .with_path_param("msg_id", msg_id)
            .with_optional_query_param("limit", limit)
            .with_optional_query_param("iterator", iterator)
            .with_optional_query_param("status", status)
            .with_optional_query_param("status_code_class", status_code_class)
            .with_optional_query_param("channel", channel)
            .with_optional_query_param("tag", tag)
            .with_optional_query_param("endpoint_id", endpoint_id)
            .with_optional_query_param("before", before)
            .with_optional_query_param("after", after)
            .with_optional_query_param("with_content", with_content)
            .with_optional_query_list("event_types", event_types)
            .execute(self.svix)
            .await
    }

    /// Lists messages attempted on an endpoint, with their latest status.
    pub async fn list_attempted_messages(
        &self,
        app_id: impl Into<String>,
        endpoint_id: impl Into<String>,
        options: AttemptedMessagesListOptions,
    ) -> Result<ListResponse<EndpointMessageOut>> {
        let AttemptedMessagesListOptions {
            limit,
            iterator,
            channel,
            tag,
            status,
            before,
            after,
            with_content,
            event_types,
        } = options;

        Request::new(
            RestMethod::Get,
            "/api/v1/app/{app_id}/endpoint/{endpoint_id}/msg",
        )
        .with_path_param("app_id", app_id)
        .with_path_param("endpoint_id", endpoint_id)
        .with_optional_query_param("limit", limit)
        .with_optional_query_param("iterator", iterator)
        .with_optional_query_param("channel", channel)
        .with_optional_query_param("tag", tag)
        .with_optional_query_param("status", status)
        .with_optional_query_param("before", before)
        .with_optional_query_param("after", after)
        .with_optional_query_param("with_content", with_content)
        .with_optional_query_list("event_types", event_types)
        .execute(self.svix)
        .await
    }

    /// Lists the endpoints a message was attempted on.
    pub async fn list_attempted_destinations(
        &self,
        app_id: impl Into<String>,
        msg_id: impl Into<String>,
        options: DestinationsListOptions,
    ) -> Result<ListResponse<MessageEndpointOut>> {
        Request::new(RestMethod::Get, "/api/v1/app/{app_id}/msg/{msg_id}/endpoint")
            .with_path_param("app_id", app_id)
            .with_path_param("msg_id", msg_id)
            .with_optional_query_param("limit", options.limit)
            .with_optional_query_param("iterator", options.iterator)
            .execute(self.svix)
            .await
    }

    pub async fn get(
        &self,
        app_id: impl Into<String>,
        msg_id: impl Into<String>,
        attempt_id: impl Into<String>,
    ) -> Result<MessageAttemptOut> {
        Request::new(
            RestMethod::Get,
            "/api/v1/app/{app_id}/msg/{msg_id}/attempt/{attempt_id}",
        )
        .with_path_param("app_id", app_id)
        .with_path_param("msg_id", msg_id)
        .with_path_param("attempt_id", attempt_id)
        .execute(self.svix)
        .await
    }

    /// Deletes the stored response body of an attempt.
    pub async fn expunge_content(
        &self,
        app_id: impl Into<String>,
        msg_id: impl Into<String>,
        attempt_id: impl Into<String>,
    ) -> Result<()> {
        Request::new(
            RestMethod::Delete,
            "/api/v1/app/{app_id}/msg/{msg_id}/attempt/{attempt_id}/content",
        )
        .with_path_param("app_id", app_id)
        .with_path_param("msg_id", msg_id)
        .with_path_param("attempt_id", attempt_id)
        .execute(self.svix)
        .await
    }

    /// Resends a message to one endpoint.
    pub async fn resend(
        &self,
        app_id: impl Into<String>,
        msg_id: impl Into<String>,
        endpoint_id: impl Into<String>,
        options: PostOptions,
    ) -> Result<()> {
        Request::new(
            RestMethod::Post,
            "/api/v1/app/{app_id}/msg/{msg_id}/endpoint/{endpoint_id}/resend",
        )
        .with_path_param("app_id", app_id)
        .with_path_param("msg_id", msg_id)
        .with_path_param("endpoint_id", endpoint_id)
        .with_idempotency_key(options.idempotency_key)
        .execute(self.svix)
        .await
    }
}
