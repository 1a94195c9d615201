use chrono::{DateTime, Utc};

use super::PostOptions;
use crate::client::{Request, Svix};
use crate::error::Result;
use crate::method::RestMethod;
use crate::models::{ListResponse, MessageIn, MessageOut};

#[derive(Debug, Clone, Default)]
pub struct MessageListOptions {
    pub limit: Option<u64>,
    pub iterator: Option<String>,
    /// Only messages sent to this channel.
    pub channel: Option<String>,
    pub before: Option<DateTime<Utc>>,
    pub after: Option<DateTime<Utc>>,
    /// Include payloads in the response.
    pub with_content: Option<bool>,
    pub tag: Option<String>,
    /// Only messages of these event types.
    pub event_types: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct MessageCreateOptions {
    /// Include the payload in the response.
    pub with_content: Option<bool>,
    pub idempotency_key: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MessageGetOptions {
    pub with_content: Option<bool>,
}

/// Operations on messages sent to an application.
pub struct Message<'a> {
    svix: &'a Svix,
}

impl<'a> Message<'a> {
    pub(crate) fn new(svix: &'a Svix) -> Self {
        Self { svix }
    }

    pub async fn list(
        &self,
        app_id: impl Into<String>,
        options: MessageListOptions,
    ) -> Result<ListResponse<MessageOut>> {
        let MessageListOptions {
            limit,
            iterator,
            channel,
            before,
            after,
            with_content,
            tag,
            event_types,
        } = options;

        Request::new(RestMethod::Get, "/api/v1/app/{app_id}/msg")
            .with_path_param("app_id", app_id)
            .with_optional_query_param("limit", limit)
            .with_optional_query_param("iterator", iterator)
            .with_optional_query_param("channel", channel)
            .with_optional_query_param("before", before)
            .with_optional_query_param("after", after)
            .with_optional_query_param("with_content", with_content)
            .with_optional_query_param("tag", tag)
            .with_optional_query_list("event_types", event_types)
            .execute(self.svix)
            .await
    }

    /// Sends a message to every endpoint subscribed to its event type.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use svix::models::MessageIn;
    ///
    /// let msg = svix
    ///     .message()
    ///     .create(
    ///         "app_123",
    ///         MessageIn::new("user.signup", serde_json::json!({ "id": 1 })),
    ///         Default::default(),
    ///     )
    ///     .await?;
    /// ```
    pub async fn create(
        &self,
        app_id: impl Into<String>,
        message_in: MessageIn,
        options: MessageCreateOptions,
    ) -> Result<MessageOut> {
        Request::new(RestMethod::Post, "/api/v1/app/{app_id}/msg")
            .with_path_param("app_id", app_id)
            .with_optional_query_param("with_content", options.with_content)
            .with_idempotency_key(options.idempotency_key)
            .with_body(&message_in)
            .execute(self.svix)
            .await
    }

    pub async fn get(
        &self,
        app_id: impl Into<String>,
        msg_id: impl Into<String>,
        options: MessageGetOptions,
    ) -> Result<MessageOut> {
        Request::new(RestMethod::Get, "/api/v1/app/{app_id}/msg/{msg_id}")
            .with_path_param("app_id", app_id)
            .with_path_param("msg_id", msg_id)
            .with_optional_query_param("with_content", options.with_content)
            .execute(self.svix)
            .await
    }

    /// Deletes a message's payload. The message itself is kept.
    pub async fn expunge_content(
        &self,
        app_id: impl Into<String>,
        msg_id: impl Into<String>,
    ) -> Result<()> {
        Request::new(RestMethod::Delete, "/api/v1/app/{app_id}/msg/{msg_id}/content")
            .with_path_param("app_id", app_id)
            .with_path_param("msg_id", msg_id)
            .execute(self.svix)
            .await
    }
}

impl From<PostOptions> for MessageCreateOptions {
    fn from(options: PostOptions) -> Self {
        Self {
            with_content: None,
            idempotency_key: options.idempotency_key,
        }
    }
}
