//! Resource clients.
//!
//! Each client borrows a [`Svix`](crate::Svix) handle and maps one method to
//! one remote operation. Errors from the request pipeline are returned
//! unchanged.

mod application;
mod authentication;
mod endpoint;
mod event_type;
mod integration;
mod message;
mod message_attempt;
mod operational_webhook_endpoint;
mod statistics;

pub use application::{Application, ApplicationListOptions};
pub use authentication::Authentication;
pub use endpoint::{Endpoint, EndpointListOptions};
pub use event_type::{EventType, EventTypeDeleteOptions, EventTypeListOptions};
pub use integration::{Integration, IntegrationListOptions};
pub use message::{Message, MessageCreateOptions, MessageGetOptions, MessageListOptions};
pub use message_attempt::{
    AttemptedMessagesListOptions, DestinationsListOptions, MessageAttempt,
    MessageAttemptListOptions,
};
pub use operational_webhook_endpoint::{
    OperationalWebhookEndpoint, OperationalWebhookEndpointListOptions,
};
pub use statistics::Statistics;

/// Options shared by operations that create something.
#[derive(Debug, Clone, Default)]
pub struct PostOptions {
    /// Sent unchanged as the `idempotency-key` header.
    pub idempotency_key: Option<String>,
}

impl PostOptions {
    pub fn with_idempotency_key(key: impl Into<String>) -> Self {
        Self {
            idempotency_key: Some(key.into()),
        }
    }
}
