//! The client handle and its resource accessors.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio::time::Instant;
use url::Url;

use super::builder::SvixBuilder;
use super::config::{ENV_AUTH_TOKEN, ENV_SERVER_URL, SvixOptions};
use super::executor::Executor;
use super::request::Request;
use crate::api::{
    Application, Authentication, Endpoint, EventType, Integration, Message, MessageAttempt,
    OperationalWebhookEndpoint, Statistics,
};
use crate::error::{ConfigError, Result};

/// Async client for the Svix API.
///
/// Cloning is cheap: clones share one executor and connection pool.
///
/// ## Examples
///
/// ```rust,ignore
/// use svix::{Svix, SvixOptions};
/// use svix::models::ApplicationIn;
///
/// let svix = Svix::new("testsk_abc.eu", SvixOptions::default())?;
/// let app = svix
///     .application()
///     .create(ApplicationIn::new("Acme"), Default::default())
///     .await?;
/// println!("created {}", app.id);
/// ```
#[derive(Debug, Clone)]
pub struct Svix {
    executor: Arc<Executor>,
    deadline: Option<Instant>,
}

impl Svix {
    /// Creates a client from a token and options.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError`](crate::error::ConfigError) wrapped in
    /// [`SvixError::Config`](crate::SvixError::Config) if the options are
    /// invalid.
    pub fn new(token: impl Into<String>, options: SvixOptions) -> Result<Self> {
        SvixBuilder::from_options(token, options).build()
    }

    /// Creates a builder for configuring a client.
    pub fn builder(token: impl Into<String>) -> SvixBuilder {
        SvixBuilder::new(token)
    }

    /// Creates a client from `SVIX_AUTH_TOKEN` and, if set, `SVIX_SERVER_URL`.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingEnv`] if the token variable is unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup(ENV_AUTH_TOKEN)
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingEnv {
                var: ENV_AUTH_TOKEN,
            })?;
        let mut builder = SvixBuilder::new(token);
        if let Some(url) = lookup(ENV_SERVER_URL).filter(|u| !u.is_empty()) {
            builder = builder.server_url(url);
        }
        builder.build()
    }

    pub(crate) fn from_executor(executor: Arc<Executor>) -> Self {
        Self {
            executor,
            deadline: None,
        }
    }

    /// Returns a handle whose calls fail with
    /// [`SvixError::DeadlineExceeded`](crate::SvixError::DeadlineExceeded)
    /// once `deadline` passes, retries included.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        Self {
            executor: Arc::clone(&self.executor),
            deadline: Some(deadline),
        }
    }

    /// Like [`with_deadline`](Self::with_deadline), starting now.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// The deadline applied to calls made through this handle, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns the server URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        self.executor.base_url()
    }

    /// Returns the configured delays between retries.
    pub fn retry_schedule(&self) -> &[Duration] {
        self.executor.retry_schedule()
    }

    /// Executes a raw [`Request`]. Resource clients go through here.
    ///
    /// ## Errors
    ///
    /// See [`Executor::execute`].
    pub async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        self.executor.execute(request, self.deadline).await
    }

    pub fn application(&self) -> Application<'_> {
        Application::new(self)
    }

    pub fn authentication(&self) -> Authentication<'_> {
        Authentication::new(self)
    }

    pub fn endpoint(&self) -> Endpoint<'_> {
        Endpoint::new(self)
    }

    pub fn event_type(&self) -> EventType<'_> {
        EventType::new(self)
    }

    pub fn integration(&self) -> Integration<'_> {
        Integration::new(self)
    }

    pub fn message(&self) -> Message<'_> {
        Message::new(self)
    }

    pub fn message_attempt(&self) -> MessageAttempt<'_> {
        MessageAttempt::new(self)
    }

    pub fn operational_webhook_endpoint(&self) -> OperationalWebhookEndpoint<'_> {
        OperationalWebhookEndpoint::new(self)
    }

    pub fn statistics(&self) -> Statistics<'_> {
        Statistics::new(self)
    }
}

impl Request {
    /// Executes this request through `svix`.
    ///
    /// ## Errors
    ///
    /// See [`Executor::execute`].
    pub async fn execute<T: DeserializeOwned>(self, svix: &Svix) -> Result<T> {
        svix.execute(self).await
    }
}
