//! Client configuration and the shared request pipeline.
//!
//! - [`Svix`] is the client handle, built with [`Svix::new`] or [`SvixBuilder`]
//! - [`Request`] describes one remote operation
//! - [`Executor`] sends requests, retries and decodes responses

mod builder;
mod config;
mod executor;
mod handle;
mod request;

pub use builder::SvixBuilder;
pub use config::{
    DEFAULT_SERVER_URL, ENV_AUTH_TOKEN, ENV_SERVER_URL, MAX_RETRIES, SvixOptions,
    default_server_url,
};
pub use executor::Executor;
pub use handle::Svix;
pub use request::{IDEMPOTENCY_KEY_HEADER, QueryValue, Request};
