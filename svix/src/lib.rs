//! Svix API Client
//!
//! Typed async access to the Svix webhook-management service. Every remote
//! operation is a method on a resource client; building the request,
//! (de)serialization, retries and error wrapping happen in one shared
//! pipeline.
//!
//! ## Core Types
//!
//! - [`Svix`] - The client handle, cheap to clone
//! - [`SvixOptions`] / [`SvixBuilder`] - Server, transport, timeout, retries
//! - [`api`] - Resource clients (`Application`, `Endpoint`, `Message`, ...)
//! - [`models`] - Request and response payloads
//! - [`SvixError`] - Error returned by every operation
//! - [`pagination::paginate`] - Collects every page of a list operation
//!
//! ## Server selection
//!
//! Unless a server URL is given, the token's last dot-separated segment picks
//! the region: `us`, `eu` and `in` map to their regional servers, anything
//! else to `https://api.svix.com`.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use svix::{Svix, SvixOptions};
//! use svix::api::{ApplicationListOptions, PostOptions};
//! use svix::models::{ApplicationIn, MessageIn};
//!
//! let svix = Svix::new(
//!     "testsk_abc.eu",
//!     SvixOptions {
//!         retry_schedule: Some(vec![Duration::from_millis(50), Duration::from_millis(100)]),
//!         ..Default::default()
//!     },
//! )?;
//!
//! let app = svix
//!     .application()
//!     .create(ApplicationIn::new("Acme"), PostOptions::with_idempotency_key("acme-1"))
//!     .await?;
//!
//! svix.message()
//!     .create(
//!         &app.id,
//!         MessageIn::new("user.signup", serde_json::json!({ "id": 1 })),
//!         Default::default(),
//!     )
//!     .await?;
//!
//! let page = svix.application().list(ApplicationListOptions::default()).await?;
//! println!("{} applications", page.data.len());
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod method;
pub mod models;
pub mod pagination;

pub use client::{Svix, SvixBuilder, SvixOptions};
pub use error::{Result, SvixError};
pub use method::RestMethod;
