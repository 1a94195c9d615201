//! Layered error types for the Svix client.
//!
//! The error hierarchy separates failures by who caused them:
//! - [`SvixError`] - Top-level error type returned by every operation
//! - [`ConfigError`] - Invalid client options, detected before any I/O
//! - [`ClientError`] - Transport failures (connect, timeout, protocol)
//! - [`HttpError`] - The service answered with a non-success status
//! - [`ValidationError`] - Request or response bodies that failed (de)serialization

mod client_error;
mod config_error;
mod http_error;
mod svix_error;
mod validation_error;

pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use http_error::{HttpError, HttpErrorDetail};
pub use svix_error::{Result, SvixError};
pub use validation_error::ValidationError;
