//! Top-level error type.

use super::{ClientError, ConfigError, HttpError, ValidationError};
use thiserror::Error;

/// Result alias used by every client operation.
pub type Result<T> = std::result::Result<T, SvixError>;

/// Top-level error type for all client operations.
///
/// ## Examples
///
/// ```rust,ignore
/// use svix::error::SvixError;
///
/// match svix.application().get("app_123").await {
///     Ok(app) => println!("{}", app.name),
///     Err(SvixError::Http(e)) if e.status == 404 => println!("no such app"),
///     Err(e) => return Err(e.into()),
/// }
/// ```
#[derive(Debug, Error)]
pub enum SvixError {
    /// Invalid client options.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A path template placeholder had no value. This is a programmer error
    /// and is raised before any network I/O.
    #[error("missing path parameter `{param}` for `{template}`")]
    MissingPathParam {
        /// The placeholder without a value.
        param: String,
        /// The path template being expanded.
        template: String,
    },

    /// A path parameter expands to an empty, `.` or `..` segment, which
    /// would address a different route.
    #[error("invalid value {value:?} for path parameter `{param}` in `{template}`")]
    InvalidPathParam {
        /// The placeholder whose value was rejected.
        param: String,
        /// The rejected value.
        value: String,
        /// The path template being expanded.
        template: String,
    },

    /// A per-call header name or value is not valid HTTP. Raised before any
    /// network I/O.
    #[error("invalid request header `{name}`: {message}")]
    InvalidHeaderParam {
        /// The offending header name.
        name: String,
        /// Why the header was rejected.
        message: String,
    },

    /// Transport failure (network, timeout, connection).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The service returned a non-success status.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A body could not be encoded or decoded.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The call's deadline passed before it completed.
    #[error("deadline exceeded after {elapsed_ms}ms")]
    DeadlineExceeded {
        /// Time spent on the call, in milliseconds.
        elapsed_ms: u64,
    },
}

impl SvixError {
    /// Returns the HTTP status code, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => Some(e.status),
            Self::Validation(ValidationError::Decode { status, .. }) => Some(*status),
            Self::Client(e) => e.status_code(),
            _ => None,
        }
    }

    /// Returns the raw response body, if one was received.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Http(e) => Some(e.body.as_str()),
            Self::Validation(ValidationError::Decode { body, .. }) => Some(body.as_str()),
            _ => None,
        }
    }

    /// Returns `true` if the executor may retry after this error.
    ///
    /// Configuration, contract, encoding and deadline errors are never retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Client(e) => e.is_retryable(),
            Self::Http(e) => e.is_retryable(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_client_error() {
        let client_err = ClientError::Timeout { duration_ms: 5000 };
        let err: SvixError = client_err.into();
        assert!(matches!(err, SvixError::Client(_)));
        assert!(err.is_retryable());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_http_error_exposes_status_and_body() {
        let err: SvixError = HttpError::from_response(409, "conflict".to_string()).into();
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.body(), Some("conflict"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_server_error_is_retryable() {
        let err: SvixError = HttpError::from_response(503, String::new()).into();
        assert!(err.is_retryable());
    }

    #[test]
    fn test_config_and_contract_errors_are_not_retryable() {
        let config: SvixError = ConfigError::RetryScheduleTooLong { len: 6, max: 5 }.into();
        assert!(!config.is_retryable());

        let contract = SvixError::MissingPathParam {
            param: "app_id".to_string(),
            template: "/api/v1/app/{app_id}".to_string(),
        };
        assert!(!contract.is_retryable());
        assert_eq!(
            contract.to_string(),
            "missing path parameter `app_id` for `/api/v1/app/{app_id}`"
        );

        let header = SvixError::InvalidHeaderParam {
            name: "x-a".to_string(),
            message: "bad".to_string(),
        };
        assert!(!header.is_retryable());
        assert_eq!(header.status(), None);

        let dots = SvixError::InvalidPathParam {
            param: "app_id".to_string(),
            value: "..".to_string(),
            template: "/api/v1/app/{app_id}".to_string(),
        };
        assert!(!dots.is_retryable());
        assert_eq!(
            dots.to_string(),
            "invalid value \"..\" for path parameter `app_id` in `/api/v1/app/{app_id}`"
        );
    }

    #[test]
    fn test_decode_error_exposes_body() {
        let json_err = serde_json::from_str::<serde_json::Value>("oops").unwrap_err();
        let err: SvixError = ValidationError::Decode {
            source: json_err,
            status: 200,
            body: "oops".to_string(),
        }
        .into();
        assert_eq!(err.status(), Some(200));
        assert_eq!(err.body(), Some("oops"));
    }
}
