//! Client configuration errors.

use thiserror::Error;

/// Errors in client configuration.
///
/// These are raised while constructing a [`Svix`](crate::Svix) client and
/// always indicate invalid options. No network I/O has happened when one of
/// these is returned.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The retry schedule has more entries than the service allows.
    #[error("number of retries must not exceed {max} (got {len})")]
    RetryScheduleTooLong {
        /// Number of entries supplied.
        len: usize,
        /// Maximum number of entries allowed.
        max: usize,
    },

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The server URL does not use `http` or `https`.
    #[error("Unsupported URL scheme: {scheme}")]
    UnsupportedScheme {
        /// The scheme that was supplied.
        scheme: String,
    },

    /// A default header name or value is not valid HTTP.
    #[error("Invalid header {name}: {message}")]
    InvalidHeader {
        /// The offending header name.
        name: String,
        /// Why the header was rejected.
        message: String,
    },

    /// A required environment variable is not set.
    #[error("Missing environment variable: {var}")]
    MissingEnv {
        /// The variable that was checked.
        var: &'static str,
    },

    /// The HTTP transport could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl ConfigError {
    /// Creates an invalid header error.
    pub fn invalid_header(name: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_schedule_too_long_names_limit() {
        let err = ConfigError::RetryScheduleTooLong { len: 6, max: 5 };
        assert_eq!(err.to_string(), "number of retries must not exceed 5 (got 6)");
    }

    #[test]
    fn test_invalid_url() {
        let url_err = url::Url::parse("not-a-url").unwrap_err();
        let err = ConfigError::InvalidUrl(url_err);
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_missing_env() {
        let err = ConfigError::MissingEnv {
            var: "SVIX_AUTH_TOKEN",
        };
        assert_eq!(err.to_string(), "Missing environment variable: SVIX_AUTH_TOKEN");
    }

    #[test]
    fn test_invalid_header() {
        let err = ConfigError::invalid_header("x-bad header", "invalid HTTP header name");
        assert!(err.to_string().contains("x-bad header"));
    }
}
