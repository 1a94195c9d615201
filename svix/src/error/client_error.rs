//! Transport-level errors.

use thiserror::Error;

/// Errors from the HTTP transport.
///
/// These represent failures where no usable response was received: the
/// connection could not be established, the request timed out, or the
/// protocol exchange broke down.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Request exceeded the configured timeout.
    #[error("Request timeout after {duration_ms}ms")]
    Timeout {
        /// The timeout duration in milliseconds.
        duration_ms: u64,
    },

    /// Failed to establish connection to the server.
    #[error("Connection failed: {0}")]
    Connection(String),
}

impl ClientError {
    /// Returns `true` if this error is retryable.
    ///
    /// Timeouts and connection failures are always retried. Other request
    /// errors are retried unless they came from building the request or
    /// decoding its body.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Connection(_) => true,
            Self::Request(e) => !(e.is_builder() || e.is_decode()),
        }
    }

    /// Returns the HTTP status code, if the transport saw one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_retryable() {
        let err = ClientError::Timeout { duration_ms: 5000 };
        assert!(err.is_retryable());
        assert_eq!(err.to_string(), "Request timeout after 5000ms");
    }

    #[test]
    fn test_connection_is_retryable() {
        let err = ClientError::Connection("connection refused".to_string());
        assert!(err.is_retryable());
    }

    #[test]
    fn test_status_code_absent_without_response() {
        let timeout = ClientError::Timeout { duration_ms: 1000 };
        assert_eq!(timeout.status_code(), None);
    }
}
