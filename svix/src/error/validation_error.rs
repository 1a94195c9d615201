//! Request encoding and response decoding errors.

use thiserror::Error;

/// Errors while (de)serializing bodies.
///
/// A decode failure keeps the status and raw body of the response so the
/// caller can see exactly what the service sent.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The response body did not match the expected schema.
    #[error("failed to decode response (HTTP {status}): {source}")]
    Decode {
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
        /// The HTTP status of the response.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_keeps_status_and_body() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ValidationError::Decode {
            source: json_err,
            status: 200,
            body: "not json".to_string(),
        };
        assert!(err.to_string().contains("HTTP 200"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_encode_message() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ValidationError::Encode(json_err);
        assert!(err.to_string().starts_with("failed to encode request body"));
    }
}
