//! Errors for non-success responses from the service.

use thiserror::Error;

use crate::models::{HttpErrorOut, HttpValidationError};

/// The parsed body of an error response, when it matches a known shape.
#[derive(Debug, Clone, PartialEq)]
pub enum HttpErrorDetail {
    /// The generic `{ "code": ..., "detail": ... }` error body.
    Error(HttpErrorOut),
    /// The 422 body listing each rejected field.
    Validation(HttpValidationError),
}

/// The service answered with a non-2xx status.
///
/// The raw body is always kept so callers can inspect responses that do not
/// match either documented error shape.
#[derive(Debug, Clone, Error)]
#[error("HTTP {status}: {}", error_message(.detail, .body))]
pub struct HttpError {
    /// The HTTP status code returned.
    pub status: u16,
    /// The raw response body.
    pub body: String,
    /// The parsed error body, if it matched a known shape.
    pub detail: Option<HttpErrorDetail>,
}

impl HttpError {
    /// Builds an error from a status code and raw body, parsing the body
    /// according to the status.
    pub fn from_response(status: u16, body: String) -> Self {
        let detail = if status == 422 {
            serde_json::from_str::<HttpValidationError>(&body)
                .ok()
                .map(HttpErrorDetail::Validation)
        } else {
            serde_json::from_str::<HttpErrorOut>(&body)
                .ok()
                .map(HttpErrorDetail::Error)
        };
        Self {
            status,
            body,
            detail,
        }
    }

    /// Returns `true` for 5xx responses, which the executor retries.
    pub fn is_retryable(&self) -> bool {
        self.status >= 500
    }

    /// The service's error code, e.g. `"not_found"`.
    pub fn code(&self) -> Option<&str> {
        match &self.detail {
            Some(HttpErrorDetail::Error(out)) => Some(out.code.as_str()),
            _ => None,
        }
    }
}

fn error_message(detail: &Option<HttpErrorDetail>, body: &str) -> String {
    match detail {
        Some(HttpErrorDetail::Error(out)) => format!("{} ({})", out.detail, out.code),
        Some(HttpErrorDetail::Validation(v)) => v
            .detail
            .iter()
            .map(|item| format!("{}: {}", item.loc.join("."), item.msg))
            .collect::<Vec<_>>()
            .join("; "),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_http_error_out() {
        let err = HttpError::from_response(
            404,
            r#"{"code":"not_found","detail":"Entity not found"}"#.to_string(),
        );
        assert_eq!(err.code(), Some("not_found"));
        assert_eq!(err.to_string(), "HTTP 404: Entity not found (not_found)");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_parses_validation_error_on_422() {
        let body = r#"{"detail":[{"loc":["body","name"],"msg":"field required","type":"value_error.missing"}]}"#;
        let err = HttpError::from_response(422, body.to_string());
        match &err.detail {
            Some(HttpErrorDetail::Validation(v)) => {
                assert_eq!(v.detail.len(), 1);
                assert_eq!(v.detail[0].error_type, "value_error.missing");
            }
            other => panic!("unexpected detail: {other:?}"),
        }
        assert_eq!(err.to_string(), "HTTP 422: body.name: field required");
    }

    #[test]
    fn test_unknown_body_is_kept_raw() {
        let err = HttpError::from_response(502, "Bad Gateway".to_string());
        assert!(err.detail.is_none());
        assert!(err.is_retryable());
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
    }

    #[test]
    fn test_is_a_leaf_error() {
        let err = HttpError::from_response(500, String::new());
        let err: &dyn std::error::Error = &err;
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "HTTP 500: ");
    }
}
