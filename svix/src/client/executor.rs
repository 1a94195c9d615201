//! Request execution with retries and tracing instrumentation.
//!
//! The [`Executor`] is the one place that touches the network. It expands a
//! [`Request`] into a URL, attaches the default and per-call headers, sends
//! it, retries according to the configured schedule, and turns the response
//! into a typed value or a structured error.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap};
use serde::de::DeserializeOwned;
use tokio::time::Instant;
use tracing::{Span, debug, instrument, warn};
use url::Url;

use super::request::Request;
use crate::method::RestMethod;
use crate::error::{ClientError, HttpError, Result, SvixError, ValidationError};

/// Header carrying the per-call request ID.
const REQ_ID_HEADER: &str = "svix-req-id";

/// Header carrying the retry number on retried attempts.
const RETRY_COUNT_HEADER: &str = "svix-retry-count";

/// A response as received, before status handling.
#[derive(Debug)]
struct RawResponse {
    status: u16,
    body: String,
}

impl RawResponse {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Shared request pipeline behind every resource client.
///
/// Immutable after construction; concurrent calls share only the
/// connection pool of the underlying `reqwest::Client`.
#[derive(Debug)]
pub struct Executor {
    client: reqwest::Client,
    base_url: Url,
    default_headers: HeaderMap,
    retry_schedule: Vec<Duration>,
    timeout: Duration,
    debug: bool,
}

impl Executor {
    pub(crate) fn new(
        client: reqwest::Client,
        base_url: Url,
        default_headers: HeaderMap,
        retry_schedule: Vec<Duration>,
        timeout: Duration,
        debug: bool,
    ) -> Self {
        Self {
            client,
            base_url,
            default_headers,
            retry_schedule,
            timeout,
            debug,
        }
    }

    /// Returns the server URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the delays between retries.
    pub fn retry_schedule(&self) -> &[Duration] {
        &self.retry_schedule
    }

    /// Executes a request and decodes the response body as `T`.
    ///
    /// Operations without a response body use `T = ()`; an empty body then
    /// decodes successfully.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - A path placeholder has no value, or its value is a dot segment
    ///   (before any I/O)
    /// - A per-call header cannot be sent (before any I/O)
    /// - The request body cannot be encoded
    /// - Every attempt fails in transport, or the last status is non-2xx
    /// - The success body does not match `T`
    /// - `deadline` passes before the call completes
    #[instrument(
        name = "svix_request",
        skip_all,
        fields(
            http.method = %request.method(),
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
            svix.req_id = tracing::field::Empty,
        )
    )]
    pub async fn execute<T>(&self, mut request: Request, deadline: Option<Instant>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = request.url(&self.base_url)?;
        let headers = request.headers()?;
        let body = request.take_body()?;
        let req_id: u32 = rand::random();

        Span::current().record("http.url", url.as_str());
        Span::current().record("svix.req_id", req_id);

        if self.debug {
            if let Some(body) = &body {
                debug!(body = %String::from_utf8_lossy(body), "Request body");
            }
        }

        let started = Instant::now();
        let attempts = self.send_with_retries(
            request.method(),
            &url,
            &headers,
            body.as_deref(),
            req_id,
            deadline,
        );
        let response = match deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, attempts)
                .await
                .map_err(|_| SvixError::DeadlineExceeded {
                    elapsed_ms: started.elapsed().as_millis() as u64,
                })??,
            None => attempts.await?,
        };

        Span::current().record("http.status_code", response.status);
        if self.debug {
            debug!(status = response.status, body = %response.body, "Response body");
        }

        if !response.is_success() {
            let otel_status = if response.status >= 500 {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);
            return Err(HttpError::from_response(response.status, response.body).into());
        }

        Span::current().record("otel.status_code", "OK");
        decode(response)
    }

    /// Sends the request, retrying transport failures and 5xx responses
    /// with the configured delays.
    ///
    /// A retry whose delay would end past `deadline` is not attempted; the
    /// last outcome is returned instead.
    async fn send_with_retries(
        &self,
        method: RestMethod,
        url: &Url,
        headers: &HeaderMap,
        body: Option<&[u8]>,
        req_id: u32,
        deadline: Option<Instant>,
    ) -> Result<RawResponse> {
        let mut retry = 0usize;
        loop {
            let outcome = self.send_once(method, url, headers, body, req_id, retry).await;
            let retryable = match &outcome {
                Ok(response) => response.status >= 500,
                Err(e) => e.is_retryable(),
            };
            if !retryable {
                return outcome;
            }

            let Some(&delay) = self.retry_schedule.get(retry) else {
                return outcome;
            };
            if deadline.is_some_and(|d| Instant::now() + delay >= d) {
                return outcome;
            }

            retry += 1;
            warn!(
                retry,
                delay_ms = delay.as_millis() as u64,
                outcome = %describe(&outcome),
                "Retrying request"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Performs a single attempt.
    async fn send_once(
        &self,
        method: RestMethod,
        url: &Url,
        headers: &HeaderMap,
        body: Option<&[u8]>,
        req_id: u32,
        retry: usize,
    ) -> Result<RawResponse> {
        let mut builder = self
            .client
            .request(method.into(), url.clone())
            .timeout(self.timeout)
            .headers(self.default_headers.clone())
            .header(REQ_ID_HEADER, req_id.to_string());

        if retry > 0 {
            builder = builder.header(RETRY_COUNT_HEADER, retry.to_string());
        }

        builder = builder.headers(headers.clone());

        if let Some(body) = body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body.to_vec());
        }

        let response = builder.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        Ok(RawResponse { status, body })
    }

    fn transport_error(&self, err: reqwest::Error) -> SvixError {
        let err = if err.is_timeout() {
            ClientError::Timeout {
                duration_ms: self.timeout.as_millis() as u64,
            }
        } else if err.is_connect() {
            ClientError::Connection(err.to_string())
        } else {
            ClientError::Request(err)
        };
        err.into()
    }
}

fn decode<T: DeserializeOwned>(response: RawResponse) -> Result<T> {
    let text = if response.body.trim().is_empty() {
        "null"
    } else {
        response.body.as_str()
    };
    serde_json::from_str(text).map_err(|source| {
        ValidationError::Decode {
            source,
            status: response.status,
            body: response.body.clone(),
        }
        .into()
    })
}

fn describe(outcome: &Result<RawResponse>) -> String {
    match outcome {
        Ok(response) => format!("HTTP {}", response.status),
        Err(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;
    use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
    struct TestResponse {
        id: String,
        name: String,
    }

    fn executor(server: &MockServer, retry_schedule: Vec<Duration>) -> Executor {
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            HeaderValue::from_static("Bearer test-token"),
        );
        Executor::new(
            reqwest::Client::new(),
            Url::parse(&server.uri()).unwrap(),
            headers,
            retry_schedule,
            Duration::from_secs(5),
            false,
        )
    }

    #[tokio::test]
    async fn test_execute_get_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/app/app_1"))
            .and(header("authorization", "Bearer test-token"))
            .and(header_exists("svix-req-id"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                id: "app_1".to_string(),
                name: "Alice".to_string(),
            }))
            .expect(1)
            .mount(&mock_server)
            .await;

        let request = Request::new(RestMethod::Get, "/api/v1/app/{app_id}")
            .with_path_param("app_id", "app_1");
        let result: TestResponse = executor(&mock_server, vec![])
            .execute(request, None)
            .await
            .unwrap();
        assert_eq!(result.name, "Alice");
    }

    #[tokio::test]
    async fn test_post_sends_body_query_and_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/app"))
            .and(query_param("get_if_exists", "true"))
            .and(header("idempotency-key", "key-1"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({ "name": "Acme" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(TestResponse {
                id: "app_2".to_string(),
                name: "Acme".to_string(),
            }))
            .expect(1)
            .mount(&mock_server)
            .await;

        let request = Request::new(RestMethod::Post, "/api/v1/app")
            .with_query_param("get_if_exists", true)
            .with_idempotency_key(Some("key-1".to_string()))
            .with_body(&serde_json::json!({ "name": "Acme" }));
        let result: TestResponse = executor(&mock_server, vec![])
            .execute(request, None)
            .await
            .unwrap();
        assert_eq!(result.id, "app_2");
    }

    #[tokio::test]
    async fn test_missing_path_param_sends_nothing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let request = Request::new(RestMethod::Get, "/api/v1/app/{app_id}/msg/{msg_id}")
            .with_path_param("app_id", "app_1");
        let result: Result<serde_json::Value> =
            executor(&mock_server, vec![]).execute(request, None).await;
        assert!(matches!(result, Err(SvixError::MissingPathParam { .. })));
    }

    #[tokio::test]
    async fn test_dot_segment_path_param_sends_nothing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&mock_server)
            .await;

        let template = "/api/v1/app/{app_id}/endpoint/{endpoint_id}";
        let request = Request::new(RestMethod::Delete, template)
            .with_path_param("app_id", "app_1")
            .with_path_param("endpoint_id", "..");
        let result: Result<()> = executor(&mock_server, vec![]).execute(request, None).await;
        match result {
            Err(SvixError::InvalidPathParam { param, value, .. }) => {
                assert_eq!(param, "endpoint_id");
                assert_eq!(value, "..");
            }
            other => panic!("expected InvalidPathParam, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_header_param_sends_nothing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let request = Request::new(RestMethod::Post, "/api/v1/app")
            .with_idempotency_key(Some("line\nbreak".to_string()))
            .with_body(&serde_json::json!({ "name": "Acme" }));
        let err = executor(&mock_server, vec![Duration::from_millis(1)])
            .execute::<serde_json::Value>(request, None)
            .await
            .unwrap_err();
        assert!(matches!(err, SvixError::InvalidHeaderParam { .. }));
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_no_content_decodes_to_unit() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/v1/app/app_1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let request = Request::new(RestMethod::Delete, "/api/v1/app/{app_id}")
            .with_path_param("app_id", "app_1");
        let result: Result<()> = executor(&mock_server, vec![]).execute(request, None).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_http_error_carries_status_and_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "code": "not_found",
                "detail": "Entity not found"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let request = Request::new(RestMethod::Get, "/api/v1/app/missing");
        let err = executor(&mock_server, vec![Duration::from_millis(1)])
            .execute::<TestResponse>(request, None)
            .await
            .unwrap_err();
        match err {
            SvixError::Http(e) => {
                assert_eq!(e.status, 404);
                assert_eq!(e.code(), Some("not_found"));
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_decode_failure_is_not_defaulted() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"id\":\"x\"}"))
            .mount(&mock_server)
            .await;

        let request = Request::new(RestMethod::Get, "/api/v1/app/x");
        let err = executor(&mock_server, vec![])
            .execute::<TestResponse>(request, None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SvixError::Validation(ValidationError::Decode { status: 200, .. })
        ));
        assert_eq!(err.body(), Some("{\"id\":\"x\"}"));
    }

    #[tokio::test]
    async fn test_server_errors_follow_schedule() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(3)
            .mount(&mock_server)
            .await;

        let request = Request::new(RestMethod::Get, "/api/v1/app");
        let err = executor(
            &mock_server,
            vec![Duration::from_millis(1), Duration::from_millis(1)],
        )
        .execute::<serde_json::Value>(request, None)
        .await
        .unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_retry_succeeds_and_sends_retry_count() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(header("svix-retry-count", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .expect(1)
            .mount(&mock_server)
            .await;

        let request = Request::new(RestMethod::Get, "/api/v1/app");
        let result: serde_json::Value = executor(&mock_server, vec![Duration::from_millis(1)])
            .execute(request, None)
            .await
            .unwrap();
        assert_eq!(result, serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_deadline_stops_slow_call() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&mock_server)
            .await;

        let request = Request::new(RestMethod::Get, "/api/v1/app");
        let deadline = Instant::now() + Duration::from_millis(50);
        let err = executor(&mock_server, vec![])
            .execute::<serde_json::Value>(request, Some(deadline))
            .await
            .unwrap_err();
        assert!(matches!(err, SvixError::DeadlineExceeded { .. }));
    }

    #[tokio::test]
    async fn test_retry_not_attempted_past_deadline() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let request = Request::new(RestMethod::Get, "/api/v1/app");
        let deadline = Instant::now() + Duration::from_secs(1);
        let err = executor(&mock_server, vec![Duration::from_secs(60)])
            .execute::<serde_json::Value>(request, Some(deadline))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn test_transport_failures_make_schedule_plus_one_attempts() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let executor = Executor::new(
            reqwest::Client::new(),
            Url::parse(&format!("http://127.0.0.1:{port}")).unwrap(),
            HeaderMap::new(),
            vec![Duration::from_millis(1); 3],
            Duration::from_secs(5),
            false,
        );

        let request = Request::new(RestMethod::Get, "/api/v1/app");
        let err = executor
            .execute::<serde_json::Value>(request, None)
            .await
            .unwrap_err();
        assert!(matches!(err, SvixError::Client(_)));

        logs_assert(|lines: &[&str]| {
            let retries = lines
                .iter()
                .filter(|line| line.contains("Retrying request"))
                .count();
            if retries == 3 {
                Ok(())
            } else {
                Err(format!("expected 3 retries, saw {retries}"))
            }
        });
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn test_debug_logs_bodies() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"ok\":true}"))
            .mount(&mock_server)
            .await;

        let mut executor = executor(&mock_server, vec![]);
        executor.debug = true;
        let request = Request::new(RestMethod::Post, "/api/v1/app")
            .with_body(&serde_json::json!({ "name": "Acme" }));
        let _: serde_json::Value = executor.execute(request, None).await.unwrap();

        assert!(logs_contain("Request body"));
        assert!(logs_contain("Response body"));
    }
}
