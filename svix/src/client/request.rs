//! Per-call request description.
//!
//! A [`Request`] names an operation by method and path template and carries
//! its path, query and header parameters plus an optional JSON body. It is
//! built fresh for each call and consumed by the executor.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use url::Url;

use crate::error::{Result, SvixError, ValidationError};
use crate::method::RestMethod;
use crate::models::{MessageStatus, Ordering, StatusCodeClass};

/// Header carrying the caller's idempotency key.
pub const IDEMPOTENCY_KEY_HEADER: &str = "idempotency-key";

/// Conversion of typed parameters to their query-string form.
pub trait QueryValue {
    fn to_query_value(&self) -> String;
}

macro_rules! display_query_value {
    ($($ty:ty),+ $(,)?) => {
        $(impl QueryValue for $ty {
            fn to_query_value(&self) -> String {
                self.to_string()
            }
        })+
    };
}

display_query_value!(String, &str, bool, i32, i64, u16, u32, u64, Ordering);

impl QueryValue for DateTime<Utc> {
    fn to_query_value(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

impl QueryValue for MessageStatus {
    fn to_query_value(&self) -> String {
        self.code().to_string()
    }
}

impl QueryValue for StatusCodeClass {
    fn to_query_value(&self) -> String {
        self.code().to_string()
    }
}

/// One remote operation, ready to be executed.
///
/// ## Examples
///
/// ```rust,ignore
/// use svix::client::Request;
/// use svix::RestMethod;
///
/// let app: ApplicationOut = Request::new(RestMethod::Get, "/api/v1/app/{app_id}")
///     .with_path_param("app_id", "app_123")
///     .execute(&svix)
///     .await?;
/// ```
#[derive(Debug)]
pub struct Request {
    method: RestMethod,
    path: &'static str,
    path_params: HashMap<&'static str, String>,
    query_params: Vec<(&'static str, String)>,
    header_params: BTreeMap<&'static str, String>,
    body: Option<std::result::Result<Vec<u8>, serde_json::Error>>,
}

impl Request {
    pub fn new(method: RestMethod, path: &'static str) -> Self {
        Self {
            method,
            path,
            path_params: HashMap::new(),
            query_params: Vec::new(),
            header_params: BTreeMap::new(),
            body: None,
        }
    }

    pub fn method(&self) -> RestMethod {
        self.method
    }

    pub fn with_path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.insert(name, value.into());
        self
    }

    pub fn with_query_param(mut self, name: &'static str, value: impl QueryValue) -> Self {
        self.query_params.push((name, value.to_query_value()));
        self
    }

    /// Adds a query parameter only when `value` is `Some`.
    pub fn with_optional_query_param<V: QueryValue>(
        self,
        name: &'static str,
        value: Option<V>,
    ) -> Self {
        match value {
            Some(v) => self.with_query_param(name, v),
            None => self,
        }
    }

    /// Adds one `name=value` pair per item, when `values` is `Some`.
    pub fn with_optional_query_list<V: QueryValue>(
        mut self,
        name: &'static str,
        values: Option<Vec<V>>,
    ) -> Self {
        for v in values.into_iter().flatten() {
            self.query_params.push((name, v.to_query_value()));
        }
        self
    }

    /// Adds a header only when `value` is `Some`. A later value for the same
    /// name replaces the earlier one.
    pub fn with_optional_header_param(
        mut self,
        name: &'static str,
        value: Option<impl Into<String>>,
    ) -> Self {
        if let Some(v) = value {
            self.header_params.insert(name, v.into());
        }
        self
    }

    /// Attaches the caller's idempotency key, unchanged, when one is given
    /// and the method honors it. Keys on other methods are dropped.
    pub fn with_idempotency_key(self, key: Option<String>) -> Self {
        if !self.method.accepts_idempotency_key() {
            return self;
        }
        self.with_optional_header_param(IDEMPOTENCY_KEY_HEADER, key)
    }

    /// Serializes `body` as the JSON request body. Encoding errors surface
    /// when the request is executed.
    pub fn with_body<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        self.body = Some(serde_json::to_vec(body));
        self
    }

    /// Converts the per-call headers into a header map.
    ///
    /// ## Errors
    ///
    /// Returns [`SvixError::InvalidHeaderParam`] for the first name or value
    /// that cannot be sent.
    pub(crate) fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(self.header_params.len());
        for (name, value) in &self.header_params {
            let invalid = |message: String| SvixError::InvalidHeaderParam {
                name: name.to_string(),
                message,
            };
            let header_name =
                HeaderName::try_from(*name).map_err(|e| invalid(e.to_string()))?;
            let header_value =
                HeaderValue::try_from(value.as_str()).map_err(|e| invalid(e.to_string()))?;
            headers.insert(header_name, header_value);
        }
        Ok(headers)
    }

    /// Takes the encoded body out of the request.
    pub(crate) fn take_body(&mut self) -> Result<Option<Vec<u8>>> {
        self.body
            .take()
            .transpose()
            .map_err(|e| ValidationError::Encode(e).into())
    }

    /// Builds the full URL: the server URL, the expanded path, then the
    /// query string.
    ///
    /// Each placeholder must have a path parameter. Values are
    /// percent-encoded so they always stay within one path segment.
    ///
    /// ## Errors
    ///
    /// Returns [`SvixError::MissingPathParam`] for the first placeholder
    /// without a value, and [`SvixError::InvalidPathParam`] when a value
    /// would expand its segment to `""`, `"."` or `".."`.
    pub fn url(&self, base_url: &Url) -> Result<Url> {
        let mut segments = Vec::new();
        for raw in self.path.split('/').filter(|s| !s.is_empty()) {
            segments.push(self.expand_segment(raw)?);
        }

        let mut url = base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                crate::error::ConfigError::UnsupportedScheme {
                    scheme: base_url.scheme().to_string(),
                }
            })?;
            path.pop_if_empty().extend(segments.iter());
        }

        if !self.query_params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query_params.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    fn expand_segment(&self, segment: &str) -> Result<String> {
        let mut out = String::with_capacity(segment.len());
        let mut last = None;
        let mut rest = segment;
        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}') else {
                break;
            };
            let name = &rest[open + 1..open + close];
            let value = self
                .path_params
                .get(name)
                .ok_or_else(|| SvixError::MissingPathParam {
                    param: name.to_string(),
                    template: self.path.to_string(),
                })?;
            out.push_str(&rest[..open]);
            out.push_str(value);
            last = Some((name, value));
            rest = &rest[open + close + 1..];
        }
        out.push_str(rest);

        // Dot segments are collapsed by URL normalization and empty ones shift
        // the route, so neither may come from a parameter.
        if let Some((name, value)) = last {
            if matches!(out.as_str(), "" | "." | "..") {
                return Err(SvixError::InvalidPathParam {
                    param: name.to_string(),
                    value: value.clone(),
                    template: self.path.to_string(),
                });
            }
        }
        Ok(out)
    }
}
