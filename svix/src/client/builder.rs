//! Fluent construction of a [`Svix`] client.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue, USER_AGENT};

use super::config::{
    DEFAULT_TIMEOUT_SECS, MAX_RETRIES, SvixOptions, default_server_url, parse_server_url,
    user_agent,
};
use super::executor::Executor;
use super::handle::Svix;
use crate::error::{ConfigError, Result};

/// Builder for configuring a [`Svix`] client.
///
/// Validation happens in [`build`](Self::build); nothing touches the network.
#[derive(Debug)]
pub struct SvixBuilder {
    token: String,
    server_url: Option<String>,
    http_client: Option<reqwest::Client>,
    timeout: Duration,
    retry_schedule: Vec<Duration>,
    debug: bool,
    default_headers: HeaderMap,
}

impl SvixBuilder {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            server_url: None,
            http_client: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry_schedule: Vec::new(),
            debug: false,
            default_headers: HeaderMap::new(),
        }
    }

    pub(crate) fn from_options(token: impl Into<String>, options: SvixOptions) -> Self {
        let mut builder = Self::new(token);
        builder.server_url = options.server_url;
        builder.http_client = options.http_client;
        if let Some(timeout) = options.timeout {
            builder.timeout = timeout;
        }
        if let Some(schedule) = options.retry_schedule {
            builder.retry_schedule = schedule;
        }
        builder.debug = options.debug;
        builder
    }

    /// Overrides the server chosen from the token's region.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// let svix = Svix::builder("testsk_abc")
    ///     .server_url("http://localhost:8071")
    ///     .build()?;
    /// ```
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Uses a pre-built transport instead of constructing one.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Sets the per-attempt timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the delays between retries.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use std::time::Duration;
    ///
    /// let svix = Svix::builder(token)
    ///     .retry_schedule([50, 100, 200].map(Duration::from_millis))
    ///     .build()?;
    /// ```
    pub fn retry_schedule(mut self, schedule: impl IntoIterator<Item = Duration>) -> Self {
        self.retry_schedule = schedule.into_iter().collect();
        self
    }

    /// Logs request and response bodies at `debug` level.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Adds a header sent with every request.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self> {
        let name = name.as_ref();
        let header_name =
            HeaderName::try_from(name).map_err(|e| ConfigError::invalid_header(name, e))?;
        let header_value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| ConfigError::invalid_header(name, e))?;
        self.default_headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Builds the [`Svix`] client.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The retry schedule has more than [`MAX_RETRIES`] entries
    /// - The server URL is invalid
    /// - The token cannot be sent as a header
    /// - The HTTP client cannot be constructed
    pub fn build(self) -> Result<Svix> {
        if self.retry_schedule.len() > MAX_RETRIES {
            return Err(ConfigError::RetryScheduleTooLong {
                len: self.retry_schedule.len(),
                max: MAX_RETRIES,
            }
            .into());
        }

        let server_url = self
            .server_url
            .as_deref()
            .unwrap_or_else(|| default_server_url(&self.token));
        let base_url = parse_server_url(server_url)?;

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::try_from(format!("Bearer {}", self.token))
            .map_err(|e| ConfigError::invalid_header(AUTHORIZATION.as_str(), e))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        let agent = HeaderValue::try_from(user_agent())
            .map_err(|e| ConfigError::invalid_header(USER_AGENT.as_str(), e))?;
        headers.insert(USER_AGENT, agent);
        for (name, value) in &self.default_headers {
            headers.insert(name.clone(), value.clone());
        }

        let client = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .pool_max_idle_per_host(10)
                .build()
                .map_err(ConfigError::HttpClient)?,
        };

        let executor = Executor::new(
            client,
            base_url,
            headers,
            self.retry_schedule,
            self.timeout,
            self.debug,
        );
        Ok(Svix::from_executor(Arc::new(executor)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SvixError;

    #[test]
    fn test_region_from_token() {
        let svix = SvixBuilder::new("testsk_abc.def.eu").build().unwrap();
        assert_eq!(svix.base_url().as_str(), "https://api.eu.svix.com/");

        let svix = SvixBuilder::new("testsk_abc.def.xx").build().unwrap();
        assert_eq!(svix.base_url().as_str(), "https://api.svix.com/");
    }

    #[test]
    fn test_explicit_server_url_wins() {
        let svix = SvixBuilder::new("testsk_abc.us")
            .server_url("http://localhost:8071")
            .build()
            .unwrap();
        assert_eq!(svix.base_url().as_str(), "http://localhost:8071/");
    }

    #[test]
    fn test_retry_schedule_cap() {
        let five = vec![Duration::from_millis(1); MAX_RETRIES];
        assert!(SvixBuilder::new("t").retry_schedule(five).build().is_ok());

        let six = vec![Duration::from_millis(1); MAX_RETRIES + 1];
        match SvixBuilder::new("t").retry_schedule(six).build() {
            Err(SvixError::Config(ConfigError::RetryScheduleTooLong { len, max })) => {
                assert_eq!(len, 6);
                assert_eq!(max, 5);
            }
            other => panic!("expected RetryScheduleTooLong, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_server_url() {
        let err = SvixBuilder::new("t").server_url("not a url").build().unwrap_err();
        assert!(matches!(err, SvixError::Config(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_invalid_default_header() {
        let err = SvixBuilder::new("t")
            .default_header("bad header", "v")
            .unwrap_err();
        assert!(matches!(
            err,
            SvixError::Config(ConfigError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn test_token_with_newline_is_rejected() {
        let err = SvixBuilder::new("abc\ndef").build().unwrap_err();
        assert!(matches!(
            err,
            SvixError::Config(ConfigError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn test_options_are_applied() {
        let svix = SvixBuilder::from_options(
            "t",
            SvixOptions {
                server_url: Some("http://localhost:1234".to_string()),
                retry_schedule: Some(vec![Duration::from_millis(5)]),
                ..Default::default()
            },
        )
        .build()
        .unwrap();
        assert_eq!(svix.base_url().as_str(), "http://localhost:1234/");
        assert_eq!(svix.retry_schedule(), &[Duration::from_millis(5)]);
    }
}
