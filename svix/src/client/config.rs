//! Client options and server selection.

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Default request timeout in seconds.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Most entries a retry schedule may have.
pub const MAX_RETRIES: usize = 5;

/// Server used when the token carries no recognized region.
pub const DEFAULT_SERVER_URL: &str = "https://api.svix.com";

/// Environment variable read by [`Svix::from_env`](crate::Svix::from_env) for the token.
pub const ENV_AUTH_TOKEN: &str = "SVIX_AUTH_TOKEN";

/// Environment variable read by [`Svix::from_env`](crate::Svix::from_env) for the server URL.
pub const ENV_SERVER_URL: &str = "SVIX_SERVER_URL";

/// Value of the `User-Agent` header sent with every request.
pub(crate) fn user_agent() -> String {
    format!("svix-libs/{}/rust", env!("CARGO_PKG_VERSION"))
}

/// Optional settings for a [`Svix`](crate::Svix) client.
///
/// Every field is independent; `SvixOptions::default()` gives a client that
/// talks to the token's regional server with no retries.
///
/// ## Examples
///
/// ```rust,ignore
/// use std::time::Duration;
/// use svix::{Svix, SvixOptions};
///
/// let svix = Svix::new(
///     "testsk_abc.eu",
///     SvixOptions {
///         retry_schedule: Some(vec![Duration::from_millis(50), Duration::from_millis(100)]),
///         ..Default::default()
///     },
/// )?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct SvixOptions {
    /// Overrides the server chosen from the token's region.
    pub server_url: Option<String>,
    /// A pre-built transport, e.g. one with a proxy or custom TLS roots.
    pub http_client: Option<reqwest::Client>,
    /// Per-attempt timeout, 30 seconds when unset.
    pub timeout: Option<Duration>,
    /// Delays between retries, at most [`MAX_RETRIES`] entries.
    pub retry_schedule: Option<Vec<Duration>>,
    /// Log request and response bodies at `debug` level.
    pub debug: bool,
}

/// Known regions, keyed by the token suffix that selects them.
const REGIONS: &[(&str, &str)] = &[
    ("us", "https://api.us.svix.com"),
    ("eu", "https://api.eu.svix.com"),
    ("in", "https://api.in.svix.com"),
];

/// Picks the server for a token from its last dot-separated segment.
///
/// ```rust
/// use svix::client::default_server_url;
///
/// assert_eq!(default_server_url("testsk_abc.def.eu"), "https://api.eu.svix.com");
/// assert_eq!(default_server_url("testsk_abc.def.xx"), "https://api.svix.com");
/// ```
pub fn default_server_url(token: &str) -> &'static str {
    let region = token.rsplit('.').next().unwrap_or_default();
    REGIONS
        .iter()
        .find(|(suffix, _)| *suffix == region)
        .map(|(_, url)| *url)
        .unwrap_or(DEFAULT_SERVER_URL)
}

/// Parses a server URL, requiring an `http` or `https` scheme.
pub(crate) fn parse_server_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_recognized_regions() {
        assert_eq!(default_server_url("abc.def.us"), "https://api.us.svix.com");
        assert_eq!(default_server_url("abc.def.eu"), "https://api.eu.svix.com");
        assert_eq!(default_server_url("abc.def.in"), "https://api.in.svix.com");
    }

    #[test]
    fn test_unrecognized_region_falls_back() {
        assert_eq!(default_server_url("abc.def.xx"), DEFAULT_SERVER_URL);
        assert_eq!(default_server_url("no-dots-at-all"), DEFAULT_SERVER_URL);
        assert_eq!(default_server_url(""), DEFAULT_SERVER_URL);
        assert_eq!(default_server_url("abc.EU"), DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_user_agent_names_library() {
        assert!(user_agent().starts_with("svix-libs/"));
        assert!(user_agent().ends_with("/rust"));
    }

    #[test]
    fn test_parse_server_url_rejects_other_schemes() {
        assert!(parse_server_url("http://localhost:8071").is_ok());
        assert!(matches!(
            parse_server_url("ftp://example.com"),
            Err(ConfigError::UnsupportedScheme { .. })
        ));
        assert!(matches!(
            parse_server_url("not a url"),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_region_suffix_selects_regional_server(
            prefix in "[a-zA-Z0-9_]{1,32}",
            idx in 0usize..3,
        ) {
            let (suffix, url) = REGIONS[idx];
            let token = format!("{prefix}.{suffix}");
            prop_assert_eq!(default_server_url(&token), url);
        }

        #[test]
        fn prop_unknown_suffix_selects_default(
            prefix in "[a-zA-Z0-9_]{1,32}",
            suffix in "[a-z]{3,6}",
        ) {
            let token = format!("{prefix}.{suffix}");
            prop_assert_eq!(default_server_url(&token), DEFAULT_SERVER_URL);
        }
    }
}
