//! Client configuration.

use std::collections::BTreeMap;
use std::time::Duration;

/// Default user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "valhalla-client-rs/0.1";

/// Default endpoint of a locally running Valhalla service.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8002";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout in seconds.
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// TLS settings for the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlsConfig {
    /// Extra root certificates, PEM encoded.
    pub root_certificates: Vec<Vec<u8>>,
    /// Accept certificates that fail verification. Only for test deployments.
    pub accept_invalid_certs: bool,
}

impl TlsConfig {
    /// Trust an additional PEM-encoded root certificate.
    #[must_use]
    pub fn with_root_certificate(mut self, pem: impl Into<Vec<u8>>) -> Self {
        self.root_certificates.push(pem.into());
        self
    }

    /// Accept invalid certificates.
    #[must_use]
    pub const fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}

/// Configuration for [`crate::Client`].
///
/// The configuration is read-only once the client is built.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use valhalla_http::ClientConfig;
///
/// let config = ClientConfig::new("https://valhalla.example.org/")
///     .with_header("X-Api-Key", "secret")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.url_for("/route"), "https://valhalla.example.org/route");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the service (e.g., `"http://localhost:8002"`).
    pub endpoint: String,
    /// Headers added to every request.
    pub headers: BTreeMap<String, String>,
    /// Total request timeout.
    pub timeout: Duration,
    /// Connection establishment timeout.
    pub connect_timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
    /// Optional TLS settings.
    pub tls: Option<TlsConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            headers: BTreeMap::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            tls: None,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given endpoint.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Add a header sent with every request, replacing any previous value.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the total request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connect timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the TLS settings.
    #[must_use]
    pub fn with_tls(mut self, tls: TlsConfig) -> Self {
        self.tls = Some(tls);
        self
    }

    /// Join `path` onto the endpoint with exactly one `/` between them.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.endpoint.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("http://localhost:8002", "/route", "http://localhost:8002/route")]
    #[case("http://localhost:8002/", "/route", "http://localhost:8002/route")]
    #[case("http://localhost:8002//", "height", "http://localhost:8002/height")]
    #[case("https://host/valhalla/", "/isochrone", "https://host/valhalla/isochrone")]
    fn url_for_joins_with_single_slash(
        #[case] endpoint: &str,
        #[case] path: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(ClientConfig::new(endpoint).url_for(path), expected);
    }

    #[rstest]
    fn headers_replace_previous_values() {
        let config = ClientConfig::default()
            .with_header("X-Api-Key", "one")
            .with_header("X-Api-Key", "two");
        assert_eq!(config.headers.len(), 1);
        assert_eq!(config.headers.get("X-Api-Key").map(String::as_str), Some("two"));
    }

    #[rstest]
    fn defaults_point_at_local_service() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.tls.is_none());
    }
}
