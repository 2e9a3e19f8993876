//! Errors raised while building the client and while executing calls.

use thiserror::Error;
use valhalla_core::ServiceError;

use crate::HookError;

/// Error raised when a [`crate::Client`] cannot be built from its
/// configuration.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// The endpoint is not a valid URL.
    #[error("invalid endpoint `{endpoint}`: {source}")]
    InvalidEndpoint {
        /// Endpoint as configured.
        endpoint: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },
    /// The endpoint uses a scheme other than `http` or `https`.
    #[error("unsupported scheme `{scheme}` in endpoint `{endpoint}`")]
    UnsupportedScheme {
        /// Endpoint as configured.
        endpoint: String,
        /// Scheme found in the endpoint.
        scheme: String,
    },
    /// A custom header name is not a valid HTTP header name.
    #[error("invalid header name `{name}`: {source}")]
    InvalidHeaderName {
        /// Header name as configured.
        name: String,
        /// Validation failure.
        #[source]
        source: reqwest::header::InvalidHeaderName,
    },
    /// A custom header value is not a valid HTTP header value.
    #[error("invalid value for header `{name}`: {source}")]
    InvalidHeaderValue {
        /// Header name the value belongs to.
        name: String,
        /// Validation failure.
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },
    /// A root certificate could not be parsed as PEM.
    #[error("invalid root certificate: {0}")]
    Certificate(#[source] reqwest::Error),
    /// A root certificate entry contained no PEM certificate.
    #[error("root certificate PEM contains no certificates")]
    EmptyCertificate,
    /// Building the HTTP client failed.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Building the Tokio runtime failed.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Error returned by a call through [`crate::Client`].
///
/// Exactly one variant describes where the call stopped. `Build`,
/// `Serialize` and `Hook` never reach the network.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be constructed.
    #[error("failed to build request for {url}: {source}")]
    Build {
        /// Target URL.
        url: String,
        /// Builder failure.
        #[source]
        source: reqwest::Error,
    },
    /// The request body could not be serialised to JSON.
    #[error("failed to serialise request body: {0}")]
    Serialize(#[source] serde_json::Error),
    /// The before-request hook rejected the call.
    #[error("before-request hook failed: {0}")]
    Hook(#[source] HookError),
    /// No response was obtained: DNS, connection, TLS or timeout failure.
    #[error("request to {url} failed: {source}")]
    Transport {
        /// Target URL.
        url: String,
        /// Transport failure.
        #[source]
        source: reqwest::Error,
    },
    /// The service answered with a non-200 status.
    #[error("service error: {0}")]
    Service(#[from] ServiceError),
    /// A 200 response body did not match the expected schema.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ClientError {
    /// Whether the call failed because the transport timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { source, .. } if source.is_timeout())
    }

    /// The structured service error, when the service answered with one.
    #[must_use]
    pub const fn service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn service_variant_exposes_payload() {
        let err = ClientError::from(ServiceError::from_raw(502, "Bad Gateway"));
        assert_eq!(err.to_string(), "service error: HTTP 502: Bad Gateway");
        assert_eq!(err.service_error().map(|e| e.status_code), Some(502));
        assert!(!err.is_timeout());
    }

    #[rstest]
    fn hook_variant_keeps_message() {
        let err = ClientError::Hook("missing credentials".into());
        assert_eq!(
            err.to_string(),
            "before-request hook failed: missing credentials"
        );
        assert!(err.service_error().is_none());
    }
}
