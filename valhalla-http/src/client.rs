//! Blocking client for the Valhalla HTTP API.
//!
//! # Architecture
//!
//! The [`RoutingService`] trait is synchronous so the model crate stays
//! usable from synchronous code. [`Client`] bridges the async `reqwest`
//! transport to that interface by blocking on a Tokio runtime it owns.

use std::collections::BTreeMap;
use std::future::Future;

use log::debug;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;
use valhalla_core::{
    ElevationRequest, ElevationResponse, IsochroneRequest, IsochroneResponse, RouteRequest,
    RouteResponse, RoutingService,
};

use crate::envelope::decode_response;
use crate::{BeforeRequest, ClientBuildError, ClientConfig, ClientError};

/// Path of the route endpoint.
pub const ROUTE_PATH: &str = "/route";
/// Path of the isochrone endpoint.
pub const ISOCHRONE_PATH: &str = "/isochrone";
/// Path of the elevation endpoint.
pub const ELEVATION_PATH: &str = "/height";

/// HTTP client for a Valhalla service.
///
/// Every call issues exactly one `POST` with a JSON body and blocks until the
/// response is decoded. The client holds no per-call state, so one instance
/// can be shared across threads.
///
/// # Runtime behaviour
///
/// Every request is driven on the client's own `current_thread` runtime, so
/// pooled connections always belong to the runtime that polls them. Inside a
/// multi-threaded runtime the call is wrapped in
/// [`tokio::task::block_in_place`] to avoid nested runtime panics. Calls made
/// from inside a `current_thread` runtime are not supported.
///
/// # Examples
///
/// ```no_run
/// use valhalla_core::{Costing, Location, RouteRequest};
/// use valhalla_http::Client;
///
/// let client = Client::new("http://localhost:8002")?;
/// let request = RouteRequest::new(
///     vec![
///         Location::new(48.390394, -4.486076),
///         Location::new(48.45252, -4.25252),
///     ],
///     Costing::Auto,
/// );
/// let response = client.route(&request)?;
/// println!("{} km", response.trip.summary.length);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
    headers: HeaderMap,
    before_request: Option<BeforeRequest>,
    runtime: Runtime,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("http", &self.http)
            .field("config", &self.config)
            .field("before_request", &self.before_request.is_some())
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client for `endpoint` with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is invalid or the HTTP client or
    /// Tokio runtime fails to build.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ClientBuildError> {
        Self::with_config(ClientConfig::new(endpoint))
    }

    /// Create a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint, a custom header or a root
    /// certificate is invalid, or if the HTTP client or Tokio runtime fails
    /// to build.
    pub fn with_config(config: ClientConfig) -> Result<Self, ClientBuildError> {
        let http = build_http_client(&config)?;
        Self::with_http_client(config, http)
    }

    /// Create a client that sends requests through a caller-built transport.
    ///
    /// The transport settings of `config` (timeouts, user agent, TLS) are
    /// ignored; the endpoint and custom headers still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint or a custom header is invalid, or if
    /// the Tokio runtime fails to build.
    pub fn with_http_client(
        config: ClientConfig,
        http: reqwest::Client,
    ) -> Result<Self, ClientBuildError> {
        validate_endpoint(&config.endpoint)?;
        let headers = header_map(&config.headers)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ClientBuildError::Runtime)?;
        Ok(Self {
            http,
            config,
            headers,
            before_request: None,
            runtime,
        })
    }

    /// Install the hook run before every request, replacing any previous one.
    ///
    /// Set the hook before sharing the client; it cannot change while calls
    /// are in flight.
    pub fn before_request(&mut self, hook: BeforeRequest) {
        self.before_request = Some(hook);
    }

    /// The underlying transport.
    #[must_use]
    pub const fn http_client(&self) -> &reqwest::Client {
        &self.http
    }

    /// The configuration the client was built with.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Compute a turn-by-turn route.
    ///
    /// # Errors
    ///
    /// See [`Client::execute`].
    pub fn route(&self, request: &RouteRequest) -> Result<RouteResponse, ClientError> {
        self.execute(ROUTE_PATH, Some(request))
    }

    /// Compute reachability contours.
    ///
    /// # Errors
    ///
    /// See [`Client::execute`].
    pub fn isochrone(&self, request: &IsochroneRequest) -> Result<IsochroneResponse, ClientError> {
        self.execute(ISOCHRONE_PATH, Some(request))
    }

    /// Sample heights along a shape.
    ///
    /// # Errors
    ///
    /// See [`Client::execute`].
    pub fn elevation(&self, request: &ElevationRequest) -> Result<ElevationResponse, ClientError> {
        self.execute(ELEVATION_PATH, Some(request))
    }

    /// POST `body` as JSON to `path` and decode the response.
    ///
    /// `path` is joined onto the configured endpoint. A `None` body sends an
    /// empty request body.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Build`] if the request cannot be constructed.
    /// - [`ClientError::Hook`] if the before-request hook fails.
    /// - [`ClientError::Serialize`] if `body` cannot be serialised.
    /// - [`ClientError::Transport`] if no response is obtained.
    /// - [`ClientError::Service`] if the status is not `200 OK`.
    /// - [`ClientError::Decode`] if a `200 OK` body does not decode as `Resp`.
    pub fn execute<Req, Resp>(&self, path: &str, body: Option<&Req>) -> Result<Resp, ClientError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        self.block_on(self.execute_async(path, body))
    }

    async fn execute_async<Req, Resp>(
        &self,
        path: &str,
        body: Option<&Req>,
    ) -> Result<Resp, ClientError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = self.config.url_for(path);
        let mut request = self
            .http
            .post(&url)
            .headers(self.headers.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .build()
            .map_err(|source| ClientError::Build {
                url: url.clone(),
                source,
            })?;

        if let Some(hook) = &self.before_request {
            hook(&mut request).map_err(ClientError::Hook)?;
        }

        if let Some(value) = body {
            let bytes = serde_json::to_vec(value).map_err(ClientError::Serialize)?;
            *request.body_mut() = Some(bytes.into());
        }

        debug!("POST {url}");
        let response = self
            .http
            .execute(request)
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;
        debug!("POST {url} -> {status} ({} bytes)", bytes.len());

        decode_response(status, &bytes)
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| self.runtime.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }
}

impl RoutingService for Client {
    type Error = ClientError;

    fn route(&self, request: &RouteRequest) -> Result<RouteResponse, Self::Error> {
        Self::route(self, request)
    }

    fn isochrone(&self, request: &IsochroneRequest) -> Result<IsochroneResponse, Self::Error> {
        Self::isochrone(self, request)
    }

    fn elevation(&self, request: &ElevationRequest) -> Result<ElevationResponse, Self::Error> {
        Self::elevation(self, request)
    }
}

fn validate_endpoint(endpoint: &str) -> Result<(), ClientBuildError> {
    let url = Url::parse(endpoint).map_err(|source| ClientBuildError::InvalidEndpoint {
        endpoint: endpoint.to_owned(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ClientBuildError::UnsupportedScheme {
            endpoint: endpoint.to_owned(),
            scheme: scheme.to_owned(),
        }),
    }
}

fn header_map(headers: &BTreeMap<String, String>) -> Result<HeaderMap, ClientBuildError> {
    headers
        .iter()
        .map(|(name, value)| {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|source| {
                ClientBuildError::InvalidHeaderName {
                    name: name.clone(),
                    source,
                }
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|source| {
                ClientBuildError::InvalidHeaderValue {
                    name: name.clone(),
                    source,
                }
            })?;
            Ok((header_name, header_value))
        })
        .collect()
}

fn build_http_client(config: &ClientConfig) -> Result<reqwest::Client, ClientBuildError> {
    let mut builder = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .connect_timeout(config.connect_timeout)
        .timeout(config.timeout);
    if let Some(tls) = &config.tls {
        for pem in &tls.root_certificates {
            let certificates = reqwest::Certificate::from_pem_bundle(pem)
                .map_err(ClientBuildError::Certificate)?;
            if certificates.is_empty() {
                return Err(ClientBuildError::EmptyCertificate);
            }
            for certificate in certificates {
                builder = builder.add_root_certificate(certificate);
            }
        }
        builder = builder.danger_accept_invalid_certs(tls.accept_invalid_certs);
    }
    builder.build().map_err(ClientBuildError::HttpClient)
}
