//! Shared implementation of the `route`, `isochrone` and `elevation`
//! subcommands.

use std::io::{BufReader, Write};
use std::sync::Arc;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use reqwest::header::{HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use valhalla_core::RoutingService;
use valhalla_http::{BeforeRequest, Client, ClientConfig, ClientError, DEFAULT_ENDPOINT, HookError};

use crate::fs::open_utf8_file;
use crate::{
    ARG_API_KEY, ARG_API_KEY_HEADER, ARG_ENDPOINT, ARG_REQUEST, ARG_TIMEOUT_SECS, CliError,
    DEFAULT_API_KEY_HEADER, ENV_REQUEST,
};

/// Routing service used by a query invocation.
pub(crate) type DynRoutingService = dyn RoutingService<Error = ClientError>;

/// CLI arguments shared by every query subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Send a JSON request file to a Valhalla service and print the \
                 JSON response. Connection options can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Send a JSON request to a Valhalla service"
)]
#[ortho_config(prefix = "VALHALLA")]
pub(crate) struct QueryArgs {
    /// Path to a JSON file containing the request body.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Base URL of the service (e.g. "http://localhost:8002").
    #[arg(long = ARG_ENDPOINT, value_name = "url")]
    #[serde(default)]
    pub(crate) endpoint: Option<String>,
    /// Request timeout in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "seconds")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    /// API key sent with every request.
    #[arg(long = ARG_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) api_key: Option<String>,
    /// Header carrying the API key.
    #[arg(long = ARG_API_KEY_HEADER, value_name = "name")]
    #[serde(default)]
    pub(crate) api_key_header: Option<String>,
}

impl QueryArgs {
    pub(crate) fn into_config(self) -> Result<QueryConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        QueryConfig::try_from(merged)
    }
}

/// Resolved query configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QueryConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Base URL of the service.
    pub(crate) endpoint: String,
    /// Request timeout, when overridden.
    pub(crate) timeout: Option<Duration>,
    /// API key to inject, if any.
    pub(crate) api_key: Option<String>,
    /// Header carrying the API key.
    pub(crate) api_key_header: String,
}

impl TryFrom<QueryArgs> for QueryConfig {
    type Error = CliError;

    fn try_from(args: QueryArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_REQUEST,
        })?;
        let timeout = match args.timeout_secs {
            Some(0) => return Err(CliError::ZeroTimeout),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };
        Ok(Self {
            request_path,
            endpoint: args.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned()),
            timeout,
            api_key: args.api_key,
            api_key_header: args
                .api_key_header
                .unwrap_or_else(|| DEFAULT_API_KEY_HEADER.to_owned()),
        })
    }
}

/// The service operation a subcommand invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endpoint {
    Route,
    Isochrone,
    Elevation,
}

impl Endpoint {
    const fn name(self) -> &'static str {
        match self {
            Self::Route => "route",
            Self::Isochrone => "isochrone",
            Self::Elevation => "elevation",
        }
    }
}

/// Builds the routing service for the current invocation.
pub(crate) trait ServiceBuilder {
    fn build(&self, config: &QueryConfig) -> Result<Box<DynRoutingService>, CliError>;
}

/// Builds a [`Client`] talking to the configured endpoint.
pub(crate) struct HttpServiceBuilder;

impl ServiceBuilder for HttpServiceBuilder {
    fn build(&self, config: &QueryConfig) -> Result<Box<DynRoutingService>, CliError> {
        let mut client_config = ClientConfig::new(config.endpoint.clone());
        if let Some(timeout) = config.timeout {
            client_config = client_config.with_timeout(timeout);
        }
        let mut client =
            Client::with_config(client_config).map_err(|source| CliError::BuildClient {
                endpoint: config.endpoint.clone(),
                source,
            })?;
        if let Some(key) = &config.api_key {
            client.before_request(api_key_hook(config.api_key_header.clone(), key.clone()));
        }
        Ok(Box::new(client))
    }
}

/// Hook inserting `key` under `header` as a sensitive header value.
///
/// An invalid header name or key rejects the call before it is sent.
pub(crate) fn api_key_hook(header: String, key: String) -> BeforeRequest {
    Arc::new(
        move |request: &mut reqwest::Request| -> Result<(), HookError> {
            let name = HeaderName::from_bytes(header.as_bytes())?;
            let mut value = HeaderValue::from_str(&key)?;
            value.set_sensitive(true);
            request.headers_mut().insert(name, value);
            Ok(())
        },
    )
}

pub(crate) fn run_query_with(
    endpoint: Endpoint,
    args: QueryArgs,
    builder: &dyn ServiceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let service = builder.build(&config)?;
    execute_query(endpoint, &config.request_path, service.as_ref(), writer)
}

pub(crate) fn execute_query(
    endpoint: Endpoint,
    request_path: &Utf8Path,
    service: &DynRoutingService,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let request_failed = |source| CliError::Request {
        endpoint: endpoint.name(),
        source,
    };
    match endpoint {
        Endpoint::Route => {
            let request = load_request(request_path)?;
            let response = service.route(&request).map_err(request_failed)?;
            write_response(writer, &response)
        }
        Endpoint::Isochrone => {
            let request = load_request(request_path)?;
            let response = service.isochrone(&request).map_err(request_failed)?;
            write_response(writer, &response)
        }
        Endpoint::Elevation => {
            let request = load_request(request_path)?;
            let response = service.elevation(&request).map_err(request_failed)?;
            write_response(writer, &response)
        }
    }
}

/// Loads a JSON-encoded request from disk.
pub(crate) fn load_request<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_response<T: Serialize>(writer: &mut dyn Write, response: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(response).map_err(CliError::SerialiseResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<QueryConfig, CliError> {
    let merged = QueryArgs::merge_from_layers(layers).map_err(CliError::from)?;
    QueryConfig::try_from(merged)
}
