//! Command-line interface for querying a Valhalla routing service.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod query;

pub use error::CliError;
use query::{Endpoint, HttpServiceBuilder, QueryArgs, run_query_with};

const ARG_REQUEST: &str = "request";
const ARG_ENDPOINT: &str = "endpoint";
const ARG_TIMEOUT_SECS: &str = "timeout-secs";
const ARG_API_KEY: &str = "api-key";
const ARG_API_KEY_HEADER: &str = "api-key-header";
const ENV_REQUEST: &str = "VALHALLA_CMDS_QUERY_REQUEST_PATH";

/// Header carrying the API key when `--api-key-header` is not given.
pub const DEFAULT_API_KEY_HEADER: &str = "x-api-key";

/// Run the Valhalla CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns an error if argument parsing, configuration merging, reading the
/// request, the service call or writing the response fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    let (endpoint, args) = cli.command.into_parts();
    run_query_with(endpoint, args, &HttpServiceBuilder, &mut stdout)
}

#[derive(Debug, Parser)]
#[command(
    name = "valhalla",
    about = "Query a Valhalla routing service with JSON requests",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute a turn-by-turn route.
    Route(QueryArgs),
    /// Compute reachability contours.
    Isochrone(QueryArgs),
    /// Sample heights along a shape.
    Elevation(QueryArgs),
}

impl Command {
    fn into_parts(self) -> (Endpoint, QueryArgs) {
        match self {
            Self::Route(args) => (Endpoint::Route, args),
            Self::Isochrone(args) => (Endpoint::Isochrone, args),
            Self::Elevation(args) => (Endpoint::Elevation, args),
        }
    }
}

#[cfg(test)]
mod tests;
