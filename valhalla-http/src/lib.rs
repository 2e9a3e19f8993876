//! Blocking HTTP client for the Valhalla routing service.
//!
//! [`Client`] posts the typed requests from [`valhalla_core`] to the
//! `/route`, `/isochrone` and `/height` endpoints through one shared request
//! envelope:
//!
//! 1. build a JSON `POST` carrying the configured custom headers,
//! 2. run the optional [`BeforeRequest`] hook,
//! 3. serialise and attach the body,
//! 4. send it and map the response to the typed body or a [`ClientError`].
//!
//! Non-200 responses surface as [`ClientError::Service`] carrying a
//! [`valhalla_core::ServiceError`]; bodies that are not an error payload keep
//! the raw HTTP status and text.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use reqwest::header::HeaderValue;
//! use valhalla_core::{ElevationRequest, Point};
//! use valhalla_http::{Client, ClientConfig, HookError};
//!
//! let config = ClientConfig::new("https://valhalla.example.org")
//!     .with_timeout(Duration::from_secs(10));
//! let mut client = Client::with_config(config)?;
//! client.before_request(Arc::new(|request: &mut reqwest::Request| -> Result<(), HookError> {
//!     request
//!         .headers_mut()
//!         .insert("x-api-key", HeaderValue::from_static("secret"));
//!     Ok(())
//! }));
//!
//! let heights = client.elevation(&ElevationRequest::from_shape(vec![
//!     Point::new(48.390394, -4.486076),
//! ]))?;
//! println!("{:?}", heights.height);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

mod client;
mod config;
mod envelope;
mod error;
mod hook;

#[doc(hidden)]
pub mod test_support;

pub use client::{Client, ELEVATION_PATH, ISOCHRONE_PATH, ROUTE_PATH};
pub use config::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_USER_AGENT, TlsConfig};
pub use error::{ClientBuildError, ClientError};
pub use hook::{BeforeRequest, HookError};
