//! The before-request hook.

use std::sync::Arc;

/// Error returned by a [`BeforeRequest`] hook to abort the call.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Callback run on every outgoing request after the custom headers are
/// applied and before the body is attached and the request is sent.
///
/// The hook may mutate the request, for example to add an authentication
/// header, or reject it by returning an error.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use reqwest::header::HeaderValue;
/// use valhalla_http::{BeforeRequest, HookError};
///
/// let hook: BeforeRequest = Arc::new(|request: &mut reqwest::Request| -> Result<(), HookError> {
///     request
///         .headers_mut()
///         .insert("x-api-key", HeaderValue::from_static("secret"));
///     Ok(())
/// });
/// # let _ = hook;
/// ```
pub type BeforeRequest =
    Arc<dyn Fn(&mut reqwest::Request) -> Result<(), HookError> + Send + Sync>;
