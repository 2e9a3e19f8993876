//! Mapping of HTTP responses to decoded bodies or structured errors.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use valhalla_core::ServiceError;

use crate::ClientError;

/// Map a status and body to the typed response or a [`ClientError`].
///
/// Only `200 OK` is treated as success. Any other status yields
/// [`ClientError::Service`], even when the body would decode as `T`.
pub(crate) fn decode_response<T>(status: StatusCode, body: &[u8]) -> Result<T, ClientError>
where
    T: DeserializeOwned,
{
    if status != StatusCode::OK {
        return Err(ClientError::Service(service_error(status, body)));
    }
    serde_json::from_slice(body).map_err(ClientError::Decode)
}

/// Decode a non-200 body as a [`ServiceError`].
///
/// A payload carrying any of the error fields is kept as decoded, even with
/// an empty message. Bodies that are not JSON objects, or that carry none of
/// the fields, fall back to the raw status and body text. A payload without a
/// `status_code` takes the HTTP status.
pub(crate) fn service_error(status: StatusCode, body: &[u8]) -> ServiceError {
    match serde_json::from_slice::<ServiceError>(body) {
        Ok(mut err) if err != ServiceError::default() => {
            if err.status_code == 0 {
                err.status_code = status.as_u16();
            }
            err
        }
        _ => ServiceError::from_raw(status.as_u16(), String::from_utf8_lossy(body)),
    }
}
