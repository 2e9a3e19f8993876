use serde::{Deserialize, Serialize};

/// Error payload returned by the service for non-200 responses.
///
/// Every field defaults when absent so partial payloads still decode. When a
/// body cannot be decoded at all, [`ServiceError::from_raw`] keeps the HTTP
/// status and the raw body text instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceError {
    /// Service-specific error code, such as `171` for "no suitable edges".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<u32>,
    /// Human-readable message.
    #[serde(default)]
    pub error: String,
    /// HTTP status code.
    #[serde(default)]
    pub status_code: u16,
    /// HTTP status text, such as `Bad Request`.
    #[serde(default)]
    pub status: String,
}

impl ServiceError {
    /// Build an error from a raw HTTP status and undecodable body text.
    #[must_use]
    pub fn from_raw(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            error_code: None,
            error: body.into(),
            status_code,
            status: String::new(),
        }
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.status.is_empty() {
            write!(f, "HTTP {}: {}", self.status_code, self.error)
        } else {
            write!(f, "{}: {}", self.status, self.error)
        }
    }
}

impl std::error::Error for ServiceError {}
