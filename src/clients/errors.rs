//! HTTP-specific error types for the Sidemail SDK.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Details of a non-2xx response
//! - [`InvalidHttpRequestError`]: A request that fails validation before sending
//! - [`HttpError`]: Unified error type for everything the transport can raise
//!
//! Authentication failures (401 and 403) are reported as [`HttpError::Auth`]
//! so callers can tell a bad key apart from other API errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use sidemail::HttpError;
//!
//! match client.domains().list().await {
//!     Ok(domains) => println!("{domains}"),
//!     Err(HttpError::Auth(e)) => println!("Check your API key: {}", e.message),
//!     Err(HttpError::Api(e)) => println!("API error {}: {}", e.status, e.message),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the API answers with a non-successful status.
///
/// The fields mirror Sidemail's error payload: `developerMessage`,
/// `errorCode` and `moreInfo`. The full decoded payload is kept in
/// `payload`; bodies that are not JSON are recorded as
/// `{"developerMessage": <body text>}`.
///
/// # Example
///
/// ```rust
/// use sidemail::clients::HttpResponseError;
/// use serde_json::json;
///
/// let error = HttpResponseError::from_payload(
///     422,
///     json!({"developerMessage": "Invalid email", "errorCode": "invalid_email"}),
/// );
///
/// assert_eq!(error.message, "Invalid email");
/// assert_eq!(error.error_code.as_deref(), Some("invalid_email"));
/// assert_eq!(error.to_string(), "Invalid email");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// `developerMessage` from the payload, or `HTTP <status>`.
    pub message: String,
    /// `errorCode` from the payload.
    pub error_code: Option<String>,
    /// `moreInfo` from the payload.
    pub more_info: Option<String>,
    /// The decoded error payload.
    pub payload: serde_json::Value,
}

impl HttpResponseError {
    /// Builds the error from a status code and a decoded error payload.
    #[must_use]
    pub fn from_payload(status: u16, payload: serde_json::Value) -> Self {
        let field = |name: &str| {
            payload
                .get(name)
                .and_then(serde_json::Value::as_str)
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let message = field("developerMessage").unwrap_or_else(|| format!("HTTP {status}"));
        let error_code = field("errorCode");
        let more_info = field("moreInfo");

        Self {
            status,
            message,
            error_code,
            more_info,
            payload,
        }
    }

    /// Builds the error from a status code and a raw response body.
    ///
    /// JSON bodies are decoded as-is; anything else is placed under
    /// `developerMessage`, with `"Unknown error"` for an empty body.
    #[must_use]
    pub fn from_body(status: u16, body: &str) -> Self {
        let payload = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .filter(serde_json::Value::is_object)
            .unwrap_or_else(|| {
                let text = if body.is_empty() { "Unknown error" } else { body };
                serde_json::json!({ "developerMessage": text })
            });
        Self::from_payload(status, payload)
    }
}

/// Error returned when an HTTP request fails validation.
///
/// Raised before anything is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// Operation parameters did not serialize to a JSON object.
    #[error("Request parameters must serialize to a JSON object: {reason}")]
    InvalidParams {
        /// Why the parameters were rejected.
        reason: String,
    },

    /// A body was attached to a method that does not carry one.
    #[error("Cannot send a body with {method}.")]
    BodyNotAllowed {
        /// The HTTP method that was used.
        method: String,
    },

    /// A path parameter was empty.
    #[error("Missing path parameter '{name}'.")]
    EmptyPathParam {
        /// The name of the empty parameter.
        name: &'static str,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Authentication or authorization failed (401/403).
    #[error("Authentication failed: {0}")]
    Auth(HttpResponseError),

    /// Any other non-2xx response.
    #[error(transparent)]
    Api(HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network, TLS or timeout error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Classifies a non-2xx response.
    #[must_use]
    pub fn from_response(error: HttpResponseError) -> Self {
        match error.status {
            401 | 403 => Self::Auth(error),
            _ => Self::Api(error),
        }
    }

    /// The HTTP status, for response errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.response().map(|e| e.status)
    }

    /// The response error details, for `Auth` and `Api`.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponseError> {
        match self {
            Self::Auth(e) | Self::Api(e) => Some(e),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_prefers_developer_message() {
        let error = HttpResponseError::from_payload(
            400,
            json!({"developerMessage": "Bad sender", "moreInfo": "https://docs"}),
        );
        assert_eq!(error.message, "Bad sender");
        assert_eq!(error.more_info.as_deref(), Some("https://docs"));
        assert!(error.error_code.is_none());
    }

    #[test]
    fn test_message_falls_back_to_status() {
        let error = HttpResponseError::from_payload(502, json!({}));
        assert_eq!(error.message, "HTTP 502");
    }

    #[test]
    fn test_non_json_body_is_wrapped_as_developer_message() {
        let error = HttpResponseError::from_body(500, "Server exploded");
        assert_eq!(error.message, "Server exploded");
        assert_eq!(error.payload["developerMessage"], "Server exploded");
    }

    #[test]
    fn test_empty_body_reports_unknown_error() {
        let error = HttpResponseError::from_body(503, "");
        assert_eq!(error.message, "Unknown error");
    }

    #[test]
    fn test_auth_statuses_map_to_auth_variant() {
        for status in [401, 403] {
            let error = HttpError::from_response(HttpResponseError::from_payload(status, json!({})));
            assert!(matches!(error, HttpError::Auth(_)));
            assert_eq!(error.status(), Some(status));
        }

        let error = HttpError::from_response(HttpResponseError::from_payload(404, json!({})));
        assert!(matches!(error, HttpError::Api(_)));
    }

    #[test]
    fn test_auth_error_message_includes_developer_message() {
        let error = HttpError::from_response(HttpResponseError::from_payload(
            401,
            json!({"developerMessage": "Nope"}),
        ));
        assert!(error.to_string().contains("Nope"));
    }

    #[test]
    fn test_invalid_request_error_messages() {
        let error = InvalidHttpRequestError::BodyNotAllowed {
            method: "GET".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot send a body with GET.");

        let error = InvalidHttpRequestError::EmptyPathParam { name: "email_id" };
        assert!(error.to_string().contains("email_id"));
        assert!(HttpError::from(error).status().is_none());
    }
}
