//! HTTP response types for the Sidemail SDK.
//!
//! This module provides the [`HttpResponse`] type and the translation of a
//! raw response into either a wrapped [`Value`] or an [`HttpError`].

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::resource::{wrap, Value};

/// An HTTP response from the Sidemail API.
///
/// Holds the status code, headers (lowercased names, possibly repeated) and
/// the body text exactly as received.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The response body text.
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Decodes a successful response into plain JSON or classifies a
    /// failed one.
    ///
    /// - 2xx with an empty body yields `null`
    /// - 2xx with a JSON body yields the decoded JSON
    /// - 2xx with any other body yields a JSON string with the text
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Auth`] for 401/403 and [`HttpError::Api`] for
    /// every other non-2xx status.
    pub fn into_json(self) -> Result<serde_json::Value, HttpError> {
        if !self.is_ok() {
            return Err(HttpError::from_response(HttpResponseError::from_body(
                self.code, &self.body,
            )));
        }

        if self.body.is_empty() {
            return Ok(serde_json::Value::Null);
        }

        Ok(serde_json::from_str::<serde_json::Value>(&self.body)
            .unwrap_or(serde_json::Value::String(self.body)))
    }

    /// Same as [`Self::into_json`], with the result run through [`wrap`].
    ///
    /// # Errors
    ///
    /// See [`Self::into_json`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use sidemail::clients::HttpResponse;
    ///
    /// let response = HttpResponse::new(200, HashMap::new(), r#"{"ok":true}"#.to_string());
    /// let value = response.into_value().unwrap();
    /// assert_eq!(value.get("ok").and_then(|v| v.as_bool()), Some(true));
    /// ```
    pub fn into_value(self) -> Result<Value, HttpError> {
        self.into_json().map(wrap)
    }
}
