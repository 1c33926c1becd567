//! HTTP client for Sidemail API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Sidemail API.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUrl, SidemailConfig};
use crate::resource::{wrap, Value};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Sidemail API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including bearer authentication and User-Agent
/// - The configured per-request timeout
/// - Translation of responses into wrapped values or [`HttpError`]s
///
/// There is no retry logic: every call is exactly one request.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use sidemail::{ApiKey, SidemailConfig};
/// use sidemail::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = SidemailConfig::builder()
///     .api_key(ApiKey::new("my-api-key").unwrap())
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "project").build()?;
/// let project = client.send(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://api.sidemail.io/v1`).
    base_url: BaseUrl,
    /// Per-request timeout.
    timeout: Duration,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &SidemailConfig) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;
        Ok(Self::with_client(config, client))
    }

    /// Creates a new HTTP client reusing an existing reqwest client.
    ///
    /// Useful for sharing a connection pool or routing through a proxy.
    #[must_use]
    pub fn with_client(config: &SidemailConfig, client: reqwest::Client) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}sidemail-sdk-rust/{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.api_key().as_ref()),
        );
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("User-Agent".to_string(), user_agent);

        Self {
            client,
            base_url: config.base_url().clone(),
            timeout: config.timeout(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request and returns the raw response.
    ///
    /// Non-2xx statuses are NOT treated as errors here; use [`Self::send`]
    /// for the decoded result.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if validation fails and
    /// [`HttpError::Network`] for transport failures, including timeouts.
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.base_url.join(&request.path);
        tracing::debug!(method = %request.http_method, %url, "Sending Sidemail API request");

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.timeout(self.timeout).send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        Ok(HttpResponse::new(code, headers, body))
    }

    /// Sends an HTTP request and decodes the response body as plain JSON.
    ///
    /// # Errors
    ///
    /// Everything [`Self::request`] returns, plus [`HttpError::Auth`] for
    /// 401/403 and [`HttpError::Api`] for other non-2xx statuses.
    pub async fn send_json(&self, request: HttpRequest) -> Result<serde_json::Value, HttpError> {
        let path = request.path.clone();
        let response = self.request(request).await?;
        let request_id = response.request_id().map(String::from);

        response.into_json().map_err(|error| {
            tracing::warn!(
                path = %path,
                status = ?error.status(),
                request_id = ?request_id,
                "Sidemail API request failed: {error}"
            );
            error
        })
    }

    /// Sends an HTTP request and returns the wrapped response.
    ///
    /// # Errors
    ///
    /// See [`Self::send_json`].
    pub async fn send(&self, request: HttpRequest) -> Result<Value, HttpError> {
        self.send_json(request).await.map(wrap)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
