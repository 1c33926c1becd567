//! HTTP client types for Sidemail API communication.
//!
//! This module provides the transport layer for making authenticated
//! requests to the Sidemail API. It handles request construction, bearer
//! authentication, response decoding and error classification.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`HttpError`]: Everything the transport can fail with
//!
//! # Example
//!
//! ```rust,ignore
//! use sidemail::{ApiKey, SidemailConfig};
//! use sidemail::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let config = SidemailConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build()?;
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "domains").build()?;
//! let domains = client.send(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. A failed request is reported to the caller as-is; rate limits
//! surface as [`HttpError::Api`] with status 429.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
