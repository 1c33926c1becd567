//! The Sidemail API surface.
//!
//! [`Sidemail`] is the entry point. Endpoints are grouped by area and
//! reached through accessor methods:
//!
//! | Accessor | Endpoints |
//! |----------|-----------|
//! | [`Sidemail::email`] | send, search, get, delete |
//! | [`Sidemail::contacts`] | create or update, find, query, list, delete |
//! | [`Sidemail::messenger`] | list, get, create, update, delete |
//! | [`Sidemail::domains`] | list, create, delete |
//! | [`Sidemail::project`] | create, get, update, delete |
//!
//! Operation parameters are anything that serializes to a JSON object,
//! usually `serde_json::json!` or a `#[derive(Serialize)]` struct with
//! `#[serde(rename_all = "camelCase")]`. Field names are passed through
//! untouched.

mod contacts;
mod domains;
mod email;
mod endpoint;
mod messenger;
mod project;

pub use contacts::ContactsApi;
pub use domains::DomainsApi;
pub use email::EmailApi;
pub use messenger::MessengerApi;
pub use project::ProjectApi;

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

use crate::clients::{HttpClient, HttpError};
use crate::config::SidemailConfig;
use crate::error::SidemailError;
use crate::resource::Value;

/// Client for the Sidemail API.
///
/// Cheap to share: clone it or put it behind an `Arc`; the underlying
/// connection pool is shared either way.
///
/// # Example
///
/// ```rust,ignore
/// use serde_json::json;
/// use sidemail::{ApiKey, Sidemail, SidemailConfig};
///
/// let config = SidemailConfig::builder()
///     .api_key(ApiKey::new("your-api-key")?)
///     .build()?;
/// let client = Sidemail::new(config)?;
///
/// client
///     .send_email(json!({
///         "toAddress": "user@example.com",
///         "fromAddress": "you@example.com",
///         "templateName": "Welcome",
///     }))
///     .await?;
///
/// let contacts = client.contacts().list(json!({"limit": 100})).await?;
/// let everyone = contacts.auto_paginate().collect_all().await?;
/// ```
#[derive(Clone, Debug)]
pub struct Sidemail {
    config: SidemailConfig,
    client: Arc<HttpClient>,
}

// Verify Sidemail is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Sidemail>();
};

impl Sidemail {
    /// Creates a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SidemailError::Http`] if the HTTP client cannot be built.
    pub fn new(config: SidemailConfig) -> Result<Self, SidemailError> {
        let client = HttpClient::new(&config)?;
        Ok(Self {
            config,
            client: Arc::new(client),
        })
    }

    /// Creates a client that sends through an existing reqwest client.
    #[must_use]
    pub fn with_http_client(config: SidemailConfig, client: reqwest::Client) -> Self {
        let client = HttpClient::with_client(&config, client);
        Self {
            config,
            client: Arc::new(client),
        }
    }

    /// Creates a client with the API key from `SIDEMAIL_API_KEY` and
    /// default settings.
    ///
    /// # Errors
    ///
    /// Returns [`SidemailError::Config`] if the variable is unset or empty.
    pub fn from_env() -> Result<Self, SidemailError> {
        Self::new(SidemailConfig::from_env()?)
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &SidemailConfig {
        &self.config
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub fn http_client(&self) -> &HttpClient {
        &self.client
    }

    #[must_use]
    pub const fn email(&self) -> EmailApi<'_> {
        EmailApi::new(&self.client)
    }

    #[must_use]
    pub const fn contacts(&self) -> ContactsApi<'_> {
        ContactsApi::new(&self.client)
    }

    #[must_use]
    pub const fn messenger(&self) -> MessengerApi<'_> {
        MessengerApi::new(&self.client)
    }

    #[must_use]
    pub const fn domains(&self) -> DomainsApi<'_> {
        DomainsApi::new(&self.client)
    }

    #[must_use]
    pub const fn project(&self) -> ProjectApi<'_> {
        ProjectApi::new(&self.client)
    }

    /// Shortcut for [`EmailApi::send`].
    ///
    /// # Errors
    ///
    /// See [`EmailApi::send`].
    pub async fn send_email(&self, params: impl Serialize + Send) -> Result<Value, HttpError> {
        self.email().send(params).await
    }

    /// Builds an attachment object for the `attachments` send parameter.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sidemail::Sidemail;
    ///
    /// let attachment = Sidemail::file_to_attachment("hello.txt", b"hello");
    /// assert_eq!(attachment["name"], "hello.txt");
    /// assert_eq!(attachment["content"], "aGVsbG8=");
    /// ```
    #[must_use]
    pub fn file_to_attachment(name: &str, data: &[u8]) -> serde_json::Value {
        serde_json::json!({
            "name": name,
            "content": STANDARD.encode(data),
        })
    }
}
