//! # Sidemail Rust SDK
//!
//! A Rust SDK for the [Sidemail](https://sidemail.io) email API, providing
//! type-safe configuration, an async HTTP client, structural wrapping of
//! JSON responses and lazy pagination across pages.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`SidemailConfig`] and [`SidemailConfigBuilder`]
//! - Validated newtypes for the API key and base URL
//! - The [`Sidemail`] client with email, contacts, messenger, domains and
//!   project endpoints
//! - [`Resource`] / [`Value`]: responses with key-style and attribute-style
//!   access over the raw JSON
//! - [`QueryResult`]: paged results that fetch further pages on demand
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use sidemail::{ApiKey, SidemailConfig};
//!
//! let config = SidemailConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Sending Email
//!
//! ```rust,ignore
//! use serde_json::json;
//! use sidemail::Sidemail;
//!
//! // Reads SIDEMAIL_API_KEY
//! let client = Sidemail::from_env()?;
//!
//! let response = client
//!     .send_email(json!({
//!         "toAddress": "user@example.com",
//!         "fromAddress": "you@example.com",
//!         "fromName": "Your app",
//!         "templateName": "Welcome",
//!         "templateProps": {"firstName": "Ada"},
//!         "attachments": [Sidemail::file_to_attachment("terms.txt", b"...")],
//!     }))
//!     .await?;
//!
//! println!("Email {} is {}", response.get("id").unwrap(), response.get("status").unwrap());
//! ```
//!
//! ## Pagination
//!
//! List and search operations return a [`QueryResult`] holding the first
//! page. [`QueryResult::auto_paginate`] walks the remaining pages lazily:
//!
//! ```rust,ignore
//! let emails = client.email().search(json!({"query": {"status": "delivered"}})).await?;
//!
//! let mut pager = emails.auto_paginate();
//! while let Some(email) = pager.next_item().await {
//!     let email = email?;
//!     println!("{}", email.get("id").unwrap());
//! }
//! ```
//!
//! ## Working With Responses
//!
//! ```rust
//! use serde_json::json;
//! use sidemail::resource::wrap;
//!
//! let contact = wrap(json!({"emailAddress": "ada@example.com", "type": "customer"}));
//! let contact = contact.as_resource().unwrap();
//!
//! assert_eq!(contact.get("type").unwrap(), contact.attr("type_").unwrap());
//! assert_eq!(contact.to_dict()["emailAddress"], "ada@example.com");
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: Clients and results are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Immutable responses**: Wrapped responses are read-only

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod pagination;
pub mod resource;

// Re-export public types at crate root for convenience
pub use api::Sidemail;
pub use config::{ApiKey, BaseUrl, SidemailConfig, SidemailConfigBuilder};
pub use error::{ConfigError, SidemailError};

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

// Re-export response and pagination types
pub use pagination::{PageFetcher, PageParams, Pager, PaginationStyle, QueryResult};
pub use resource::{Resource, ResourceError, Value};
