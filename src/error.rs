//! Error types for the Sidemail SDK.
//!
//! This module contains the configuration error type and [`SidemailError`],
//! the umbrella error that every layer of the SDK converts into.
//!
//! # Error Handling
//!
//! Configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. HTTP operations return
//! [`HttpError`](crate::clients::HttpError) and field lookups on wrapped
//! responses return [`ResourceError`](crate::resource::ResourceError). All of
//! them convert into [`SidemailError`] via `?`.
//!
//! # Example
//!
//! ```rust
//! use sidemail::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

use crate::clients::HttpError;
use crate::resource::ResourceError;

/// Environment variable consulted when no API key is configured explicitly.
pub const API_KEY_ENV_VAR: &str = "SIDEMAIL_API_KEY";

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Sidemail API key.")]
    EmptyApiKey,

    /// No API key was configured and the environment fallback is unset.
    #[error("Missing API key. Pass an API key to the builder or set {API_KEY_ENV_VAR}.")]
    MissingApiKey,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme (e.g., 'https://api.sidemail.io/v1').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Request timeout is invalid.
    #[error("Invalid request timeout: {reason}")]
    InvalidTimeout {
        /// The reason the timeout was rejected.
        reason: String,
    },
}

/// Unified error type for the whole SDK.
///
/// # Example
///
/// ```rust,ignore
/// use sidemail::{Sidemail, SidemailError, HttpError};
///
/// match client.email().get("email-id").await {
///     Ok(email) => println!("{}", email.to_dict()),
///     Err(HttpError::Auth(e)) => println!("Check your API key: {}", e.message),
///     Err(e) => println!("Other error: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum SidemailError {
    /// Configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A field lookup on a wrapped response failed.
    #[error(transparent)]
    Resource(#[from] ResourceError),
}
