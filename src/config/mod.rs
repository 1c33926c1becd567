//! Configuration types for the Sidemail SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for API communication with Sidemail.
//!
//! # Overview
//!
//! - [`SidemailConfig`]: The main configuration struct holding all SDK settings
//! - [`SidemailConfigBuilder`]: A builder for constructing [`SidemailConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use sidemail::{ApiKey, SidemailConfig};
//!
//! let config = SidemailConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.sidemail.io/v1");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl};

use std::time::Duration;

use crate::error::{ConfigError, API_KEY_ENV_VAR};

/// Default Sidemail API root.
pub const DEFAULT_BASE_URL: &str = "https://api.sidemail.io/v1";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the Sidemail SDK.
///
/// # Thread Safety
///
/// `SidemailConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct SidemailConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl SidemailConfig {
    /// Creates a new builder for constructing a `SidemailConfig`.
    #[must_use]
    pub fn builder() -> SidemailConfigBuilder {
        SidemailConfigBuilder::new()
    }

    /// Builds a configuration from the environment with all other settings
    /// left at their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if `SIDEMAIL_API_KEY` is unset
    /// or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        SidemailConfigBuilder::new().build()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify SidemailConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SidemailConfig>();
};

/// Builder for constructing [`SidemailConfig`] instances.
///
/// # Defaults
///
/// - `api_key`: read from `SIDEMAIL_API_KEY` when not set
/// - `base_url`: `https://api.sidemail.io/v1`
/// - `timeout`: 10 seconds
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct SidemailConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl SidemailConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key. Takes precedence over `SIDEMAIL_API_KEY`.
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`SidemailConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if no key was set and the
    /// environment fallback is empty, or [`ConfigError::InvalidTimeout`] for
    /// a zero timeout.
    pub fn build(self) -> Result<SidemailConfig, ConfigError> {
        let api_key = match self.api_key {
            Some(key) => key,
            None => Self::api_key_from_env()?,
        };

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                reason: "timeout must be greater than zero".to_string(),
            });
        }

        let base_url = match self.base_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_BASE_URL)?,
        };

        Ok(SidemailConfig {
            api_key,
            base_url,
            timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }

    fn api_key_from_env() -> Result<ApiKey, ConfigError> {
        let value = std::env::var(API_KEY_ENV_VAR).map_err(|_| ConfigError::MissingApiKey)?;
        ApiKey::new(value).map_err(|_| ConfigError::MissingApiKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = SidemailConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.api_key().as_ref(), "key");
        assert_eq!(config.base_url().as_ref(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = SidemailConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .base_url(BaseUrl::new("https://example.test").unwrap())
            .timeout(Duration::from_secs(5))
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "https://example.test");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let result = SidemailConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .timeout(Duration::ZERO)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
    }

    #[test]
    fn test_config_is_clone_and_debug_masks_key() {
        let config = SidemailConfig::builder()
            .api_key(ApiKey::new("very-secret").unwrap())
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.api_key(), config.api_key());

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("SidemailConfig"));
        assert!(!debug_str.contains("very-secret"));
    }
}
