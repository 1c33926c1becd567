//! Integration tests for configuration loading.
//!
//! Environment variables are process-wide, so everything touching
//! `SIDEMAIL_API_KEY` lives in a single test.

use sidemail::error::API_KEY_ENV_VAR;
use sidemail::{ApiKey, ConfigError, Sidemail, SidemailConfig, SidemailError};

#[test]
fn test_api_key_environment_fallback() {
    std::env::remove_var(API_KEY_ENV_VAR);

    // Nothing configured
    let result = SidemailConfig::from_env();
    assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    assert!(matches!(
        Sidemail::from_env(),
        Err(SidemailError::Config(ConfigError::MissingApiKey))
    ));

    // Blank values count as missing
    std::env::set_var(API_KEY_ENV_VAR, "   ");
    assert!(matches!(
        SidemailConfig::from_env(),
        Err(ConfigError::MissingApiKey)
    ));

    // Environment fallback
    std::env::set_var(API_KEY_ENV_VAR, "env-key");
    let config = SidemailConfig::from_env().unwrap();
    assert_eq!(config.api_key().as_ref(), "env-key");

    // An explicit key wins over the environment
    let config = SidemailConfig::builder()
        .api_key(ApiKey::new("explicit-key").unwrap())
        .build()
        .unwrap();
    assert_eq!(config.api_key().as_ref(), "explicit-key");

    let client = Sidemail::from_env().unwrap();
    assert_eq!(
        client.http_client().default_headers().get("Authorization"),
        Some(&"Bearer env-key".to_string())
    );

    std::env::remove_var(API_KEY_ENV_VAR);
}
