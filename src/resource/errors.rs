//! Lookup errors raised by wrapped responses.

use thiserror::Error;

/// Error type for field lookups on a [`Resource`](crate::resource::Resource).
///
/// These are the only errors the wrapping layer produces on its own; every
/// other failure originates in the HTTP layer.
///
/// # Example
///
/// ```rust
/// use sidemail::resource::ResourceError;
///
/// let error = ResourceError::KeyNotFound { key: "firstName".to_string() };
/// assert!(error.to_string().contains("firstName"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// Key-style access on a field absent from the payload.
    #[error("Key '{key}' not found in resource")]
    KeyNotFound {
        /// The key that was requested.
        key: String,
    },

    /// Attribute-style access on a name with no matching field alias.
    #[error("Resource has no attribute '{name}'")]
    AttributeNotFound {
        /// The attribute name that was requested.
        name: String,
    },
}
