//! The wrapped JSON value type and the structural `wrap` transform.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;

use crate::resource::Resource;

/// A JSON value with every nested mapping wrapped as a [`Resource`].
///
/// Produced by [`wrap`]. Scalars pass through unchanged, sequences keep
/// their order, and mappings become resources with dual key/attribute
/// access. [`Value::to_dict`] reverses the transform exactly.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// JSON `null`.
    Null,
    /// JSON boolean.
    Bool(bool),
    /// JSON number, kept in its original representation.
    Number(Number),
    /// JSON string.
    String(String),
    /// JSON array, each element wrapped in turn.
    List(Vec<Value>),
    /// JSON object.
    Resource(Resource),
}

/// Wraps an arbitrary JSON value.
///
/// The transform is total, recursive and side-effect free:
/// `wrap(v).to_dict() == v` for every `v`.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use sidemail::resource::{wrap, Value};
///
/// let wrapped = wrap(json!([{"id": "a"}, 2, null]));
/// let Value::List(items) = &wrapped else { panic!("expected a list") };
/// assert!(items[0].as_resource().is_some());
/// assert_eq!(items[1].as_i64(), Some(2));
/// assert!(items[2].is_null());
/// assert_eq!(wrapped.to_dict(), json!([{"id": "a"}, 2, null]));
/// ```
#[must_use]
pub fn wrap(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(n),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => Value::List(items.into_iter().map(wrap).collect()),
        serde_json::Value::Object(map) => Value::Resource(Resource::new(map)),
    }
}

impl Value {
    /// Converts back to a plain `serde_json::Value` with no wrapper types left.
    #[must_use]
    pub fn to_dict(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Number(n) => serde_json::Value::Number(n.clone()),
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::List(items) => serde_json::Value::Array(items.iter().map(Self::to_dict).collect()),
            Self::Resource(resource) => resource.to_dict(),
        }
    }

    /// Returns `true` for JSON `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_resource(&self) -> Option<&Resource> {
        match self {
            Self::Resource(resource) => Some(resource),
            _ => None,
        }
    }

    /// Consumes the value, returning the resource if it is one.
    #[must_use]
    pub fn into_resource(self) -> Option<Resource> {
        match self {
            Self::Resource(resource) => Some(resource),
            _ => None,
        }
    }

    /// Looks up `key` when this value is a resource.
    ///
    /// Returns `None` for non-resources and for absent keys.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_resource().and_then(|r| r.get(key).ok())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        wrap(value)
    }
}

impl From<Resource> for Value {
    fn from(resource: Resource) -> Self {
        Self::Resource(resource)
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        value.to_dict()
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_dict().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(wrap)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dict())
    }
}
