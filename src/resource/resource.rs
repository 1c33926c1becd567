//! The [`Resource`] mapping wrapper.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Map;

use crate::resource::{wrap, ResourceError, Value};

/// Rust strict and reserved keywords. A field with one of these names is
/// only reachable by attribute through its `_`-suffixed alias.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Returns the attribute name under which a field is reachable.
///
/// Valid, non-reserved identifiers map to themselves; anything else gets a
/// trailing underscore.
///
/// ```rust
/// use sidemail::resource::safe_attr;
///
/// assert_eq!(safe_attr("firstName"), "firstName");
/// assert_eq!(safe_attr("type"), "type_");
/// assert_eq!(safe_attr("1abc"), "1abc_");
/// assert_eq!(safe_attr("x-request-id"), "x-request-id_");
/// ```
#[must_use]
pub fn safe_attr(name: &str) -> String {
    if is_identifier(name) && !KEYWORDS.contains(&name) {
        name.to_string()
    } else {
        format!("{name}_")
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if name == "_" || !(first == '_' || first.is_alphabetic()) {
        return false;
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}

/// A read-only view over one JSON mapping.
///
/// Every field is reachable two ways:
///
/// - key-style, by its exact wire name, through [`Resource::get`];
/// - attribute-style, through [`Resource::attr`], by the name
///   [`safe_attr`] derives from the wire name.
///
/// Nested mappings come back as nested resources and sequences as
/// [`Value::List`]. The original payload is kept verbatim and exposed by
/// [`Resource::raw`]; [`Resource::to_dict`] rebuilds a plain value.
///
/// When a reserved name's alias collides with a genuine field of the same
/// name (`type` next to `type_`), the genuine field keeps the attribute and
/// the reserved one stays reachable by key only.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use sidemail::resource::Resource;
///
/// let contact = Resource::from_value(json!({
///     "emailAddress": "ada@example.com",
///     "type": "customer",
///     "meta": {"createdAt": "2024-01-01"}
/// }))
/// .unwrap();
///
/// assert_eq!(contact.get("emailAddress").unwrap().as_str(), Some("ada@example.com"));
/// assert_eq!(contact.attr("type_").unwrap(), contact.get("type").unwrap());
///
/// let meta = contact.attr("meta").unwrap().as_resource().unwrap();
/// assert_eq!(meta.get("createdAt").unwrap().as_str(), Some("2024-01-01"));
/// ```
#[derive(Clone)]
pub struct Resource {
    /// The payload exactly as received.
    raw: Map<String, serde_json::Value>,
    /// Wrapped fields keyed by wire name.
    fields: HashMap<String, Value>,
    /// Attribute name to wire name.
    aliases: HashMap<String, String>,
}

impl Resource {
    /// Wraps a JSON mapping.
    #[must_use]
    pub fn new(raw: Map<String, serde_json::Value>) -> Self {
        let fields: HashMap<String, Value> = raw
            .clone()
            .into_iter()
            .map(|(key, value)| (key, wrap(value)))
            .collect();

        let mut aliases = HashMap::with_capacity(raw.len());
        let (plain, disambiguated): (Vec<&String>, Vec<&String>) =
            raw.keys().partition(|key| safe_attr(key) == **key);
        for key in plain {
            aliases.insert(key.clone(), key.clone());
        }
        for key in disambiguated {
            aliases.entry(safe_attr(key)).or_insert_with(|| key.clone());
        }

        Self {
            raw,
            fields,
            aliases,
        }
    }

    /// Wraps a JSON value if it is a mapping.
    ///
    /// Returns `None` for every other JSON type.
    #[must_use]
    pub fn from_value(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Object(map) => Some(Self::new(map)),
            _ => None,
        }
    }

    /// Key-style access by exact wire name.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::KeyNotFound`] if the field is absent.
    pub fn get(&self, key: &str) -> Result<&Value, ResourceError> {
        self.fields.get(key).ok_or_else(|| ResourceError::KeyNotFound {
            key: key.to_string(),
        })
    }

    /// Attribute-style access by alias (see [`safe_attr`]).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::AttributeNotFound`] if no field is reachable
    /// under `name`.
    pub fn attr(&self, name: &str) -> Result<&Value, ResourceError> {
        self.aliases
            .get(name)
            .and_then(|key| self.fields.get(key))
            .ok_or_else(|| ResourceError::AttributeNotFound {
                name: name.to_string(),
            })
    }

    /// Returns `true` if the payload has a field named `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Key-style access falling back to `default` when the field is absent.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.fields.get(key).unwrap_or(default)
    }

    /// The payload exactly as it was received.
    #[must_use]
    pub const fn raw(&self) -> &Map<String, serde_json::Value> {
        &self.raw
    }

    /// Rebuilds a plain JSON object from the wrapped fields.
    #[must_use]
    pub fn to_dict(&self) -> serde_json::Value {
        let map = self
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_dict()))
            .collect();
        serde_json::Value::Object(map)
    }

    /// Iterates over `(wire name, value)` pairs in payload order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.raw
            .keys()
            .filter_map(|key| self.fields.get(key).map(|value| (key.as_str(), value)))
    }

    /// Iterates over wire names in payload order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.raw.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The `id` field, when it is a string.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.fields.get("id").and_then(Value::as_str)
    }

    /// The `status` field, when it is a string.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.fields.get("status").and_then(Value::as_str)
    }
}

impl Default for Resource {
    fn default() -> Self {
        Self::new(Map::new())
    }
}

impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Resource").field(&self.raw).finish()
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dict())
    }
}

impl From<Map<String, serde_json::Value>> for Resource {
    fn from(raw: Map<String, serde_json::Value>) -> Self {
        Self::new(raw)
    }
}

impl Serialize for Resource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Map::deserialize(deserializer).map(Self::new)
    }
}

// Verify Resource is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Resource>();
    assert_send_sync::<Value>();
};
