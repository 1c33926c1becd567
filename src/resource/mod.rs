//! Structural wrapping of API responses.
//!
//! Every Sidemail response is arbitrary JSON. Instead of a hand-maintained
//! struct per endpoint, responses are run through [`wrap`], which turns
//! each JSON mapping into a [`Resource`]:
//!
//! - **Key-style access**: [`Resource::get`] by exact wire name
//! - **Attribute-style access**: [`Resource::attr`] by [`safe_attr`] alias,
//!   so `type` is reachable as `type_` and `1st` as `1st_`
//! - **Defaults and containment**: [`Resource::get_or`], [`Resource::contains`]
//! - **Raw payload**: [`Resource::raw`] returns the mapping as received
//! - **Deep unwrap**: [`Resource::to_dict`] / [`Value::to_dict`]
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use sidemail::resource::{wrap, Value};
//!
//! let response = wrap(json!({"contact": {"emailAddress": "ada@example.com"}}));
//! let contact = response.get("contact").and_then(Value::as_resource).unwrap();
//!
//! assert_eq!(contact.attr("emailAddress").unwrap().as_str(), Some("ada@example.com"));
//! assert!(contact.get("phone").is_err());
//! ```

mod errors;
#[allow(clippy::module_inception)]
mod resource;
mod value;

pub use errors::ResourceError;
pub use resource::{safe_attr, Resource};
pub use value::{wrap, Value};
