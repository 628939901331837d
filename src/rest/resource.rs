//! Resource instances: read-only wrappers around one JSON object.
//!
//! The API's objects are treated as opaque field maps. Each resource type
//! (`Person`, `Company`, `Deal`) is a thin newtype over a
//! `serde_json::Map`, so fields are looked up by name rather than mapped onto
//! a fixed struct:
//!
//! ```rust
//! use pipelinedeals::rest::Resource;
//! use pipelinedeals::rest::resources::Person;
//! use serde_json::json;
//!
//! let person = Person::from_value(json!({"id": 7, "first_name": "Ada"})).unwrap();
//! assert_eq!(person.get("first_name"), Some(&json!("Ada")));
//! assert_eq!(person.get_or("phone", &json!("n/a")), &json!("n/a"));
//! assert_eq!(person.to_string(), "Person<7>");
//! ```

use std::fmt;

use serde_json::{Map, Value};

/// A read-only view over one object returned by the API.
///
/// Implementors only provide construction from, and access to, the
/// underlying field map; every accessor is a provided method.
pub trait Resource: Clone + fmt::Debug + Send + Sync + Sized {
    /// The type name used in error messages (e.g. "Person").
    const NAME: &'static str;

    /// Wraps a field map.
    fn from_fields(fields: Map<String, Value>) -> Self;

    /// Returns the underlying field map.
    fn fields(&self) -> &Map<String, Value>;

    /// Wraps a JSON value, which must be an object.
    ///
    /// Returns `None` for any other JSON type.
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self::from_fields(fields)),
            _ => None,
        }
    }

    /// Returns the value of `field`, if present.
    fn get(&self, field: &str) -> Option<&Value> {
        self.fields().get(field)
    }

    /// Returns the value of `field`, or `default` when it is absent.
    fn get_or<'a>(&'a self, field: &str, default: &'a Value) -> &'a Value {
        self.get(field).unwrap_or(default)
    }

    /// Returns the `id` field, if present and not null.
    fn id(&self) -> Option<&Value> {
        self.get("id").filter(|id| !id.is_null())
    }

    /// Iterates over every `(field, value)` pair.
    fn items(&self) -> serde_json::map::Iter<'_> {
        self.fields().iter()
    }
}

/// Renders an id for use in a URL path or error message.
///
/// Strings are used verbatim; other JSON values use their JSON rendering.
#[must_use]
pub fn id_to_string(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Formats an instance as `Name<id>`, used by every resource's `Display`.
pub(crate) fn fmt_instance<R: Resource>(resource: &R, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match resource.id() {
        Some(id) => write!(f, "{}<{}>", R::NAME, id_to_string(id)),
        None => write!(f, "{}<unsaved>", R::NAME),
    }
}

/// Addresses one object either through an instance or through a raw id.
///
/// Collection methods that act on an existing object (`update`, `delete`)
/// accept anything convertible into an `ObjectRef`:
///
/// ```rust
/// use pipelinedeals::rest::{ObjectRef, Resource};
/// use pipelinedeals::rest::resources::Deal;
/// use serde_json::json;
///
/// let deal = Deal::from_value(json!({"id": 3})).unwrap();
///
/// let by_instance: ObjectRef<'_, Deal> = (&deal).into();
/// let by_id: ObjectRef<'_, Deal> = 3_u64.into();
/// assert_eq!(by_instance.object_id(), by_id.object_id());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectRef<'a, R> {
    /// An instance; its `id` field is used.
    Instance(&'a R),
    /// A raw id.
    Id(String),
}

impl<R: Resource> ObjectRef<'_, R> {
    /// Resolves the id, or `None` for an instance that has no `id` field.
    #[must_use]
    pub fn object_id(&self) -> Option<String> {
        match self {
            Self::Instance(resource) => resource.id().map(id_to_string),
            Self::Id(id) => Some(id.clone()),
        }
    }
}

impl<'a, R> From<&'a R> for ObjectRef<'a, R> {
    fn from(resource: &'a R) -> Self {
        Self::Instance(resource)
    }
}

impl<R> From<u64> for ObjectRef<'_, R> {
    fn from(id: u64) -> Self {
        Self::Id(id.to_string())
    }
}

impl<R> From<i64> for ObjectRef<'_, R> {
    fn from(id: i64) -> Self {
        Self::Id(id.to_string())
    }
}

impl<R> From<u32> for ObjectRef<'_, R> {
    fn from(id: u32) -> Self {
        Self::Id(id.to_string())
    }
}

impl<R> From<i32> for ObjectRef<'_, R> {
    fn from(id: i32) -> Self {
        Self::Id(id.to_string())
    }
}

impl<R> From<String> for ObjectRef<'_, R> {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

impl<R> From<&str> for ObjectRef<'_, R> {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}
