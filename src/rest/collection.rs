//! The [`Collection`] trait: list, filter, create, update, delete and fetch
//! operations shared by every resource collection.
//!
//! A collection names its endpoint and the JSON key its attributes are
//! nested under; everything else is a provided method:
//!
//! ```rust,ignore
//! use pipelinedeals::rest::Collection;
//! use serde_json::json;
//!
//! let people = client.people();
//!
//! // The first page of everyone
//! for person in people.all(200, 1) {
//!     println!("{}", person?);
//! }
//!
//! // Fuzzy lookup, then create if nothing matched
//! let (created, person) = people.get_or_create(
//!     &json!({"email": "ada@example.com"}),
//!     &json!({"first_name": "Ada", "email": "ada@example.com"}),
//! )?;
//!
//! people.update(&person, &json!({"last_name": "Lovelace"}))?;
//! people.delete(&person)?;
//! ```

use std::fmt::Display;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::{HttpError, RestClient};
use crate::rest::endpoint::QueryParams;
use crate::rest::{ObjectRef, Paginator, Resource, ResourceError};

/// CRUD operations over one remote collection.
///
/// Implementors provide the endpoint and namespace constants plus access to
/// the client. Leaving out `API_PATH` or `NAME_SPACE` is a compile error.
///
/// Translated errors:
///
/// | operation             | 404            | 422              |
/// |-----------------------|----------------|------------------|
/// | `create`              | passes through | `CreationFailed` |
/// | `update`              | `DoesNotExist` | `UpdateFailed`   |
/// | `delete`, `get_by_id` | `DoesNotExist` | passes through   |
///
/// Any other failure is returned as [`ResourceError::Http`].
pub trait Collection {
    /// The instance type produced by this collection.
    type Instance: Resource;

    /// Path segment of the collection endpoint (e.g. `"people"`).
    const API_PATH: &'static str;

    /// JSON key wrapping create/update attributes (e.g. `"person"`).
    const NAME_SPACE: &'static str;

    /// Returns the client used for every request.
    fn client(&self) -> &RestClient;

    /// Iterates over every instance, `per_page` at a time, fetching at most
    /// `max_pages` pages (`max_pages <= 0` means no cap).
    fn all(&self, per_page: u32, max_pages: i32) -> Paginator<'_, Self::Instance> {
        Paginator::new(self.client(), Self::API_PATH, Vec::new(), per_page, max_pages)
    }

    /// Iterates over instances matching `conditions`.
    ///
    /// Every top-level key of `conditions` becomes a `conditions[<key>]`
    /// query parameter. The server matches fuzzily, so results may include
    /// near misses.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if `conditions` does not
    /// serialize to a JSON object.
    fn filter(
        &self,
        per_page: u32,
        max_pages: i32,
        conditions: &impl Serialize,
    ) -> Result<Paginator<'_, Self::Instance>, ResourceError> {
        let params = condition_params(conditions)?;
        Ok(Paginator::new(self.client(), Self::API_PATH, params, per_page, max_pages))
    }

    /// Creates an object from `attrs` and returns it as the server stored it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::CreationFailed`] on a 422, with the server's
    /// error payload.
    fn create(&self, attrs: &impl Serialize) -> Result<Self::Instance, ResourceError> {
        self.create_with_params(Vec::new(), attrs)
    }

    /// Like [`create`](Self::create), with extra query parameters appended to
    /// the collection endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::CreationFailed`] on a 422, and
    /// [`ResourceError::MalformedResponse`] if the server answers without an
    /// object.
    fn create_with_params(
        &self,
        extra_params: QueryParams,
        attrs: &impl Serialize,
    ) -> Result<Self::Instance, ResourceError> {
        let url = self
            .client()
            .endpoint(Self::API_PATH)
            .extra_params(extra_params)
            .without_page_params()
            .build();
        let body = namespaced(Self::NAME_SPACE, attrs)?;

        tracing::debug!(resource = <Self::Instance as Resource>::NAME, "creating");
        let created = self.client().http().post(url, body).map_err(|e| match e {
            HttpError::Validation(err) => ResourceError::CreationFailed {
                resource: <Self::Instance as Resource>::NAME,
                errors: err.response.json_or_text(),
            },
            other => ResourceError::Http(other),
        })?;

        instance_from_body(created)
    }

    /// Returns the first instance matching `conditions`, or creates one from
    /// `attrs` when nothing matches.
    ///
    /// The boolean is `true` when a new object was created. Because matching
    /// is fuzzy, callers should check that an existing hit really matches.
    ///
    /// # Errors
    ///
    /// Returns any error from the lookup or from [`create`](Self::create).
    fn get_or_create(
        &self,
        conditions: &impl Serialize,
        attrs: &impl Serialize,
    ) -> Result<(bool, Self::Instance), ResourceError> {
        if let Some(existing) = self.filter(1, 1, conditions)?.next() {
            return Ok((false, existing?));
        }
        Ok((true, self.create(attrs)?))
    }

    /// Updates the object addressed by `object` with `attrs` and returns the
    /// stored result.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::MissingId`] for an instance without an `id`; no
    ///   request is sent
    /// - [`ResourceError::DoesNotExist`] on a 404
    /// - [`ResourceError::UpdateFailed`] on a 422, with the server's payload
    fn update<'r>(
        &self,
        object: impl Into<ObjectRef<'r, Self::Instance>>,
        attrs: &impl Serialize,
    ) -> Result<Self::Instance, ResourceError>
    where
        Self::Instance: 'r,
    {
        let id = resolve_id(object.into())?;
        let url = self
            .client()
            .endpoint(Self::API_PATH)
            .object_id(&id)
            .without_page_params()
            .build();
        let body = namespaced(Self::NAME_SPACE, attrs)?;

        tracing::debug!(resource = <Self::Instance as Resource>::NAME, id = %id, "updating");
        let updated = self.client().http().put(url, body).map_err(|e| match e {
            HttpError::Validation(err) => ResourceError::UpdateFailed {
                resource: <Self::Instance as Resource>::NAME,
                id: id.clone(),
                errors: err.response.json_or_text(),
            },
            other => ResourceError::not_found_as_missing(other, <Self::Instance as Resource>::NAME, &id),
        })?;

        instance_from_body(updated)
    }

    /// Deletes the object addressed by `object`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] for an instance without an `id`
    /// and [`ResourceError::DoesNotExist`] on a 404.
    fn delete<'r>(&self, object: impl Into<ObjectRef<'r, Self::Instance>>) -> Result<(), ResourceError>
    where
        Self::Instance: 'r,
    {
        let id = resolve_id(object.into())?;
        let url = self
            .client()
            .endpoint(Self::API_PATH)
            .object_id(&id)
            .without_page_params()
            .build();

        tracing::debug!(resource = <Self::Instance as Resource>::NAME, id = %id, "deleting");
        self.client()
            .http()
            .delete(url)
            .map_err(|e| ResourceError::not_found_as_missing(e, <Self::Instance as Resource>::NAME, &id))?;
        Ok(())
    }

    /// Fetches one object by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::DoesNotExist`] on a 404 and
    /// [`ResourceError::MalformedResponse`] if the body is not an object.
    fn get_by_id(&self, id: impl Display) -> Result<Self::Instance, ResourceError> {
        let id = id.to_string();
        let url = self
            .client()
            .endpoint(Self::API_PATH)
            .object_id(&id)
            .without_page_params()
            .build();

        let body = self
            .client()
            .http()
            .get(url)
            .map_err(|e| ResourceError::not_found_as_missing(e, <Self::Instance as Resource>::NAME, &id))?;

        instance_from_body(body)
    }
}

/// Converts filter conditions into `conditions[<key>]` query parameters.
///
/// Strings are sent verbatim and scalars via their JSON rendering; nulls are
/// skipped. A null `conditions` value means no conditions.
fn condition_params(conditions: &impl Serialize) -> Result<QueryParams, ResourceError> {
    let fields = match serde_json::to_value(conditions)? {
        Value::Object(fields) => fields,
        Value::Null => Map::new(),
        other => {
            return Err(ResourceError::Serialization(<serde_json::Error as serde::ser::Error>::custom(format!(
                "filter conditions must be an object, got {other}"
            ))))
        }
    };

    Ok(fields
        .into_iter()
        .filter_map(|(key, value)| {
            let value = match value {
                Value::Null => return None,
                Value::String(s) => s,
                other => other.to_string(),
            };
            Some((format!("conditions[{key}]"), value))
        })
        .collect())
}

/// Wraps `attrs` as `{name_space: attrs}`.
fn namespaced(name_space: &str, attrs: &impl Serialize) -> Result<Value, ResourceError> {
    let mut body = Map::new();
    body.insert(name_space.to_string(), serde_json::to_value(attrs)?);
    Ok(Value::Object(body))
}

fn resolve_id<R: Resource>(object: ObjectRef<'_, R>) -> Result<String, ResourceError> {
    object
        .object_id()
        .ok_or(ResourceError::MissingId { resource: R::NAME })
}

fn instance_from_body<R: Resource>(body: Option<Value>) -> Result<R, ResourceError> {
    let body = body.ok_or_else(|| ResourceError::MalformedResponse {
        resource: R::NAME.to_string(),
        reason: "empty response body".to_string(),
    })?;
    R::from_value(body).ok_or_else(|| ResourceError::MalformedResponse {
        resource: R::NAME.to_string(),
        reason: "expected a JSON object".to_string(),
    })
}
