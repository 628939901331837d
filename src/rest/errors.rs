//! Resource-specific error types for collection operations.
//!
//! The executor reports raw HTTP failures; collections translate the two
//! status codes that carry domain meaning and let everything else through:
//!
//! - **404**: [`ResourceError::DoesNotExist`]
//! - **422 on create**: [`ResourceError::CreationFailed`]
//! - **422 on update**: [`ResourceError::UpdateFailed`]
//! - **anything else**: [`ResourceError::Http`], unchanged
//!
//! # Example
//!
//! ```rust,ignore
//! use pipelinedeals::rest::{Collection, ResourceError};
//!
//! match client.people().get_by_id(123) {
//!     Ok(person) => println!("Found: {person}"),
//!     Err(ResourceError::DoesNotExist { resource, id }) => {
//!         println!("{resource} {id} is gone");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::clients::HttpError;

/// Error type for collection operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The object was not found (HTTP 404).
    #[error("{resource} with id {id} does not exist")]
    DoesNotExist {
        /// The type name of the resource (e.g. "Person").
        resource: &'static str,
        /// The id that was requested.
        id: String,
    },

    /// The server rejected a create request (HTTP 422).
    #[error("Failed to create {resource}: {errors}")]
    CreationFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The server's error payload.
        errors: Value,
    },

    /// The server rejected an update request (HTTP 422).
    #[error("Failed to update {resource} with id {id}: {errors}")]
    UpdateFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The id of the object being updated.
        id: String,
        /// The server's error payload.
        errors: Value,
    },

    /// An instance without an `id` field was used to address an object.
    #[error("{resource} has no id")]
    MissingId {
        /// The type name of the resource.
        resource: &'static str,
    },

    /// A success response did not have the expected shape.
    #[error("Malformed response for {resource}: {reason}")]
    MalformedResponse {
        /// The type name of the resource, or the API path for raw fetches.
        resource: String,
        /// What was wrong with the response.
        reason: String,
    },

    /// Request attributes could not be serialized.
    #[error("Failed to serialize request attributes: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An HTTP-level error with no resource-specific meaning.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Turns a 404 into [`DoesNotExist`](Self::DoesNotExist); other errors pass through.
    pub(crate) fn not_found_as_missing(error: HttpError, resource: &'static str, id: &str) -> Self {
        match error {
            HttpError::NotFound(_) => Self::DoesNotExist {
                resource,
                id: id.to_string(),
            },
            other => Self::Http(other),
        }
    }

    /// Returns the server payload of a creation or update failure.
    #[must_use]
    pub const fn errors(&self) -> Option<&Value> {
        match self {
            Self::CreationFailed { errors, .. } | Self::UpdateFailed { errors, .. } => Some(errors),
            _ => None,
        }
    }
}
