//! One page of a paginated list response.
//!
//! List endpoints answer with an envelope:
//!
//! ```json
//! {"entries": [{...}, {...}], "pagination": {"page": 1, "pages": 3}}
//! ```
//!
//! [`Page`] keeps the raw entries and the position metadata, and turns the
//! entries into typed instances when iterated.

use std::marker::PhantomData;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::rest::{Resource, ResourceError};

/// Pagination block of a list response.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// The 1-indexed number of this page.
    pub page: u32,
    /// The total number of pages.
    pub pages: u32,
}

#[derive(Deserialize)]
struct Envelope {
    entries: Vec<Map<String, Value>>,
    pagination: Pagination,
}

/// A page of raw entries plus its position in the result set.
///
/// # Example
///
/// ```rust
/// use pipelinedeals::rest::Page;
/// use pipelinedeals::rest::resources::Deal;
/// use serde_json::json;
///
/// let page: Page<Deal> = Page::from_value(
///     json!({"entries": [{"id": 1}, {"id": 2}], "pagination": {"page": 2, "pages": 2}}),
///     "deals",
/// )
/// .unwrap();
///
/// assert!(page.is_last());
/// let deals: Vec<Deal> = page.into_iter().collect();
/// assert_eq!(deals.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Page<R> {
    entries: Vec<Map<String, Value>>,
    number: u32,
    pages: u32,
    _resource: PhantomData<R>,
}

impl<R> Page<R> {
    /// Parses a list response body.
    ///
    /// `resource` only names the collection in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedResponse`] if `entries` or
    /// `pagination` is missing or has the wrong shape.
    pub fn from_value(body: Value, resource: &str) -> Result<Self, ResourceError> {
        let envelope: Envelope =
            serde_json::from_value(body).map_err(|e| ResourceError::MalformedResponse {
                resource: resource.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            entries: envelope.entries,
            number: envelope.pagination.page,
            pages: envelope.pagination.pages,
            _resource: PhantomData,
        })
    }

    /// Returns the 1-indexed number of this page.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Returns the total number of pages reported by the server.
    #[must_use]
    pub const fn pages(&self) -> u32 {
        self.pages
    }

    /// Returns `true` when no page follows this one.
    ///
    /// `number >= pages` rather than `==` so that an empty result set
    /// reporting zero pages also ends iteration.
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.number >= self.pages
    }

    /// Returns the number of entries on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if this page has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the raw entries.
    #[must_use]
    pub fn entries(&self) -> &[Map<String, Value>] {
        &self.entries
    }

    /// Consumes the page, returning the raw entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<Map<String, Value>> {
        self.entries
    }
}

impl<R: Resource> IntoIterator for Page<R> {
    type Item = R;
    type IntoIter = std::iter::Map<std::vec::IntoIter<Map<String, Value>>, fn(Map<String, Value>) -> R>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter().map(R::from_fields as fn(Map<String, Value>) -> R)
    }
}
