//! REST resource layer for the PipelineDeals API.
//!
//! - [`Endpoint`]: URL construction with the API key, extra parameters and
//!   page parameters
//! - [`Resource`]: read-only view over one returned object
//! - [`Page`] / [`Paginator`]: one page of a list response, and lazy iteration
//!   across pages
//! - [`Collection`]: list, filter, create, update, delete and fetch for one
//!   resource
//! - [`ResourceError`]: 404 and 422 translated into domain errors
//!
//! The concrete resources live in [`resources`].
//!
//! # Example
//!
//! ```rust,ignore
//! use pipelinedeals::rest::Collection;
//! use serde_json::json;
//!
//! let deals = client.deals();
//! for deal in deals.filter(50, 0, &json!({"status": "open"}))? {
//!     let deal = deal?;
//!     deals.update(&deal, &json!({"status": "won"}))?;
//! }
//! ```

mod collection;
pub mod endpoint;
mod errors;
mod page;
mod pagination;
pub(crate) mod resource;
pub mod resources;

pub use collection::Collection;
pub use endpoint::{Endpoint, QueryParams, DEFAULT_PER_PAGE};
pub use errors::ResourceError;
pub use page::{Page, Pagination};
pub use pagination::{FetchIter, Paginator};
pub use resource::{id_to_string, ObjectRef, Resource};
