//! # PipelineDeals API Client
//!
//! A blocking Rust client for the PipelineDeals REST API (v3).
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`PipelineDealsConfig`] and
//!   [`PipelineDealsConfigBuilder`]
//! - A pluggable [`Transport`](clients::Transport) seam with a `reqwest`
//!   default
//! - An HTTP executor that maps status codes to typed errors
//! - Lazy, page-by-page iteration over list endpoints
//! - People, companies and deals collections with create, update, delete,
//!   lookup and fuzzy filtering
//!
//! ## Quick Start
//!
//! ```rust
//! use pipelinedeals::{ApiKey, PipelineDealsConfig, Protocol};
//!
//! let config = PipelineDealsConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .protocol(Protocol::Https)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.domain(), "api.pipelinedeals.com");
//! assert_eq!(config.prefix(), "api/v3");
//! ```
//!
//! ## Working with Resources
//!
//! ```rust,ignore
//! use pipelinedeals::{PipelineDealsConfig, RestClient};
//! use pipelinedeals::rest::{Collection, Resource};
//! use serde_json::json;
//!
//! let client = RestClient::new(config)?;
//!
//! // Every person, 200 per page, no page cap
//! for person in client.people().all(200, 0) {
//!     let person = person?;
//!     println!("{person}: {}", person.get_or("email", &json!("")));
//! }
//!
//! // Find or create a company
//! let (created, company) = client
//!     .companies()
//!     .check_for_duplicates(true)
//!     .get_or_create(&json!({"name": "Acme"}), &json!({"name": "Acme"}))?;
//!
//! // Update by instance or by id
//! client.deals().update(42, &json!({"name": "Renewal 2025"}))?;
//! ```
//!
//! ## Raw Bulk Fetches
//!
//! [`RestClient::fetch_iter`] walks any list endpoint and yields untyped
//! entries, following the page numbers the server reports:
//!
//! ```rust,ignore
//! let params = vec![("conditions[deal_stage]".to_string(), "3".to_string())];
//! for entry in client.fetch_iter("deals", params) {
//!     println!("{:?}", entry?.get("name"));
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **Fail-fast validation**: configuration is validated on construction
//! - **Thread-safe**: [`RestClient`] is `Send + Sync`
//! - **No retries**: every failure is returned to the caller
//! - **Quiet by default**: requests are logged through `tracing`; no
//!   subscriber is installed

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, PipelineDealsConfig, PipelineDealsConfigBuilder, Protocol};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RestClient,
};

// Re-export the resource layer
pub use rest::resources::{Company, Deal, Person};
pub use rest::{Collection, Resource, ResourceError};
