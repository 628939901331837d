//! REST API client for PipelineDeals.
//!
//! [`RestClient`] pairs a [`PipelineDealsConfig`](crate::PipelineDealsConfig)
//! with the [`HttpClient`](crate::clients::HttpClient) executor. It builds
//! endpoints, runs raw page-by-page fetches, and hands out the resource
//! collections.
//!
//! # Example
//!
//! ```rust,ignore
//! use pipelinedeals::{ApiKey, PipelineDealsConfig, RestClient};
//! use pipelinedeals::rest::Collection;
//! use serde_json::json;
//!
//! let config = PipelineDealsConfig::builder()
//!     .api_key(ApiKey::new("your-api-key")?)
//!     .build()?;
//! let client = RestClient::new(config)?;
//!
//! let deal = client.deals().create(&json!({"name": "Annual renewal"}))?;
//! println!("Created {deal}");
//! ```

mod client;

pub use client::RestClient;
