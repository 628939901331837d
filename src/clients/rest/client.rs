//! REST client implementation for the PipelineDeals API.
//!
//! This module provides the [`RestClient`] type: the configuration plus the
//! HTTP executor, and the entry point to every resource collection.

use std::sync::Arc;

use crate::clients::{HttpClient, HttpError, Transport};
use crate::config::PipelineDealsConfig;
use crate::rest::endpoint::QueryParams;
use crate::rest::resources::{CompanyCollection, DealCollection, PersonCollection};
use crate::rest::{Endpoint, FetchIter};

/// REST API client for PipelineDeals.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`. Collections borrow it, so several threads
/// can share one client and iterate independently.
///
/// # Example
///
/// ```rust,ignore
/// use pipelinedeals::{ApiKey, PipelineDealsConfig, RestClient};
/// use pipelinedeals::rest::Collection;
///
/// let config = PipelineDealsConfig::builder()
///     .api_key(ApiKey::new("your-api-key")?)
///     .build()?;
/// let client = RestClient::new(config)?;
///
/// for person in client.people().all(200, 1) {
///     println!("{}", person?);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct RestClient {
    config: PipelineDealsConfig,
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a client using the default blocking `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the transport cannot be created.
    pub fn new(config: PipelineDealsConfig) -> Result<Self, HttpError> {
        let http_client = HttpClient::new(&config)?;
        tracing::debug!(
            domain = config.domain(),
            prefix = config.prefix(),
            "PipelineDeals client created"
        );
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Creates a client that sends every request through `transport`.
    #[must_use]
    pub fn with_transport(config: PipelineDealsConfig, transport: impl Transport + 'static) -> Self {
        Self {
            config,
            http_client: HttpClient::with_transport(transport),
        }
    }

    /// Creates a client sharing an existing transport.
    #[must_use]
    pub fn from_shared(config: PipelineDealsConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config,
            http_client: HttpClient::from_shared(transport),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &PipelineDealsConfig {
        &self.config
    }

    /// Returns the HTTP executor.
    #[must_use]
    pub const fn http(&self) -> &HttpClient {
        &self.http_client
    }

    /// Starts building a URL for `api_path` under this client's configuration.
    #[must_use]
    pub fn endpoint(&self, api_path: impl Into<String>) -> Endpoint<'_> {
        Endpoint::new(&self.config, api_path)
    }

    /// Iterates over the raw entries of `api_path`, page by page, until the
    /// server reports the last page.
    ///
    /// Unlike collection iteration there is no page cap and entries are not
    /// wrapped in a resource type.
    pub fn fetch_iter(&self, api_path: impl Into<String>, extra_params: QueryParams) -> FetchIter<'_> {
        FetchIter::new(self, api_path.into(), extra_params)
    }

    /// Returns the people collection.
    #[must_use]
    pub const fn people(&self) -> PersonCollection<'_> {
        PersonCollection::new(self)
    }

    /// Returns the companies collection.
    #[must_use]
    pub const fn companies(&self) -> CompanyCollection<'_> {
        CompanyCollection::new(self)
    }

    /// Returns the deals collection.
    #[must_use]
    pub const fn deals(&self) -> DealCollection<'_> {
        DealCollection::new(self)
    }
}
