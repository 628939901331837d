//! Configuration types for the PipelineDeals API client.
//!
//! # Overview
//!
//! - [`PipelineDealsConfig`]: everything the client needs to reach the API
//! - [`PipelineDealsConfigBuilder`]: a builder for constructing it
//! - [`ApiKey`]: a validated API key newtype with masked debug output
//! - [`Protocol`]: the URL scheme (`https` by default)
//!
//! # Example
//!
//! ```rust
//! use pipelinedeals::{ApiKey, PipelineDealsConfig};
//!
//! let config = PipelineDealsConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.domain(), "api.pipelinedeals.com");
//! assert_eq!(config.prefix(), "api/v3");
//! ```

mod newtypes;

use std::time::Duration;

pub use newtypes::{ApiKey, Protocol};

use crate::error::ConfigError;

/// Default API host.
pub const DEFAULT_DOMAIN: &str = "api.pipelinedeals.com";

/// Default path prefix placed between the host and the resource path.
pub const DEFAULT_PREFIX: &str = "api/v3";

/// Default response format suffix.
pub const DEFAULT_FORMAT: &str = "json";

/// Configuration for the PipelineDeals API client.
///
/// `PipelineDealsConfig` is `Clone`, `Send`, and `Sync`, so one configuration
/// can back any number of clients.
#[derive(Clone, Debug)]
pub struct PipelineDealsConfig {
    api_key: ApiKey,
    protocol: Protocol,
    domain: String,
    prefix: String,
    format: String,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl PipelineDealsConfig {
    /// Creates a new builder for constructing a `PipelineDealsConfig`.
    #[must_use]
    pub fn builder() -> PipelineDealsConfigBuilder {
        PipelineDealsConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the URL scheme.
    #[must_use]
    pub const fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Returns the API host (optionally with a port).
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the path prefix, without leading or trailing slashes.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the response format suffix (e.g. `json`).
    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request timeout handed to the transport, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify PipelineDealsConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PipelineDealsConfig>();
};

/// Builder for constructing [`PipelineDealsConfig`] instances.
///
/// Only `api_key` is required.
///
/// # Defaults
///
/// - `protocol`: `https`
/// - `domain`: `api.pipelinedeals.com`
/// - `prefix`: `api/v3`
/// - `format`: `json`
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None`
///
/// # Example
///
/// ```rust
/// use pipelinedeals::{ApiKey, PipelineDealsConfig, Protocol};
///
/// let config = PipelineDealsConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .protocol(Protocol::Http)
///     .domain("127.0.0.1:8080")
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.protocol(), Protocol::Http);
/// ```
#[derive(Debug, Default)]
pub struct PipelineDealsConfigBuilder {
    api_key: Option<ApiKey>,
    protocol: Option<Protocol>,
    domain: Option<String>,
    prefix: Option<String>,
    format: Option<String>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl PipelineDealsConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the URL scheme.
    #[must_use]
    pub const fn protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = Some(protocol);
        self
    }

    /// Sets the API host. A port may be included (`localhost:3000`).
    #[must_use]
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Sets the path prefix. Surrounding slashes are stripped.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the response format suffix.
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the request timeout used by the default transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`PipelineDealsConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set,
    /// and [`ConfigError::InvalidDomain`] if the domain is empty or contains
    /// a scheme or path.
    pub fn build(self) -> Result<PipelineDealsConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let domain = self.domain.unwrap_or_else(|| DEFAULT_DOMAIN.to_string());
        if domain.trim().is_empty() || domain.contains("://") || domain.contains('/') {
            return Err(ConfigError::InvalidDomain { domain });
        }

        let prefix = self
            .prefix
            .map_or_else(|| DEFAULT_PREFIX.to_string(), |p| p.trim_matches('/').to_string());

        Ok(PipelineDealsConfig {
            api_key,
            protocol: self.protocol.unwrap_or_default(),
            domain,
            prefix,
            format: self.format.unwrap_or_else(|| DEFAULT_FORMAT.to_string()),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
