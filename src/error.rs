//! Error types for the PipelineDeals API client.
//!
//! This module contains the configuration errors raised while building a
//! [`PipelineDealsConfig`](crate::PipelineDealsConfig).
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use pipelinedeals::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid PipelineDeals API key.")]
    EmptyApiKey,

    /// The protocol is not one the client can speak.
    #[error("Invalid protocol '{protocol}'. Expected 'http' or 'https'.")]
    InvalidProtocol {
        /// The protocol that was provided.
        protocol: String,
    },

    /// The API domain is empty or malformed.
    #[error("Invalid API domain '{domain}'. Expected a host name such as 'api.pipelinedeals.com'.")]
    InvalidDomain {
        /// The domain that was provided.
        domain: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
