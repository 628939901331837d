//! HTTP-specific error types for the PipelineDeals API client.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: a non-2xx response, carrying the original response
//! - [`InvalidHttpRequestError`]: a request rejected before it is sent
//! - [`HttpError`]: unified error type; the status-code taxonomy lives in its
//!   variants (`NotFound`, `Validation`, `Server`, `Response`)
//!
//! # Example
//!
//! ```rust,ignore
//! use pipelinedeals::clients::HttpError;
//!
//! match client.http().request(request) {
//!     Ok(body) => println!("Success: {body:?}"),
//!     Err(HttpError::NotFound(e)) => println!("Missing: {}", e.response.body),
//!     Err(HttpError::Validation(e)) => println!("Rejected: {}", e.response.body),
//!     Err(e) => println!("Other failure: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::http_response::HttpResponse;

/// Error returned when a request receives a non-successful response.
///
/// The original response is kept intact so callers can inspect the status,
/// headers and raw payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP {code}: {}", .response.body)]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response that triggered the error.
    pub response: HttpResponse,
}

impl HttpResponseError {
    /// Wraps a response.
    #[must_use]
    pub const fn new(response: HttpResponse) -> Self {
        Self {
            code: response.code,
            response,
        }
    }
}

/// Error returned when an HTTP request fails validation.
///
/// Raised before anything reaches the transport.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The HTTP method is not one of the supported methods.
    #[error("Method {method} is not supported.")]
    InvalidMethod {
        /// The method that was provided.
        method: String,
    },

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The server answered 404.
    #[error("Not found: {0}")]
    NotFound(HttpResponseError),

    /// The server answered 422.
    #[error("Validation failed: {0}")]
    Validation(HttpResponseError),

    /// The server answered 500.
    #[error("Server error: {0}")]
    Server(HttpResponseError),

    /// Any other non-2xx response.
    #[error(transparent)]
    Response(HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A successful response declared a body that is not valid JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl HttpError {
    /// Classifies a non-2xx response by its status code.
    #[must_use]
    pub fn from_response(response: HttpResponse) -> Self {
        let error = HttpResponseError::new(response);
        match error.code {
            404 => Self::NotFound(error),
            422 => Self::Validation(error),
            500 => Self::Server(error),
            _ => Self::Response(error),
        }
    }

    /// Returns the failed response, for the variants that carry one.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponse> {
        match self {
            Self::NotFound(e) | Self::Validation(e) | Self::Server(e) | Self::Response(e) => {
                Some(&e.response)
            }
            _ => None,
        }
    }

    /// Returns the status code, for the variants that carry a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.response().map(|response| response.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn error_for(code: u16) -> HttpError {
        HttpError::from_response(HttpResponse::json(code, &json!({"error": "boom"})))
    }

    #[test]
    fn test_status_codes_map_to_variants() {
        assert!(matches!(error_for(404), HttpError::NotFound(_)));
        assert!(matches!(error_for(422), HttpError::Validation(_)));
        assert!(matches!(error_for(500), HttpError::Server(_)));
        assert!(matches!(error_for(400), HttpError::Response(_)));
        assert!(matches!(error_for(401), HttpError::Response(_)));
        assert!(matches!(error_for(503), HttpError::Response(_)));
    }

    #[test]
    fn test_failures_carry_the_original_response() {
        let error = error_for(422);
        let response = error.response().unwrap();

        assert_eq!(error.status(), Some(422));
        assert_eq!(response.json_body().unwrap(), json!({"error": "boom"}));
    }

    #[test]
    fn test_response_error_message_includes_code_and_body() {
        let error = HttpResponseError::new(HttpResponse::json(403, &json!({"error": "denied"})));
        let message = error.to_string();
        assert!(message.contains("403"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn test_invalid_method_has_no_response() {
        let error = HttpError::from(InvalidHttpRequestError::InvalidMethod {
            method: "patch".to_string(),
        });
        assert!(error.response().is_none());
        assert_eq!(error.to_string(), "Method patch is not supported.");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &error_for(404);
        let _: &dyn std::error::Error = &InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
    }
}
