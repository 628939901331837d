//! HTTP client types for PipelineDeals API communication.
//!
//! # Overview
//!
//! - [`Transport`]: the seam to the network; [`ReqwestTransport`] is the
//!   default blocking implementation
//! - [`HttpClient`]: sends requests through a transport and maps status
//!   codes to [`HttpError`] variants
//! - [`HttpRequest`] / [`HttpResponse`]: the request and response types
//! - [`HttpMethod`]: supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`rest::RestClient`]: the API entry point built on top of the above
//!
//! # Status Codes
//!
//! | status  | result                     |
//! |---------|----------------------------|
//! | 2xx     | parsed JSON body, or `None` when `content-length` is 0 |
//! | 404     | [`HttpError::NotFound`]    |
//! | 422     | [`HttpError::Validation`]  |
//! | 500     | [`HttpError::Server`]      |
//! | other   | [`HttpError::Response`]    |
//!
//! Requests are never retried.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;
pub(crate) mod transport;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::HttpClient;
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use transport::{ReqwestTransport, Transport, SDK_VERSION};

pub use rest::RestClient;
