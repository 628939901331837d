//! The wire-level seam between the client and the network.
//!
//! [`HttpClient`](crate::clients::HttpClient) never talks to the network
//! directly; it hands a fully-built [`HttpRequest`] to a [`Transport`] and
//! interprets whatever [`HttpResponse`] comes back. The default transport is
//! [`ReqwestTransport`], a blocking `reqwest` client.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::PipelineDealsConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sends a request and returns the raw response.
///
/// Implementations must not interpret status codes: a 404 is a successful
/// round trip at this layer.
pub trait Transport: fmt::Debug + Send + Sync {
    /// Performs one blocking round trip.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] (or another variant of the
    /// implementor's choosing) when no response could be obtained.
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError>;
}

/// Blocking transport backed by `reqwest`.
#[derive(Debug)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
    default_headers: HashMap<String, String>,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl ReqwestTransport {
    /// Creates a transport using the configuration's user agent and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying client cannot be
    /// created (e.g. TLS initialization failure).
    pub fn new(config: &PipelineDealsConfig) -> Result<Self, HttpError> {
        let mut builder = reqwest::blocking::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            default_headers: default_headers(config),
        })
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        // `json` also sets the Content-Type header
        if let Some(body) = &request.body {
            req_builder = req_builder.json(body);
        }

        let res = req_builder.send()?;

        let code = res.status().as_u16();
        let headers = parse_response_headers(res.headers());
        let body = res.text()?;

        Ok(HttpResponse::new(code, headers, body))
    }
}

/// Builds the headers attached to every request.
fn default_headers(config: &PipelineDealsConfig) -> HashMap<String, String> {
    let user_agent_prefix = config
        .user_agent_prefix()
        .map_or(String::new(), |prefix| format!("{prefix} | "));
    let rust_version = env!("CARGO_PKG_RUST_VERSION");
    let user_agent =
        format!("{user_agent_prefix}PipelineDeals API Library v{SDK_VERSION} | Rust {rust_version}");

    let mut headers = HashMap::new();
    headers.insert("User-Agent".to_string(), user_agent);
    headers.insert("Accept".to_string(), "application/json".to_string());
    headers
}

/// Parses response headers into a `HashMap`.
fn parse_response_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in headers {
        let key = name.as_str().to_lowercase();
        let value = value.to_str().unwrap_or_default().to_string();
        result.entry(key).or_default().push(value);
    }
    result
}

/// An in-memory transport for unit tests: replays queued responses and
/// records every request it receives.
#[cfg(test)]
pub(crate) mod mock {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::{HttpError, HttpRequest, HttpResponse, Transport};

    #[derive(Debug, Default)]
    pub struct MockTransport {
        responses: Mutex<VecDeque<HttpResponse>>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl MockTransport {
        pub fn new(responses: impl IntoIterator<Item = HttpResponse>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().collect()),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Transport for MockTransport {
        fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
            self.requests.lock().unwrap().push(request.clone());
            let response = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("MockTransport ran out of responses");
            Ok(response)
        }
    }
}
