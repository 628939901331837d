//! HTTP executor for PipelineDeals API communication.
//!
//! This module provides the [`HttpClient`] type, which sends requests through
//! a [`Transport`] and turns the status code into either a parsed JSON body
//! or a typed [`HttpError`].

use std::sync::Arc;

use serde_json::Value;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::transport::{ReqwestTransport, Transport};
use crate::config::PipelineDealsConfig;

/// Executes requests and maps status codes to typed failures.
///
/// - 2xx: success; the body is decoded only when `content-length` is non-zero
/// - 404: [`HttpError::NotFound`]
/// - 422: [`HttpError::Validation`]
/// - 500: [`HttpError::Server`]
/// - anything else: [`HttpError::Response`]
///
/// There is no retry logic: every failure is surfaced to the caller.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and cheap to clone (the transport is shared).
#[derive(Clone, Debug)]
pub struct HttpClient {
    transport: Arc<dyn Transport>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client backed by the default blocking `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the transport cannot be built.
    pub fn new(config: &PipelineDealsConfig) -> Result<Self, HttpError> {
        Ok(Self::with_transport(ReqwestTransport::new(config)?))
    }

    /// Creates a client backed by a custom transport.
    #[must_use]
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Creates a client sharing an existing transport.
    #[must_use]
    pub fn from_shared(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Sends a request and returns the decoded body, if any.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - request validation fails (`InvalidRequest`)
    /// - the transport fails (`Network`)
    /// - the status is not 2xx (`NotFound`, `Validation`, `Server`, `Response`)
    /// - a declared body is not JSON (`Decode`)
    pub fn request(&self, request: &HttpRequest) -> Result<Option<Value>, HttpError> {
        request.verify()?;

        tracing::debug!(method = %request.http_method, url = %redact(&request.url), "sending request");
        let response = self.transport.send(request)?;

        if !response.is_ok() {
            tracing::warn!(
                method = %request.http_method,
                url = %redact(&request.url),
                status = response.code,
                "request failed"
            );
            return Err(HttpError::from_response(response));
        }

        if response.content_length() == 0 {
            return Ok(None);
        }

        Ok(Some(response.json_body()?))
    }

    /// Sends a request whose verb is given by name (`"get"`, `"POST"`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] for an unsupported verb, without
    /// touching the transport; otherwise behaves like [`request`](Self::request).
    pub fn request_verb(
        &self,
        verb: &str,
        url: impl Into<String>,
        body: Option<Value>,
    ) -> Result<Option<Value>, HttpError> {
        let method: HttpMethod = verb.parse()?;
        let request = HttpRequest::builder(method, url).maybe_body(body).build()?;
        self.request(&request)
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub fn get(&self, url: impl Into<String>) -> Result<Option<Value>, HttpError> {
        self.request(&HttpRequest::builder(HttpMethod::Get, url).build()?)
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub fn post(&self, url: impl Into<String>, body: Value) -> Result<Option<Value>, HttpError> {
        self.request(&HttpRequest::builder(HttpMethod::Post, url).body(body).build()?)
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub fn put(&self, url: impl Into<String>, body: Value) -> Result<Option<Value>, HttpError> {
        self.request(&HttpRequest::builder(HttpMethod::Put, url).body(body).build()?)
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub fn delete(&self, url: impl Into<String>) -> Result<Option<Value>, HttpError> {
        self.request(&HttpRequest::builder(HttpMethod::Delete, url).build()?)
    }
}

/// Strips the query string so the API key never ends up in logs.
fn redact(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::transport::mock::MockTransport;
    use crate::clients::HttpResponse;
    use serde_json::json;
    use std::collections::HashMap;

    const URL: &str = "https://api.pipelinedeals.com/api/v3/people.json/?api_key=k";

    fn client_with(responses: Vec<HttpResponse>) -> (HttpClient, Arc<MockTransport>) {
        let transport = Arc::new(MockTransport::new(responses));
        let client = HttpClient::from_shared(transport.clone());
        (client, transport)
    }

    #[test]
    fn test_success_returns_parsed_json() {
        let (client, _) = client_with(vec![HttpResponse::json(200, &json!({"id": 5}))]);

        let body = client.get(URL).unwrap();
        assert_eq!(body, Some(json!({"id": 5})));
    }

    #[test]
    fn test_zero_content_length_yields_no_value() {
        let mut headers = HashMap::new();
        headers.insert("content-length".to_string(), vec!["0".to_string()]);
        let (client, _) = client_with(vec![HttpResponse::new(200, headers, "")]);

        assert_eq!(client.delete(URL).unwrap(), None);
    }

    #[test]
    fn test_missing_content_length_yields_no_value() {
        let (client, _) = client_with(vec![HttpResponse::new(204, HashMap::new(), "")]);
        assert_eq!(client.get(URL).unwrap(), None);
    }

    #[test]
    fn test_invalid_json_body_is_a_decode_error() {
        let mut headers = HashMap::new();
        headers.insert("content-length".to_string(), vec!["9".to_string()]);
        let (client, _) = client_with(vec![HttpResponse::new(200, headers, "not json!")]);

        assert!(matches!(client.get(URL), Err(HttpError::Decode(_))));
    }

    #[test]
    fn test_status_codes_map_to_failures() {
        let (client, _) = client_with(vec![
            HttpResponse::json(404, &json!({})),
            HttpResponse::json(422, &json!({"name": ["can't be blank"]})),
            HttpResponse::json(500, &json!({})),
            HttpResponse::json(401, &json!({})),
        ]);

        assert!(matches!(client.get(URL), Err(HttpError::NotFound(_))));
        match client.post(URL, json!({})) {
            Err(HttpError::Validation(e)) => {
                assert_eq!(
                    e.response.json_body().unwrap(),
                    json!({"name": ["can't be blank"]})
                );
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert!(matches!(client.put(URL, json!({})), Err(HttpError::Server(_))));
        assert!(matches!(
            client.get(URL),
            Err(HttpError::Response(e)) if e.code == 401
        ));
    }

    #[test]
    fn test_unsupported_verb_never_reaches_transport() {
        let (client, transport) = client_with(vec![]);

        let result = client.request_verb("patch", URL, None);

        assert!(matches!(result, Err(HttpError::InvalidRequest(_))));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_request_verb_dispatches_by_name() {
        let (client, transport) = client_with(vec![HttpResponse::json(200, &json!({"id": 1}))]);

        client
            .request_verb("PUT", URL, Some(json!({"person": {}})))
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].http_method, HttpMethod::Put);
        assert_eq!(requests[0].body, Some(json!({"person": {}})));
    }

    #[test]
    fn test_redact_strips_query_string() {
        assert_eq!(redact(URL), "https://api.pipelinedeals.com/api/v3/people.json/");
        assert_eq!(redact("https://x.test/a"), "https://x.test/a");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
