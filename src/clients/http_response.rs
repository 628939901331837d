//! HTTP response type for the PipelineDeals API client.
//!
//! The response keeps the raw body text so that failures can hand the
//! untouched payload back to the caller; JSON decoding happens on demand.

use std::collections::HashMap;

/// An HTTP response from the PipelineDeals API.
///
/// Header names are stored lowercased and may carry several values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`. Header names are lowercased.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, values)| (name.to_lowercase(), values))
            .collect();

        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Creates a JSON response with a matching `content-length` header.
    ///
    /// Mostly useful for transports that synthesize responses.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pipelinedeals::HttpResponse;
    /// use serde_json::json;
    ///
    /// let response = HttpResponse::json(200, &json!({"id": 1}));
    /// assert_eq!(response.content_length(), 8);
    /// ```
    #[must_use]
    pub fn json(code: u16, body: &serde_json::Value) -> Self {
        let body = body.to_string();
        let mut headers = HashMap::new();
        headers.insert("content-length".to_string(), vec![body.len().to_string()]);
        headers.insert(
            "content-type".to_string(),
            vec!["application/json".to_string()],
        );
        Self::new(code, headers, body)
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the named header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the declared `content-length`, or 0 when absent or unparsable.
    #[must_use]
    pub fn content_length(&self) -> u64 {
        self.header("content-length")
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the body is not valid JSON.
    pub fn json_body(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Returns the body as JSON, or as a JSON string when it does not parse.
    ///
    /// Used to carry server error payloads, which are not always JSON.
    #[must_use]
    pub fn json_or_text(&self) -> serde_json::Value {
        self.json_body()
            .unwrap_or_else(|_| serde_json::Value::String(self.body.clone()))
    }
}
