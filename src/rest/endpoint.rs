//! Endpoint building for REST resources.
//!
//! Every request URL has the same shape:
//!
//! ```text
//! <protocol>://<domain>/<prefix>/<api_path>[/<object_id>].<format>/?<query>
//! ```
//!
//! The query string always starts with the API key, followed by any extra
//! parameters (filter conditions, resource-specific flags) and, for list
//! requests, `page` and `per_page`.
//!
//! # Example
//!
//! ```rust
//! use pipelinedeals::rest::Endpoint;
//! use pipelinedeals::{ApiKey, PipelineDealsConfig};
//!
//! let config = PipelineDealsConfig::builder()
//!     .api_key(ApiKey::new("secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let url = Endpoint::new(&config, "people").page(2).per_page(50).build();
//! assert_eq!(
//!     url,
//!     "https://api.pipelinedeals.com/api/v3/people.json/?api_key=secret&page=2&per_page=50"
//! );
//!
//! let url = Endpoint::new(&config, "people")
//!     .object_id(42)
//!     .without_page_params()
//!     .build();
//! assert_eq!(
//!     url,
//!     "https://api.pipelinedeals.com/api/v3/people/42.json/?api_key=secret"
//! );
//! ```

use std::fmt::Display;

use crate::config::PipelineDealsConfig;

/// Default number of entries requested per page.
pub const DEFAULT_PER_PAGE: u32 = 200;

/// Ordered query parameters. Order is preserved in the generated URL.
pub type QueryParams = Vec<(String, String)>;

/// Sets `key` to `value`, replacing an existing entry in place.
pub(crate) fn set_param(params: &mut QueryParams, key: impl Into<String>, value: impl Into<String>) {
    let key = key.into();
    let value = value.into();
    if let Some(entry) = params.iter_mut().find(|(k, _)| *k == key) {
        entry.1 = value;
    } else {
        params.push((key, value));
    }
}

/// Builder for a fully-qualified request URL.
///
/// Defaults mirror a first-page list request: page params included,
/// `page = 1`, `per_page = 200`.
#[derive(Clone, Debug)]
pub struct Endpoint<'a> {
    config: &'a PipelineDealsConfig,
    api_path: String,
    object_id: Option<String>,
    extra_params: QueryParams,
    include_page_params: bool,
    page: u32,
    per_page: u32,
}

impl<'a> Endpoint<'a> {
    /// Starts an endpoint for the given resource path (e.g. `"people"`).
    #[must_use]
    pub fn new(config: &'a PipelineDealsConfig, api_path: impl Into<String>) -> Self {
        Self {
            config,
            api_path: api_path.into(),
            object_id: None,
            extra_params: Vec::new(),
            include_page_params: true,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Targets a single object.
    #[must_use]
    pub fn object_id(mut self, object_id: impl Display) -> Self {
        self.object_id = Some(object_id.to_string());
        self
    }

    /// Adds one extra query parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        set_param(&mut self.extra_params, key, value);
        self
    }

    /// Adds several extra query parameters.
    ///
    /// Keys must not collide with `api_key`, `page` or `per_page`.
    #[must_use]
    pub fn extra_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in params {
            set_param(&mut self.extra_params, key, value);
        }
        self
    }

    /// Sets the page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Leaves `page` and `per_page` out of the query string.
    #[must_use]
    pub const fn without_page_params(mut self) -> Self {
        self.include_page_params = false;
        self
    }

    /// Renders the URL.
    #[must_use]
    pub fn build(&self) -> String {
        let mut query: QueryParams = vec![(
            "api_key".to_string(),
            self.config.api_key().as_ref().to_string(),
        )];

        for (key, value) in &self.extra_params {
            set_param(&mut query, key.as_str(), value.as_str());
        }

        if self.include_page_params {
            set_param(&mut query, "page", self.page.to_string());
            set_param(&mut query, "per_page", self.per_page.to_string());
        }

        let detail = self
            .object_id
            .as_ref()
            .map_or_else(String::new, |id| format!("/{}", urlencoding::encode(id)));

        format!(
            "{protocol}://{domain}/{prefix}/{api_path}{detail}.{format}/?{query}",
            protocol = self.config.protocol(),
            domain = self.config.domain(),
            prefix = self.config.prefix(),
            api_path = self.api_path,
            format = self.config.format(),
            query = encode_query(&query),
        )
    }
}

/// Percent-encodes and joins query parameters.
fn encode_query(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, Protocol};

    fn config() -> PipelineDealsConfig {
        PipelineDealsConfig::builder()
            .api_key(ApiKey::new("abc123").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_list_endpoint_includes_page_params_by_default() {
        let config = config();
        let url = Endpoint::new(&config, "deals").build();

        assert_eq!(
            url,
            "https://api.pipelinedeals.com/api/v3/deals.json/?api_key=abc123&page=1&per_page=200"
        );
    }

    #[test]
    fn test_object_endpoint_appends_id_before_format() {
        let config = config();
        let url = Endpoint::new(&config, "companies")
            .object_id(7)
            .without_page_params()
            .build();

        assert_eq!(
            url,
            "https://api.pipelinedeals.com/api/v3/companies/7.json/?api_key=abc123"
        );
    }

    #[test]
    fn test_object_id_is_percent_encoded() {
        let config = config();
        let url = Endpoint::new(&config, "people")
            .object_id("a/b")
            .without_page_params()
            .build();

        assert_eq!(
            url,
            "https://api.pipelinedeals.com/api/v3/people/a%2Fb.json/?api_key=abc123"
        );
    }

    #[test]
    fn test_extra_params_come_after_api_key_and_are_encoded() {
        let config = config();
        let url = Endpoint::new(&config, "people")
            .param("conditions[email]", "a@b.com")
            .per_page(1)
            .build();

        assert_eq!(
            url,
            "https://api.pipelinedeals.com/api/v3/people.json/?api_key=abc123\
             &conditions%5Bemail%5D=a%40b.com&page=1&per_page=1"
        );
    }

    #[test]
    fn test_duplicate_extra_param_keeps_one_entry() {
        let config = config();
        let url = Endpoint::new(&config, "people")
            .extra_params([("check_for_duplicates", "false"), ("check_for_duplicates", "true")])
            .without_page_params()
            .build();

        assert!(url.ends_with("?api_key=abc123&check_for_duplicates=true"));
    }

    #[test]
    fn test_endpoint_honours_config() {
        let config = PipelineDealsConfig::builder()
            .api_key(ApiKey::new("k").unwrap())
            .protocol(Protocol::Http)
            .domain("127.0.0.1:8080")
            .prefix("api/v4")
            .build()
            .unwrap();

        let url = Endpoint::new(&config, "people").without_page_params().build();
        assert_eq!(url, "http://127.0.0.1:8080/api/v4/people.json/?api_key=k");
    }

    #[test]
    fn test_set_param_replaces_in_place() {
        let mut params: QueryParams = vec![("a".into(), "1".into()), ("b".into(), "2".into())];
        set_param(&mut params, "a", "3");
        set_param(&mut params, "c", "4");

        assert_eq!(
            params,
            vec![
                ("a".to_string(), "3".to_string()),
                ("b".to_string(), "2".to_string()),
                ("c".to_string(), "4".to_string()),
            ]
        );
    }
}
