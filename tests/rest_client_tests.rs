//! Integration tests for the REST client against a mock HTTP server.
//!
//! The client is blocking, so every call runs on a blocking thread while the
//! mock server runs on the tokio runtime.

use pipelinedeals::rest::Collection;
use pipelinedeals::{
    ApiKey, HttpError, PipelineDealsConfig, Protocol, Resource, ResourceError, RestClient,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(domain: &str) -> RestClient {
    let config = PipelineDealsConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .protocol(Protocol::Http)
        .domain(domain)
        .user_agent_prefix("IntegrationTests/1.0")
        .build()
        .unwrap();
    RestClient::new(config).unwrap()
}

/// Builds a client for `server` and runs `f` with it off the async runtime.
///
/// The blocking client must be created and dropped outside async context.
async fn blocking<T, F>(server: &MockServer, f: F) -> T
where
    T: Send + 'static,
    F: FnOnce(RestClient) -> T + Send + 'static,
{
    let domain = server.address().to_string();
    tokio::task::spawn_blocking(move || f(client_for(&domain)))
        .await
        .unwrap()
}

fn page(entries: serde_json::Value, page: u32, pages: u32) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "entries": entries,
        "pagination": {"page": page, "pages": pages, "per_page": 2, "total": 3}
    }))
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_person_sends_namespaced_body_and_flags() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/people.json/"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("check_for_duplicates", "true"))
        .and(query_param("deliver_assignment_email", "true"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"person": {"first_name": "Ada", "last_name": "Lovelace"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 101,
            "first_name": "Ada",
            "last_name": "Lovelace"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let person = blocking(&server, |client| {
        client
            .people()
            .check_for_duplicates(true)
            .create(&json!({"first_name": "Ada", "last_name": "Lovelace"}))
    })
    .await
    .unwrap();

    assert_eq!(person.to_string(), "Person<101>");
    assert_eq!(person.get("last_name"), Some(&json!("Lovelace")));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_default_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/deals/1.json/"))
        .and(header("accept", "application/json"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let deal = blocking(&server, |client| client.deals().get_by_id(1))
        .await
        .unwrap();

    assert_eq!(deal.to_string(), "Deal<1>");
    let requests = server.received_requests().await.unwrap();
    let user_agent = requests[0].headers.get(&"user-agent".into()).unwrap().as_str();
    assert!(user_agent.starts_with("IntegrationTests/1.0 | PipelineDeals API Library v"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_by_id_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/companies/77.json/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})))
        .mount(&server)
        .await;

    let error = blocking(&server, |client| client.companies().get_by_id(77))
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "Company with id 77 does not exist");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_validation_failure_carries_server_payload() {
    let server = MockServer::start().await;
    let payload = json!({"email": ["is invalid"]});
    Mock::given(method("PUT"))
        .and(path("/api/v3/people/5.json/"))
        .and(body_json(json!({"person": {"email": "nope"}})))
        .respond_with(ResponseTemplate::new(422).set_body_json(payload.clone()))
        .mount(&server)
        .await;

    let error = blocking(&server, |client| {
        client.people().update(5_u64, &json!({"email": "nope"}))
    })
    .await
    .unwrap_err();

    match error {
        ResourceError::UpdateFailed {
            resource,
            id,
            errors,
        } => {
            assert_eq!(resource, "Person");
            assert_eq!(id, "5");
            assert_eq!(errors, payload);
        }
        other => panic!("expected UpdateFailed, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_with_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v3/deals/9.json/"))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let result = blocking(&server, |client| client.deals().delete(9_u64)).await;

    assert!(result.is_ok());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_passes_through_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let error = blocking(&server, |client| client.deals().delete(9_u64))
        .await
        .unwrap_err();

    match error {
        ResourceError::Http(HttpError::Server(err)) => {
            assert_eq!(err.code, 500);
            assert_eq!(err.response.body, "boom");
        }
        other => panic!("expected a server error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_all_walks_every_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/deals.json/"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "2"))
        .respond_with(page(json!([{"id": 1}, {"id": 2}]), 1, 2))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/deals.json/"))
        .and(query_param("page", "2"))
        .respond_with(page(json!([{"id": 3}]), 2, 2))
        .expect(1)
        .mount(&server)
        .await;

    let deals = blocking(&server, |client| {
        client
            .deals()
            .all(2, 0)
            .map(|deal| deal.map(|d| d.to_string()))
            .collect::<Result<Vec<_>, _>>()
    })
    .await
    .unwrap();

    assert_eq!(deals, vec!["Deal<1>", "Deal<2>", "Deal<3>"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_filter_encodes_conditions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/people.json/"))
        .and(query_param("conditions[email]", "ada@example.com"))
        .respond_with(page(json!([{"id": 4, "email": "ada@example.com"}]), 1, 1))
        .expect(1)
        .mount(&server)
        .await;

    let (created, person) = blocking(&server, |client| {
        client.people().get_or_create(
            &json!({"email": "ada@example.com"}),
            &json!({"email": "ada@example.com"}),
        )
    })
    .await
    .unwrap();

    assert!(!created);
    assert_eq!(person.get("email"), Some(&json!("ada@example.com")));
}
