use httpmock::prelude::*;
use portfolio_site::api::{fetch_json, fetch_portfolio, ApiConfig, ApiError};
use portfolio_site::portfolio::static_portfolio;

#[tokio::test]
async fn test_fetch_portfolio_success() {
    let server = MockServer::start();
    let body = serde_json::to_value(static_portfolio()).unwrap();

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/portfolio");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(body);
    });

    let config = ApiConfig::new(server.url("/portfolio"));
    let data = fetch_portfolio(&config).await.unwrap();

    api_mock.assert();
    assert_eq!(&data, static_portfolio());
}

#[tokio::test]
async fn test_fetch_json_does_not_enforce_schema() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/anything");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "hello": "world" }));
    });

    let config = ApiConfig::new(server.url("/anything"));
    let value = fetch_json(&config).await.unwrap();

    api_mock.assert();
    assert_eq!(value["hello"], "world");
}

#[tokio::test]
async fn test_fetch_without_endpoint_makes_no_request() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200);
    });

    let result = fetch_portfolio(&ApiConfig::default()).await;

    assert!(matches!(result, Err(ApiError::Configuration)));
    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("API URL not set"));
    api_mock.assert_hits(0);
}

#[tokio::test]
async fn test_fetch_non_success_status() {
    let server = MockServer::start();
    // A body that would decode fine must still be ignored
    let body = serde_json::to_value(static_portfolio()).unwrap();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/portfolio");
        then.status(500)
            .header("Content-Type", "application/json")
            .json_body(body);
    });

    let config = ApiConfig::new(server.url("/portfolio"));
    let result = fetch_portfolio(&config).await;

    api_mock.assert_hits(1);
    assert!(matches!(result, Err(ApiError::Request { status: 500 })));
}

#[tokio::test]
async fn test_fetch_not_found() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/missing");
        then.status(404);
    });

    let config = ApiConfig::new(server.url("/missing"));
    let result = fetch_json(&config).await;

    api_mock.assert();
    assert!(matches!(result, Err(ApiError::Request { status: 404 })));
}

#[tokio::test]
async fn test_fetch_malformed_body() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/portfolio");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("{ not json");
    });

    let config = ApiConfig::new(server.url("/portfolio"));
    let result = fetch_portfolio(&config).await;

    api_mock.assert();
    assert!(matches!(result, Err(ApiError::Decode(_))));
}
