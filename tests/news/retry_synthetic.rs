use cryptonews::{NewsBuilder, NewsError, RetryConfig, Symbol};
use httpmock::{Method::GET, MockServer};

use crate::common;

#[tokio::test]
async fn news_retries_on_persistent_5xx() {
    let server = MockServer::start();

    // This single mock will persistently fail, allowing us to count the retries.
    let fail_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1")
            .query_param("tickers", "BTC");
        then.status(503).body("Service Unavailable");
    });

    // common::client retries twice with a 1ms fixed backoff.
    let client = common::client(&server);
    let result = NewsBuilder::new(&client, Symbol::parse("BTC").unwrap())
        .fetch()
        .await;

    fail_mock.assert_calls(3);

    match result {
        Err(NewsError::ServerError { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected a ServerError after all retries failed, got {other:?}"),
    }
}

#[tokio::test]
async fn per_call_policy_can_disable_retries() {
    let server = MockServer::start();

    let fail_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1");
        then.status(502);
    });

    let client = common::client(&server);
    let result = NewsBuilder::new(&client, Symbol::parse("BTC").unwrap())
        .retry_policy(Some(RetryConfig::disabled()))
        .fetch()
        .await;

    fail_mock.assert_calls(1);
    assert!(matches!(
        result,
        Err(NewsError::ServerError { status: 502, .. })
    ));
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1");
        then.status(400).body("bad request");
    });

    let client = common::client(&server);
    let result = NewsBuilder::new(&client, Symbol::parse("BTC").unwrap())
        .fetch()
        .await;

    mock.assert_calls(1);
    assert!(matches!(result, Err(NewsError::Status { status: 400, .. })));
}
