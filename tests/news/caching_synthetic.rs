use std::time::Duration;

use cryptonews::{CacheMode, NewsBuilder, Symbol};
use httpmock::{Method::GET, MockServer};

use crate::common;

#[tokio::test]
async fn news_serves_from_cache_on_second_call() {
    let server = MockServer::start();

    // This mock only expects to be called ONCE.
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1")
            .query_param("tickers", "BTC");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("news", "BTC", "json"));
    });

    let client = common::client_builder(&server)
        .cache_ttl(Duration::from_secs(10))
        .build()
        .unwrap();

    let builder = NewsBuilder::new(&client, Symbol::parse("btc").unwrap());

    let first = builder.clone().fetch().await.unwrap();
    mock.assert_calls(1);

    // Different spelling, same ticker: still a cache hit.
    let second = NewsBuilder::new(&client, Symbol::parse("BTC").unwrap())
        .fetch()
        .await
        .unwrap();
    mock.assert_calls(1);

    assert_eq!(first, second);

    let stats = client.cache_stats().await;
    assert_eq!(stats.entries, 1);
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
}

#[tokio::test]
async fn news_cache_refresh_bypasses_cache_get_but_updates_cache() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1")
            .query_param("tickers", "BTC");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("news", "BTC", "json"));
    });

    let client = common::client_builder(&server)
        .cache_ttl(Duration::from_secs(10))
        .build()
        .unwrap();
    let builder = NewsBuilder::new(&client, Symbol::parse("BTC").unwrap());

    let _ = builder.clone().fetch().await.unwrap();
    mock.assert_calls(1);

    let _ = builder
        .clone()
        .cache_mode(CacheMode::Refresh)
        .fetch()
        .await
        .unwrap();
    mock.assert_calls(2);

    let _ = builder.clone().fetch().await.unwrap();
    mock.assert_calls(2);
}

#[tokio::test]
async fn news_cache_bypass_never_stores() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("news", "BTC", "json"));
    });

    let client = common::client_builder(&server)
        .cache_ttl(Duration::from_secs(10))
        .build()
        .unwrap();
    let builder =
        NewsBuilder::new(&client, Symbol::parse("BTC").unwrap()).cache_mode(CacheMode::Bypass);

    let _ = builder.clone().fetch().await.unwrap();
    let _ = builder.clone().fetch().await.unwrap();
    mock.assert_calls(2);
    assert_eq!(client.cache_stats().await.entries, 0);
}

#[tokio::test]
async fn failed_responses_are_not_cached() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1");
        then.status(200).body("not json at all");
    });

    let client = common::client_builder(&server)
        .cache_ttl(Duration::from_secs(10))
        .build()
        .unwrap();

    let builder = NewsBuilder::new(&client, Symbol::parse("BTC").unwrap());
    assert!(builder.clone().fetch().await.is_err());
    assert!(builder.clone().fetch().await.is_err());
    mock.assert_calls(2);
}
