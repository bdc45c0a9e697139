use chrono::{TimeZone, Utc};
use cryptonews::{NewsBuilder, NewsClient, NewsError, Symbol};
use httpmock::{Method::GET, MockServer};

use crate::common::{self, NEWS_KEY};

fn fixture(endpoint: &str, symbol: &str) -> String {
    common::fixture(endpoint, symbol, "json")
}

#[tokio::test]
async fn offline_news_uses_recorded_fixture() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1")
            .query_param("tickers", "BTC")
            .query_param("items", "3")
            .query_param("token", NEWS_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("news", "BTC"));
    });

    let client = common::client(&server);
    let articles = NewsBuilder::new(&client, Symbol::parse("BTC").unwrap())
        .fetch()
        .await
        .unwrap();

    mock.assert();

    // the undated fourth item is dropped
    assert_eq!(articles.len(), 3);

    let first = &articles[0];
    assert_eq!(first.title, "Bitcoin ETF inflows hit a monthly high");
    assert_eq!(first.source, "CoinDesk");
    assert_eq!(first.link, "https://example.com/news/bitcoin-etf-inflows");
    assert_eq!(
        first.date,
        Utc.with_ymd_and_hms(2023, 10, 18, 14, 30, 0).unwrap()
    );
    assert!(first.summary.ends_with("..."));
    assert_eq!(first.summary.chars().count(), 153);

    assert_eq!(
        articles[1].summary,
        "Public miners are raising capital ahead of the next halving."
    );
}

#[tokio::test]
async fn offline_news_builder_configures_request() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1")
            .query_param("tickers", "BTC")
            .query_param("items", "5")
            .query_param("token", NEWS_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("news", "BTC"));
    });

    let client = common::client(&server);
    let _articles = NewsBuilder::new(&client, Symbol::parse("  btc ").unwrap())
        .count(5)
        .fetch()
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn offline_news_reads_alternative_news_array() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1")
            .query_param("tickers", "ETH");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("news_alt", "ETH"));
    });

    let client = common::client(&server);
    let articles = NewsBuilder::new(&client, Symbol::parse("eth").unwrap())
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].source, "CryptoSlate");
    assert_eq!(articles[1].source, "Blockworks");
    assert_eq!(articles[1].link, "https://example.com/eth/staking");
    assert_eq!(
        articles[1].date,
        Utc.with_ymd_and_hms(2023, 10, 17, 18, 45, 0).unwrap()
    );
}

#[tokio::test]
async fn offline_news_empty_when_provider_sends_only_a_message() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"message":"No news for this ticker"}"#);
    });

    let client = common::client(&server);
    let articles = NewsBuilder::new(&client, Symbol::parse("NOPE").unwrap())
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert!(articles.is_empty());
}

#[tokio::test]
async fn news_without_api_key_is_a_config_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1");
        then.status(200).body("{}");
    });

    let client = NewsClient::builder()
        .base_news(common::news_base(&server))
        .build()
        .unwrap();
    let result = NewsBuilder::new(&client, Symbol::parse("BTC").unwrap())
        .fetch()
        .await;

    assert!(matches!(result, Err(NewsError::Config(_))));
    mock.assert_calls(0);
}
