use cryptonews::{NewsError, PriceBuilder, Symbol};
use httpmock::{Method::GET, MockServer};

use crate::common::{self, PRICE_KEY};

#[tokio::test]
async fn offline_price_reads_quote_and_sends_key_header() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/cryptocurrency/quotes/latest")
            .query_param("symbol", "BTC")
            .query_param("convert", "USD")
            .header("x-cmc_pro_api_key", PRICE_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("price", "BTC", "json"));
    });

    let client = common::client_builder(&server)
        .price_api_key(PRICE_KEY)
        .build()
        .unwrap();
    let price = PriceBuilder::new(&client, Symbol::parse("btc").unwrap())
        .fetch()
        .await
        .unwrap()
        .expect("fixture has a USD quote");

    mock.assert();
    assert_eq!(price.currency, "USD");
    assert_eq!(price.to_string(), "$28512.35");
}

#[tokio::test]
async fn offline_price_missing_currency_is_none() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/cryptocurrency/quotes/latest")
            .query_param("convert", "EUR");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("price", "BTC", "json"));
    });

    let client = common::client_builder(&server)
        .price_api_key(PRICE_KEY)
        .build()
        .unwrap();
    let price = PriceBuilder::new(&client, Symbol::parse("BTC").unwrap())
        .convert("eur")
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert!(price.is_none());
}

#[tokio::test]
async fn price_requires_a_key() {
    let server = MockServer::start();
    let client = common::client(&server);
    let result = PriceBuilder::new(&client, Symbol::parse("BTC").unwrap())
        .fetch()
        .await;
    assert!(matches!(result, Err(NewsError::Config(_))));
}
