use cryptonews::web::AppState;
use httpmock::{Method::GET, MockServer};

use crate::common;

#[tokio::test]
async fn home_page_has_search_form() {
    let upstream = MockServer::start();
    let base = common::spawn_app(AppState::new(common::client(&upstream))).await;

    let resp = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert!(
        resp.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );
    let html = resp.text().await.unwrap();
    assert!(html.contains("id=\"search-form\""));
    assert!(html.contains("id=\"crypto-input\""));
    assert!(html.contains("No searches yet"));
}

#[tokio::test]
async fn script_is_served_as_javascript() {
    let upstream = MockServer::start();
    let base = common::spawn_app(AppState::new(common::client(&upstream))).await;

    let resp = reqwest::get(format!("{base}/static/script.js"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.contains("javascript"), "got {content_type}");
    let body = resp.text().await.unwrap();
    assert!(body.contains("/api/news?crypto="));

    let missing = reqwest::get(format!("{base}/static/nope.js")).await.unwrap();
    assert_eq!(missing.status(), 404);
}

#[tokio::test]
async fn search_page_renders_escaped_results() {
    let upstream = MockServer::start();
    let mock = upstream.mock(|when, then| {
        when.method(GET)
            .path("/api/v1")
            .query_param("tickers", "BTC");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("news", "BTC", "json"));
    });

    let base = common::spawn_app(AppState::new(common::client(&upstream))).await;
    let html = reqwest::get(format!("{base}/search?q=btc"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    mock.assert();
    assert!(html.contains("News for btc"));
    assert!(html.contains("Bitcoin ETF inflows hit a monthly high"));
    assert!(html.contains("Analyst says &lt;b&gt;buy&lt;/b&gt; &amp; hold"));
    assert!(!html.contains("<b>buy</b>"));
    assert_eq!(html.matches("class=\"news-article\"").count(), 3);
}

#[tokio::test]
async fn search_page_shows_error_message_on_upstream_failure() {
    let upstream = MockServer::start();
    upstream.mock(|when, then| {
        when.method(GET).path("/api/v1");
        then.status(404);
    });

    let base = common::spawn_app(AppState::new(common::client(&upstream))).await;
    let resp = reqwest::get(format!("{base}/search?q=btc")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let html = resp.text().await.unwrap();
    assert!(html.contains("Error fetching news. Please try again later."));
}

#[tokio::test]
async fn empty_search_redirects_home() {
    let upstream = MockServer::start();
    let base = common::spawn_app(AppState::new(common::client(&upstream))).await;

    let resp = reqwest::get(format!("{base}/search?q=%20")).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.url().path(), "/");
}

#[tokio::test]
async fn stats_health_and_fallback() {
    let upstream = MockServer::start();
    let base = common::spawn_app(AppState::new(common::client(&upstream))).await;

    let stats = reqwest::get(format!("{base}/stats"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(stats.contains("Cache Statistics"));
    assert!(stats.contains("disabled"));

    let health = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(health.text().await.unwrap(), "ok");

    let missing = reqwest::get(format!("{base}/no/such/page")).await.unwrap();
    assert_eq!(missing.status(), 404);
    assert!(missing.text().await.unwrap().contains("Not Found"));
}
