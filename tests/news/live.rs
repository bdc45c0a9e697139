use cryptonews::{NewsBuilder, NewsClient, Symbol};

#[tokio::test]
#[ignore]
async fn live_news_smoke() {
    if !crate::common::live_enabled() {
        return;
    }

    let key = std::env::var("CRYPTO_NEWS_API_KEY").unwrap();
    let client = NewsClient::builder().news_api_key(key).build().unwrap();

    let news = NewsBuilder::new(&client, Symbol::parse("BTC").unwrap())
        .fetch()
        .await
        .unwrap();

    assert!(!news.is_empty(), "expected at least one BTC article");
    let article = &news[0];
    assert!(!article.title.is_empty());
    assert!(article.link.starts_with("http"));
    assert!(article.summary.chars().count() <= 153);
}
