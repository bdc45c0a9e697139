//! Runtime configuration: command-line flags with environment fallbacks.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use url::Url;

use crate::{NewsClient, NewsError, news};

#[derive(Debug, Clone, Parser)]
#[command(name = "cryptonews", version, about = "Crypto news search service")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "CRYPTONEWS_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// News provider endpoint.
    #[arg(long, env = "CRYPTO_NEWS_API_URL", default_value = "https://cryptonews-api.com/api/v1")]
    pub news_url: Url,

    /// News provider API token.
    #[arg(long, env = "CRYPTO_NEWS_API_KEY", hide_env_values = true)]
    pub news_api_key: String,

    /// Price quote endpoint.
    #[arg(
        long,
        env = "COINMARKETCAP_URL",
        default_value = "https://pro-api.coinmarketcap.com/v1/cryptocurrency/quotes/latest"
    )]
    pub price_url: Url,

    /// Price provider API key. Price lookups are disabled without it.
    #[arg(long, env = "COINMARKETCAP_API_KEY", hide_env_values = true)]
    pub price_api_key: Option<String>,

    /// Articles returned per lookup unless the request asks otherwise.
    #[arg(long, env = "CRYPTONEWS_ITEMS", default_value_t = news::DEFAULT_COUNT,
          value_parser = clap::value_parser!(u32).range(1..=i64::from(news::MAX_COUNT)))]
    pub items: u32,

    /// Response cache lifetime in seconds; 0 disables caching.
    #[arg(long, env = "CRYPTONEWS_CACHE_TTL_SECS", default_value_t = 3600)]
    pub cache_ttl_secs: u64,

    /// Upstream request timeout in seconds.
    #[arg(long, env = "CRYPTONEWS_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Log filter, e.g. `info` or `cryptonews=debug`. Falls back to `RUST_LOG`.
    #[arg(long, env = "CRYPTONEWS_LOG")]
    pub log: Option<String>,
}

impl Config {
    /// Loads `.env` (if present) and parses flags and environment.
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Self::parse()
    }

    /// Builds the upstream client described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns `NewsError` if the HTTP client cannot be constructed.
    pub fn client(&self) -> Result<NewsClient, NewsError> {
        let mut builder = NewsClient::builder()
            .base_news(self.news_url.clone())
            .base_price(self.price_url.clone())
            .news_api_key(self.news_api_key.clone())
            .timeout(Duration::from_secs(self.timeout_secs))
            .connect_timeout(Duration::from_secs(self.timeout_secs.min(5)));
        if let Some(key) = &self.price_api_key {
            builder = builder.price_api_key(key.clone());
        }
        if self.cache_ttl_secs > 0 {
            builder = builder.cache_ttl(Duration::from_secs(self.cache_ttl_secs));
        }
        builder.build()
    }
}
