mod api;
mod model;
mod wire;

pub use model::NewsArticle;

use crate::{
    NewsClient, NewsError, Symbol,
    core::client::{CacheMode, RetryConfig},
};

/// Number of articles requested when the caller does not say.
pub const DEFAULT_COUNT: u32 = 3;
/// Upper bound accepted by the provider for a single request.
pub const MAX_COUNT: u32 = 50;

/// A builder for fetching news articles for a specific cryptocurrency.
#[derive(Debug, Clone)]
pub struct NewsBuilder {
    client: NewsClient,
    symbol: Symbol,
    count: u32,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` for a given symbol.
    pub fn new(client: &NewsClient, symbol: Symbol) -> Self {
        Self {
            client: client.clone(),
            symbol,
            count: DEFAULT_COUNT,
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// Sets the cache mode for this specific API call.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Sets the maximum number of news articles to return, clamped to `1..=50`.
    #[must_use]
    pub fn count(mut self, count: u32) -> Self {
        self.count = count.clamp(1, MAX_COUNT);
        self
    }

    /// Executes the request and fetches the news articles.
    ///
    /// # Errors
    ///
    /// Returns a `NewsError` if no news API key is configured, the request to the
    /// provider fails, or the response is not JSON.
    pub async fn fetch(self) -> Result<Vec<NewsArticle>, NewsError> {
        api::fetch_news(
            &self.client,
            &self.symbol,
            self.count,
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await
    }
}
