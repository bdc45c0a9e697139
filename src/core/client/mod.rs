//! Public client surface + builder.
//! Internals are split into `retry` (backoff + cache modes) and `constants` (UA + defaults).

mod constants;
pub mod retry;

pub use retry::{Backoff, CacheMode, RetryConfig};

pub(crate) use constants::PRICE_KEY_HEADER;
use constants::{DEFAULT_BASE_NEWS, DEFAULT_BASE_PRICE, USER_AGENT};

use crate::core::NewsError;
use reqwest::Client;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use url::Url;

#[derive(Debug)]
struct CacheEntry {
    body: String,
    expires_at: Instant,
}

#[derive(Debug)]
struct CacheStore {
    map: RwLock<HashMap<String, CacheEntry>>,
    default_ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Snapshot of the response cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Entries currently stored, including expired ones not yet purged.
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    /// `hits / (hits + misses)`, or 0 when nothing was looked up yet.
    pub hit_rate: f64,
}

/// HTTP client for the upstream news and price providers.
///
/// Cloning is cheap; clones share the connection pool and the response cache.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: Client,
    base_news: Url,
    base_price: Url,
    news_api_key: Option<String>,
    price_api_key: Option<String>,
    retry: RetryConfig,
    cache: Option<Arc<CacheStore>>,
}

impl NewsClient {
    /// Create a new builder.
    pub fn builder() -> NewsClientBuilder {
        NewsClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) fn base_price(&self) -> &Url {
        &self.base_price
    }
    pub(crate) fn news_api_key(&self) -> Option<&str> {
        self.news_api_key.as_deref()
    }
    pub(crate) fn price_api_key(&self) -> Option<&str> {
        self.price_api_key.as_deref()
    }

    /// Whether a price provider key was configured.
    pub fn price_enabled(&self) -> bool {
        self.price_api_key.is_some()
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// The configured default cache TTL, if caching is enabled.
    pub fn cache_ttl(&self) -> Option<Duration> {
        self.cache.as_ref().map(|c| c.default_ttl)
    }

    pub(crate) async fn cache_get(&self, url: &Url) -> Option<String> {
        let store = self.cache.as_ref()?;
        let guard = store.map.read().await;
        if let Some(entry) = guard.get(url.as_str())
            && Instant::now() <= entry.expires_at
        {
            store.hits.fetch_add(1, Ordering::Relaxed);
            return Some(entry.body.clone());
        }
        store.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    pub(crate) async fn cache_put(&self, url: &Url, body: &str, ttl_override: Option<Duration>) {
        let Some(store) = &self.cache else {
            return;
        };
        let ttl = ttl_override.unwrap_or(store.default_ttl);
        let entry = CacheEntry {
            body: body.to_string(),
            expires_at: Instant::now() + ttl,
        };
        let mut guard = store.map.write().await;
        guard.insert(url.as_str().to_string(), entry);
    }

    /// Drops expired entries and returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let Some(store) = &self.cache else {
            return 0;
        };
        let now = Instant::now();
        let mut guard = store.map.write().await;
        let before = guard.len();
        guard.retain(|_, e| e.expires_at >= now);
        before - guard.len()
    }

    /// Current cache counters. All zero when caching is disabled.
    pub async fn cache_stats(&self) -> CacheStats {
        let Some(store) = &self.cache else {
            return CacheStats::default();
        };
        let entries = store.map.read().await.len();
        let hits = store.hits.load(Ordering::Relaxed);
        let misses = store.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        #[allow(clippy::cast_precision_loss)]
        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };
        CacheStats {
            entries,
            hits,
            misses,
            hit_rate,
        }
    }

    /// Sends a request, retrying on transient failures per the effective policy.
    ///
    /// A response with a retryable status is returned as-is once retries are
    /// exhausted so the caller can map the status.
    pub(crate) async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
        retry_override: Option<&RetryConfig>,
    ) -> Result<reqwest::Response, NewsError> {
        let cfg = retry_override.unwrap_or(&self.retry);
        let mut attempt = 0u32;
        loop {
            let Some(this_req) = req.try_clone() else {
                // Streaming bodies cannot be cloned; send once.
                return Ok(req.send().await?);
            };
            match this_req.send().await {
                Ok(resp) => {
                    let code = resp.status().as_u16();
                    if attempt < cfg.max_retries && cfg.should_retry_status(code) {
                        tracing::debug!(status = code, attempt, url = %redact(resp.url()), "retrying upstream request");
                        tokio::time::sleep(cfg.backoff.delay(attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    return Ok(resp);
                }
                Err(e) => {
                    if attempt < cfg.max_retries && cfg.should_retry_error(&e) {
                        tracing::debug!(error = %e, attempt, "retrying after transport error");
                        tokio::time::sleep(cfg.backoff.delay(attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }
    }
}

/// Renders a URL for logs with any `token` query value masked.
pub(crate) fn redact(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == "token") {
        return url.to_string();
    }
    let mut out = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "token" {
                "[API_KEY]".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    out.query_pairs_mut().clear().extend_pairs(pairs);
    out.to_string()
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct NewsClientBuilder {
    user_agent: Option<String>,
    base_news: Option<Url>,
    base_price: Option<Url>,
    news_api_key: Option<String>,
    price_api_key: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    cache_ttl: Option<Duration>,
    retry: Option<RetryConfig>,
}

impl NewsClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the news provider base (e.g., `https://cryptonews-api.com/api/v1`).
    #[must_use]
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Override the price quote endpoint.
    #[must_use]
    pub fn base_price(mut self, url: Url) -> Self {
        self.base_price = Some(url);
        self
    }

    /// API token sent to the news provider.
    #[must_use]
    pub fn news_api_key(mut self, key: impl Into<String>) -> Self {
        self.news_api_key = Some(key.into());
        self
    }

    /// API key for the price provider. Price lookups fail with `Config` without it.
    #[must_use]
    pub fn price_api_key(mut self, key: impl Into<String>) -> Self {
        self.price_api_key = Some(key.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Enable in-memory caching with a default TTL.
    /// If not set, caching is disabled.
    #[must_use]
    pub fn cache_ttl(mut self, dur: Duration) -> Self {
        self.cache_ttl = Some(dur);
        self
    }

    /// Set the default retry policy for all requests made by this client.
    #[must_use]
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns `NewsError` if a default URL fails to parse or the HTTP client cannot be built.
    pub fn build(self) -> Result<NewsClient, NewsError> {
        let base_news = match self.base_news {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_NEWS)?,
        };
        let base_price = match self.base_price {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_PRICE)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(NewsClient {
            http,
            base_news,
            base_price,
            news_api_key: self.news_api_key.filter(|k| !k.is_empty()),
            price_api_key: self.price_api_key.filter(|k| !k.is_empty()),
            retry: self.retry.unwrap_or_default(),
            cache: self.cache_ttl.filter(|ttl| !ttl.is_zero()).map(|ttl| {
                Arc::new(CacheStore {
                    map: RwLock::new(HashMap::new()),
                    default_ttl: ttl,
                    hits: AtomicU64::new(0),
                    misses: AtomicU64::new(0),
                })
            }),
        })
    }
}
