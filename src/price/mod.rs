//! Spot price lookup against a CoinMarketCap-style quotes endpoint.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::{
    NewsClient, NewsError, Symbol,
    core::{
        client::{CacheMode, PRICE_KEY_HEADER, RetryConfig},
        net,
    },
};

/// A quoted price in a fiat currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Price {
    /// The quoted amount.
    pub amount: f64,
    /// ISO currency code, upper-case.
    pub currency: String,
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.currency == "USD" {
            write!(f, "${:.2}", self.amount)
        } else {
            write!(f, "{:.2} {}", self.amount, self.currency)
        }
    }
}

/// A builder for fetching the latest price of a cryptocurrency.
#[derive(Debug, Clone)]
pub struct PriceBuilder {
    client: NewsClient,
    symbol: Symbol,
    convert: String,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl PriceBuilder {
    pub fn new(client: &NewsClient, symbol: Symbol) -> Self {
        Self {
            client: client.clone(),
            symbol,
            convert: "USD".to_string(),
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// Currency to quote in. Default `USD`.
    #[must_use]
    pub fn convert(mut self, currency: impl Into<String>) -> Self {
        self.convert = currency.into().to_uppercase();
        self
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

    /// Fetches the price. `Ok(None)` means the provider has no quote for the symbol.
    ///
    /// # Errors
    ///
    /// Returns `NewsError::Config` when no price API key is configured, or another
    /// `NewsError` if the request fails or the body is not JSON.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn fetch(self) -> Result<Option<Price>, NewsError> {
        let key = self
            .client
            .price_api_key()
            .ok_or_else(|| NewsError::Config("price API key is not set".into()))?;

        let ticker = self.symbol.ticker();
        let mut url = self.client.base_price().clone();
        url.query_pairs_mut()
            .append_pair("symbol", &ticker)
            .append_pair("convert", &self.convert);

        if self.cache_mode == CacheMode::Use
            && let Some(body) = self.client.cache_get(&url).await
        {
            return decode_price(&body, &ticker, &self.convert);
        }

        let req = self
            .client
            .http()
            .get(url.clone())
            .header(PRICE_KEY_HEADER, key)
            .header("accept", "application/json");
        let resp = self
            .client
            .send_with_retry(req, self.retry_override.as_ref())
            .await?;

        if !resp.status().is_success() {
            return Err(NewsError::from_status(resp.status().as_u16(), url.as_str()));
        }

        let body = net::get_text(resp, "price", &ticker, "json").await?;
        let price = decode_price(&body, &ticker, &self.convert)?;
        if self.cache_mode != CacheMode::Bypass {
            self.client.cache_put(&url, &body, None).await;
        }
        Ok(price)
    }
}

fn decode_price(body: &str, ticker: &str, currency: &str) -> Result<Option<Price>, NewsError> {
    let json: Value = serde_json::from_str(body)?;
    let amount = json["data"][ticker]["quote"][currency]["price"].as_f64();
    if amount.is_none() {
        tracing::debug!(ticker, currency, "price data unavailable");
    }
    Ok(amount.map(|amount| Price {
        amount,
        currency: currency.to_string(),
    }))
}
