//! Centralized constants for default endpoints and UA.

pub(crate) const USER_AGENT: &str = concat!("cryptonews/", env!("CARGO_PKG_VERSION"));

/// Crypto news provider base (query parameters are appended).
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://cryptonews-api.com/api/v1";

/// CoinMarketCap latest-quotes endpoint.
pub(crate) const DEFAULT_BASE_PRICE: &str =
    "https://pro-api.coinmarketcap.com/v1/cryptocurrency/quotes/latest";

/// Header carrying the price provider's API key.
pub(crate) const PRICE_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";
