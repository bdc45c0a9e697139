//! cryptonews: look up the latest news for a cryptocurrency.
//!
//! The crate has two layers:
//! - an upstream client ([`NewsClient`]) with builders for news ([`NewsBuilder`])
//!   and spot prices ([`price::PriceBuilder`]), response caching and retries;
//! - an axum web service ([`web`]) serving a search page, the JSON endpoint the
//!   page's script calls, and server-rendered fallbacks.
//!
//! ```no_run
//! # async fn demo() -> Result<(), cryptonews::NewsError> {
//! use cryptonews::{NewsBuilder, NewsClient, Symbol};
//!
//! let client = NewsClient::builder().news_api_key("token").build()?;
//! let articles = NewsBuilder::new(&client, Symbol::parse("btc")?).count(5).fetch().await?;
//! for a in articles {
//!     println!("{} ({})", a.title, a.source);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod news;
pub mod price;
pub mod render;
pub mod searches;
pub mod web;

pub use crate::core::client::{Backoff, CacheMode, RetryConfig};
pub use crate::core::{CacheStats, NewsClient, NewsClientBuilder, NewsError, Symbol};
pub use news::{NewsArticle, NewsBuilder};
pub use price::{Price, PriceBuilder};
pub use searches::{SearchCount, SearchStats};
