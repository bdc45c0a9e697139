use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single news article about a cryptocurrency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    /// The headline of the article.
    pub title: String,
    /// A direct link to the article.
    pub link: String,
    /// The publisher (e.g., "CoinDesk").
    pub source: String,
    /// When the article was published, in UTC.
    pub date: DateTime<Utc>,
    /// Body excerpt, at most 150 characters plus an ellipsis.
    pub summary: String,
}
