use chrono::{DateTime, NaiveDateTime, Utc};
use url::Url;

use crate::{
    core::{
        NewsClient, NewsError, Symbol,
        client::{CacheMode, RetryConfig, redact},
        net,
    },
    news::{
        model::NewsArticle,
        wire::{self, AltItem, DataItem},
    },
};

pub(crate) const SUMMARY_LIMIT: usize = 150;

#[tracing::instrument(skip(client, symbol, retry_override), err, fields(symbol = %symbol))]
pub(super) async fn fetch_news(
    client: &NewsClient,
    symbol: &Symbol,
    count: u32,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<NewsArticle>, NewsError> {
    let key = client
        .news_api_key()
        .ok_or_else(|| NewsError::Config("news API key is not set".into()))?;

    let ticker = symbol.ticker();
    let mut url = client.base_news().clone();
    url.query_pairs_mut()
        .append_pair("tickers", &ticker)
        .append_pair("items", &count.to_string())
        .append_pair("token", key);

    if cache_mode == CacheMode::Use
        && let Some(body) = client.cache_get(&url).await
    {
        tracing::debug!("news served from cache");
        return decode_news(&body);
    }

    tracing::info!(url = %redact(&url), "requesting news");
    let resp = client
        .send_with_retry(client.http().get(url.clone()), retry_override)
        .await?;

    if !resp.status().is_success() {
        return Err(NewsError::from_status(
            resp.status().as_u16(),
            redact(&url),
        ));
    }

    let body = net::get_text(resp, "news", &ticker, "json").await?;
    tracing::debug!(preview = net::preview(&body, 200), "news response");

    let articles = decode_news(&body)?;
    if cache_mode != CacheMode::Bypass {
        client.cache_put(&url, &body, None).await;
    }
    tracing::info!(count = articles.len(), "found news items");
    Ok(articles)
}

pub(crate) fn decode_news(body: &str) -> Result<Vec<NewsArticle>, NewsError> {
    let json: serde_json::Value = serde_json::from_str(body)?;
    if !json.is_object() {
        tracing::debug!("news response is not a JSON object");
        return Ok(Vec::new());
    }
    let envelope: wire::NewsEnvelope = serde_json::from_value(json)?;

    if let Some(message) = &envelope.message {
        tracing::info!(message = %message, "provider returned message");
    }

    if let Some(items) = envelope.data {
        return Ok(items.into_iter().filter_map(from_data_item).collect());
    }

    if let Some(items) = envelope.news {
        tracing::debug!(
            count = items.len(),
            "no `data` array, using alternative `news` array"
        );
        return Ok(items.into_iter().filter_map(from_alt_item).collect());
    }

    tracing::debug!("no news array found in response");
    Ok(Vec::new())
}

fn from_data_item(item: DataItem) -> Option<NewsArticle> {
    build_article(
        item.title?,
        item.source_name?,
        &item.date?,
        &item.text?,
        item.news_url?,
    )
}

fn from_alt_item(item: AltItem) -> Option<NewsArticle> {
    build_article(
        item.title?,
        item.source.or(item.source_name)?,
        &item.published_at.or(item.date)?,
        &item.description.or(item.text)?,
        item.url.or(item.news_url)?,
    )
}

fn build_article(
    title: String,
    source: String,
    date: &str,
    text: &str,
    link: String,
) -> Option<NewsArticle> {
    let Some(date) = parse_date(date) else {
        tracing::debug!(date, title = %title, "skipping article with unparseable date");
        return None;
    };
    if !is_web_link(&link) {
        tracing::debug!(link = %link, title = %title, "skipping article with non-web link");
        return None;
    }
    Some(NewsArticle {
        title,
        link,
        source,
        date,
        summary: truncate_summary(text),
    })
}

/// Only absolute `http`/`https` URLs may become an `href`.
fn is_web_link(link: &str) -> bool {
    Url::parse(link.trim()).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}

/// Providers send RFC 2822 (`Wed, 18 Oct 2023 10:30:00 -0400`), RFC 3339, or a bare UTC timestamp.
pub(crate) fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|d| d.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|n| n.and_utc())
        })
}

pub(crate) fn truncate_summary(text: &str) -> String {
    match text.char_indices().nth(SUMMARY_LIMIT) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
