//! JSON endpoints used by the browser script.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::{Deserialize, Serialize};

use crate::{
    NewsArticle, NewsBuilder, Symbol,
    price::PriceBuilder,
    searches::{SearchCount, SearchStats, TOP_SEARCHES},
};

use super::{error::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub(crate) struct NewsQuery {
    crypto: Option<String>,
    count: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PriceQuery {
    crypto: Option<String>,
    convert: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PriceResponse {
    symbol: String,
    currency: String,
    price: Option<f64>,
}

/// `GET /api/news?crypto=BTC[&count=N]`
pub(crate) async fn news(
    State(state): State<AppState>,
    query: Result<Query<NewsQuery>, QueryRejection>,
) -> Result<Json<Vec<NewsArticle>>, ApiError> {
    let Query(query) = query?;
    let raw = query.crypto.ok_or(ApiError::MissingParam("crypto"))?;
    let symbol = Symbol::parse(&raw)?;
    let articles = NewsBuilder::new(&state.client, symbol.clone())
        .count(query.count.unwrap_or(state.default_count))
        .fetch()
        .await?;
    state.searches.record(&symbol).await;
    Ok(Json(articles))
}

/// `GET /api/price?crypto=BTC[&convert=EUR]`
pub(crate) async fn price(
    State(state): State<AppState>,
    query: Result<Query<PriceQuery>, QueryRejection>,
) -> Result<Json<PriceResponse>, ApiError> {
    let Query(query) = query?;
    if !state.client.price_enabled() {
        return Err(ApiError::PriceDisabled);
    }
    let raw = query.crypto.ok_or(ApiError::MissingParam("crypto"))?;
    let symbol = Symbol::parse(&raw)?;
    let currency = query
        .convert
        .map_or_else(|| "USD".to_string(), |c| c.to_uppercase());
    let price = PriceBuilder::new(&state.client, symbol.clone())
        .convert(currency.clone())
        .fetch()
        .await?;
    Ok(Json(PriceResponse {
        symbol: symbol.ticker(),
        currency,
        price: price.map(|p| p.amount),
    }))
}

/// `GET /api/top-searches`
pub(crate) async fn top_searches(State(searches): State<SearchStats>) -> Json<Vec<SearchCount>> {
    Json(searches.top(TOP_SEARCHES).await)
}
