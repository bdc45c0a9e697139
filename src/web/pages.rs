//! Server-rendered HTML routes.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::{error, warn};

use crate::{
    NewsBuilder, Symbol,
    price::{Price, PriceBuilder},
    render::{FETCH_ERROR_MESSAGE, HomePage, NotFoundPage, RenderPage, SearchPage, StatsPage},
    searches::{SearchStats, TOP_SEARCHES},
};

use super::state::AppState;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchQuery {
    q: Option<String>,
}

pub(crate) async fn home(State(searches): State<SearchStats>) -> RenderPage<HomePage> {
    RenderPage(HomePage {
        top_searches: searches.top(TOP_SEARCHES).await,
    })
}

/// `GET /search?q=BTC`: the no-script path through the same lookup as `/api/news`.
pub(crate) async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Response {
    let Some(raw) = query.q.filter(|q| !q.trim().is_empty()) else {
        return Redirect::to("/").into_response();
    };

    let symbol = match Symbol::parse(&raw) {
        Ok(symbol) => symbol,
        Err(e) => {
            warn!("rejected search input: {e}");
            let page = SearchPage {
                query: raw.trim().to_string(),
                results: Err(e.to_string()),
                price: None,
            };
            return (StatusCode::BAD_REQUEST, RenderPage(page)).into_response();
        }
    };

    let news = NewsBuilder::new(&state.client, symbol.clone())
        .count(state.default_count)
        .fetch();
    let (news, price) = futures::join!(news, lookup_price(&state, &symbol));

    let results = match news {
        Ok(articles) => {
            state.searches.record(&symbol).await;
            Ok(articles)
        }
        Err(e) => {
            error!("news lookup for {symbol} failed: {e}");
            Err(FETCH_ERROR_MESSAGE.to_string())
        }
    };

    RenderPage(SearchPage {
        query: symbol.to_string(),
        results,
        price,
    })
    .into_response()
}

/// Price is decoration on the results page; failures only get logged.
async fn lookup_price(state: &AppState, symbol: &Symbol) -> Option<Price> {
    if !state.client.price_enabled() {
        return None;
    }
    match PriceBuilder::new(&state.client, symbol.clone()).fetch().await {
        Ok(price) => price,
        Err(e) => {
            warn!("price lookup for {symbol} failed: {e}");
            None
        }
    }
}

pub(crate) async fn stats(State(state): State<AppState>) -> RenderPage<StatsPage> {
    RenderPage(StatsPage {
        cache: state.client.cache_stats().await,
        cache_ttl: state.client.cache_ttl(),
        total_searches: state.searches.total().await,
    })
}

pub(crate) async fn fallback() -> (StatusCode, RenderPage<NotFoundPage>) {
    (StatusCode::NOT_FOUND, RenderPage(NotFoundPage))
}
