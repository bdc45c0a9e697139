//! HTTP surface: the search page, its JSON API and a few status pages.

mod api;
mod error;
mod pages;
mod state;
mod static_content;

pub use error::{ApiError, JsonError};
pub use state::AppState;

use std::future::Future;
use std::time::Duration;

use axum::{Router, routing::get};
use tokio::net::TcpListener;

use crate::NewsClient;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/search", get(pages::search))
        .route("/stats", get(pages::stats))
        .route("/api/news", get(api::news))
        .route("/api/price", get(api::price))
        .route("/api/top-searches", get(api::top_searches))
        .route("/health", get(health))
        .route("/static/{*path}", get(static_content::static_path))
        .fallback(pages::fallback)
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// Serves `state` on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns the I/O error that stopped the server.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("listening on http://{addr}");
    }
    let janitor = spawn_cache_janitor(state.client.clone());
    let result = axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await;
    if let Some(handle) = janitor {
        handle.abort();
    }
    result
}

/// Purges expired cache entries once per TTL. `None` when caching is off.
pub fn spawn_cache_janitor(client: NewsClient) -> Option<tokio::task::JoinHandle<()>> {
    let ttl = client.cache_ttl()?;
    let period = ttl.max(Duration::from_secs(1));
    Some(tokio::spawn(async move {
        let mut tick = tokio::time::interval(period);
        // first tick completes immediately
        tick.tick().await;
        loop {
            tick.tick().await;
            let removed = client.purge_expired().await;
            if removed > 0 {
                tracing::debug!(removed, "purged expired cache entries");
            }
        }
    }))
}
