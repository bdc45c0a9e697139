//! Per-term search counters backing the "Top Searches" list.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::Symbol;

/// How many terms the home page lists.
pub const TOP_SEARCHES: usize = 5;

/// A search term and how many times it was looked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchCount {
    pub term: String,
    pub count: u64,
}

/// Shared, in-process search statistics. Clones share the same counters.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    counts: Arc<RwLock<HashMap<String, u64>>>,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one lookup of `symbol`, keyed case-insensitively.
    pub async fn record(&self, symbol: &Symbol) {
        let mut guard = self.counts.write().await;
        *guard.entry(symbol.key()).or_insert(0) += 1;
    }

    /// The `n` most searched terms, most frequent first; ties ordered by term.
    pub async fn top(&self, n: usize) -> Vec<SearchCount> {
        let guard = self.counts.read().await;
        let mut all: Vec<SearchCount> = guard
            .iter()
            .map(|(term, count)| SearchCount {
                term: term.clone(),
                count: *count,
            })
            .collect();
        drop(guard);
        all.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
        all.truncate(n);
        all
    }

    /// Total lookups recorded across all terms.
    pub async fn total(&self) -> u64 {
        self.counts.read().await.values().sum()
    }
}
