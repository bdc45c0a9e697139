use axum::extract::FromRef;

use crate::{NewsClient, news::DEFAULT_COUNT, searches::SearchStats};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub client: NewsClient,
    pub searches: SearchStats,
    /// Articles returned when a request does not ask for a specific count.
    pub default_count: u32,
}

impl AppState {
    pub fn new(client: NewsClient) -> Self {
        Self {
            client,
            searches: SearchStats::new(),
            default_count: DEFAULT_COUNT,
        }
    }

    #[must_use]
    pub fn with_default_count(mut self, count: u32) -> Self {
        self.default_count = count;
        self
    }
}

impl FromRef<AppState> for SearchStats {
    fn from_ref(input: &AppState) -> Self {
        input.searches.clone()
    }
}
