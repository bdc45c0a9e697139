//! Server-side HTML. Everything goes through `maud`, so provider text is escaped.

mod components;
mod head;
mod page;
mod pages;

pub use components::{NewsList, TopSearchList};
pub use page::{Page, RenderPage};
pub use pages::{HomePage, NotFoundPage, SearchPage, StatsPage};

/// Shown by the results list when the provider returned nothing.
pub const NO_NEWS_MESSAGE: &str = "No news found for this cryptocurrency.";
/// Shown in place of results when the lookup failed.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching news. Please try again later.";
