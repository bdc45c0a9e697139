use std::time::Duration;

use maud::{Markup, html};

use crate::core::CacheStats;
use crate::news::NewsArticle;
use crate::price::Price;
use crate::searches::SearchCount;

use super::components::{NewsList, SearchForm, TopSearchList};
use super::page::Page;

/// Landing page: the search form, an empty results container and the top searches.
pub struct HomePage {
    pub top_searches: Vec<SearchCount>,
}

impl Page for HomePage {
    fn get_name(&self) -> String {
        "Crypto News Search".to_string()
    }

    fn get_description(&self) -> Option<String> {
        Some("Search the latest news for any cryptocurrency.".to_string())
    }

    fn scripts(&self) -> &'static [&'static str] {
        &["/static/script.js"]
    }

    fn draw_body(&self) -> Markup {
        html! {
          h1 { "Crypto News Search" }
          (SearchForm { value: None })
          div id="results" class="results" {}
          section class="top-searches" {
            h2 { "Top Searches" }
            (TopSearchList(&self.top_searches))
          }
        }
    }
}

/// Server-rendered results for `/search?q=`; works with scripting disabled.
pub struct SearchPage {
    pub query: String,
    /// Articles, or the message to show instead of them.
    pub results: Result<Vec<NewsArticle>, String>,
    pub price: Option<Price>,
}

impl Page for SearchPage {
    fn get_name(&self) -> String {
        format!("News for {}", self.query)
    }

    fn draw_body(&self) -> Markup {
        html! {
          h1 { "News for " (self.query) }
          (SearchForm { value: Some(&self.query) })
          @if let Some(price) = &self.price {
            p class="price" { strong { "Price:" } " " (price.to_string()) }
          }
          div id="results" class="results" {
            @match &self.results {
              Ok(articles) => { (NewsList(articles)) }
              Err(message) => { p class="error-message" { (message) } }
            }
          }
          a href="/" class="read-more" { "Back to homepage" }
        }
    }
}

/// Cache and search counters.
pub struct StatsPage {
    pub cache: CacheStats,
    pub cache_ttl: Option<Duration>,
    pub total_searches: u64,
}

impl Page for StatsPage {
    fn get_name(&self) -> String {
        "Cache Statistics".to_string()
    }

    fn draw_body(&self) -> Markup {
        html! {
          h1 { "Cache Statistics" }
          div class="stats-container" {
            @match self.cache_ttl {
              Some(ttl) => { div class="stat-item" { strong { "Cache TTL:" } " " (ttl.as_secs()) "s" } }
              None => { div class="stat-item" { strong { "Cache:" } " disabled" } }
            }
            div class="stat-item" { strong { "Total Keys:" } " " (self.cache.entries) }
            div class="stat-item" { strong { "Hits:" } " " (self.cache.hits) }
            div class="stat-item" { strong { "Misses:" } " " (self.cache.misses) }
            div class="stat-item" {
              strong { "Hit Rate:" } " " (format!("{:.2}%", self.cache.hit_rate * 100.0))
            }
            div class="stat-item" { strong { "Total Searches:" } " " (self.total_searches) }
          }
          a href="/" class="read-more" { "Back to homepage" }
        }
    }
}

pub struct NotFoundPage;

impl Page for NotFoundPage {
    fn get_name(&self) -> String {
        "Not Found".to_string()
    }

    fn draw_body(&self) -> Markup {
        html! {
          h1 { "Not Found" }
          p { "There is nothing at this address." }
          a href="/" class="read-more" { "Back to homepage" }
        }
    }
}
