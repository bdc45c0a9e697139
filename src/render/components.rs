use maud::{Markup, Render, html};

use crate::NewsArticle;
use crate::searches::SearchCount;

use super::NO_NEWS_MESSAGE;

pub(crate) struct NavBar;

impl Render for NavBar {
    fn render(&self) -> Markup {
        html! {
          header class="nav-container" {
            a class="nav-title" href="/" { "Crypto News" }
            nav class="nav-buttons" {
              a class="nav-button" href="/" { "Search" }
              a class="nav-button" href="/stats" { "Cache Stats" }
            }
          }
        }
    }
}

pub(crate) struct Footer;

impl Render for Footer {
    fn render(&self) -> Markup {
        html! {
          footer class="footer" {
            "News provided by third-party feeds. Not investment advice."
          }
        }
    }
}

/// The search form the browser script hooks into.
pub(crate) struct SearchForm<'a> {
    pub(crate) value: Option<&'a str>,
}

impl Render for SearchForm<'_> {
    fn render(&self) -> Markup {
        html! {
          form id="search-form" class="search-container" action="/search" method="get" {
            input id="crypto-input" type="text" name="q"
              placeholder="Enter cryptocurrency name or symbol..."
              value=[self.value] required;
            button type="submit" { "Search" }
          }
        }
    }
}

/// Results list, markup-identical to what `static/script.js` builds client-side.
pub struct NewsList<'a>(pub &'a [NewsArticle]);

impl Render for NewsList<'_> {
    fn render(&self) -> Markup {
        html! {
          @if self.0.is_empty() {
            p { (NO_NEWS_MESSAGE) }
          } @else {
            @for article in self.0 {
              div class="news-article" {
                h3 {
                  a href=(article.link) target="_blank" rel="noopener noreferrer" { (article.title) }
                }
                p { strong { "Source:" } " " (article.source) }
                p {
                  strong { "Date:" } " "
                  time datetime=(article.date.to_rfc3339()) {
                    (article.date.format("%Y-%m-%d %H:%M UTC").to_string())
                  }
                }
                p { (article.summary) }
              }
            }
          }
        }
    }
}

pub struct TopSearchList<'a>(pub &'a [SearchCount]);

impl Render for TopSearchList<'_> {
    fn render(&self) -> Markup {
        html! {
          @if self.0.is_empty() {
            p { "No searches yet" }
          } @else {
            @for item in self.0 {
              div class="search-item" {
                a href={ "/search?q=" (item.term.replace(' ', "+")) } { (item.term) }
                " - " (item.count) " searches"
              }
            }
          }
        }
    }
}
