use axum::response::{Html, IntoResponse};
use maud::{DOCTYPE, Markup, Render, html};

use super::components::{Footer, NavBar};
use super::head::HtmlHead;

/// A full HTML document: title, optional description and a body.
pub trait Page {
    fn get_name(&self) -> String;
    fn get_description(&self) -> Option<String> {
        None
    }
    /// Extra scripts loaded at the end of the body.
    fn scripts(&self) -> &'static [&'static str] {
        &[]
    }
    fn draw_body(&self) -> Markup;
}

/// Wraps a [`Page`] with the shared head, navigation and footer.
pub struct RenderPage<T: Page>(pub T);

impl<T: Page> Render for RenderPage<T> {
    fn render(&self) -> Markup {
        let page = &self.0;
        let name = page.get_name();
        let description = page.get_description();
        let head = HtmlHead {
            title: &name,
            description: description.as_deref(),
        };
        html! {
          (DOCTYPE)
          html lang="en" {
            (head)
            body {
              (NavBar)
              main class="container" {
                (page.draw_body())
              }
              (Footer)
              @for src in page.scripts() {
                script src=(src) {}
              }
            }
          }
        }
    }
}

impl<T: Page> IntoResponse for RenderPage<T> {
    fn into_response(self) -> axum::response::Response {
        Html(self.render().into_string()).into_response()
    }
}
