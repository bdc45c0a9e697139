use maud::{Render, html};

pub(crate) struct HtmlHead<'a> {
    pub(crate) title: &'a str,
    pub(crate) description: Option<&'a str>,
}

impl Render for HtmlHead<'_> {
    fn render(&self) -> maud::Markup {
        html! {
          head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (self.title) }
            @if let Some(description) = self.description {
                meta name="description" content=(description);
            }
            link rel="stylesheet" href="/static/style.css";
          }
        }
    }
}
