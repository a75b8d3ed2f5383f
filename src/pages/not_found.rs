use maud::{html, Markup};

use crate::pages::layout::{document, PageContext};
use crate::routing::router::{HOME_PATH, INSIGHTS_PATH, WORK_PATH};
use crate::seo::meta;

pub fn render(ctx: &PageContext<'_>, path: &str) -> Markup {
    let content = html! {
        section.not-found {
            span.code { "404" }
            h1 { "Page Not Found" }
            p { "We couldn't find " code { (path) } ". It may have moved or never existed." }
            a.button href=(HOME_PATH) { "Back to Home" }
            a href=(WORK_PATH) { "See Our Work" }
            a href=(INSIGHTS_PATH) { "Read Insights" }
        }
    };
    document(ctx, &meta::not_found(ctx.site), content)
}
