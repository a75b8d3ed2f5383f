use maud::{html, Markup};

use crate::content::Catalog;
use crate::pages::components::{call_to_action, stats};
use crate::pages::layout::{document, PageContext};
use crate::seo::meta;

pub fn render(ctx: &PageContext<'_>, catalog: &Catalog) -> Markup {
    let founded = catalog.about_stats.first().map(|stat| stat.value);
    let content = html! {
        section.hero {
            span.eyebrow { "About Us" }
            h1 { "Pioneering the Future of " span.accent { "AI Innovation" } }
            p.lead {
                "We are a team of AI specialists, engineers, and strategists dedicated to "
                "democratizing artificial intelligence for enterprises of every size."
            }
        }
        section.story {
            h2 { "Our Story" }
            p {
                (ctx.site.name) " was founded"
                @if let Some(year) = founded { " in " (year) }
                " in " (ctx.site.locality)
                " with a simple mission: make advanced AI practical, measurable, and accessible."
            }
            (stats(catalog.about_stats))
        }
        section.values {
            h2 { "Our Values" }
            @for value in catalog.values {
                div.card { h3 { (value.title) } p { (value.description) } }
            }
        }
        (call_to_action("Let's Work Together", "Tell us about your goals and we'll show you what AI can do."))
    };
    document(ctx, &meta::about(ctx.site), content)
}
