use maud::{html, Markup};

use crate::content::Catalog;
use crate::pages::components::call_to_action;
use crate::pages::layout::{document, PageContext};
use crate::seo::meta;

pub fn render(ctx: &PageContext<'_>, catalog: &Catalog) -> Markup {
    let content = html! {
        section.hero {
            span.eyebrow { "Our Services" }
            h1 { "End-to-End " span.accent { "AI Solutions" } }
            p.lead { "From strategy to deployment, we deliver AI that creates measurable business value." }
        }
        section.service-grid {
            @for service in catalog.services {
                div.card {
                    h3 { (service.title) }
                    p { (service.description) }
                    ul {
                        @for feature in service.features {
                            li { (feature) }
                        }
                    }
                }
            }
        }
        section.process {
            h2 { "Our Process" }
            ol {
                @for step in catalog.process {
                    li {
                        span.step { (step.step) }
                        h3 { (step.title) }
                        p { (step.description) }
                    }
                }
            }
        }
        (call_to_action("Have a Project in Mind?", "Let's talk about the outcomes you need."))
    };
    document(ctx, &meta::services(ctx.site), content)
}
