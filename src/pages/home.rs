use maud::{html, Markup};

use crate::content::Catalog;
use crate::pages::components::{call_to_action, project_card, stats};
use crate::pages::layout::{document, PageContext};
use crate::routing::router::{CONTACT_PATH, SERVICES_PATH, WORK_PATH};
use crate::seo::meta;

const WHY_US: &[(&str, &str)] = &[
    ("Lightning Fast", "Rapid deployment with agile methodologies"),
    ("Enterprise Security", "Bank-grade security for peace of mind"),
    ("Scalable Growth", "Solutions that grow with your business"),
];

pub fn render(ctx: &PageContext<'_>, catalog: &Catalog) -> Markup {
    let content = html! {
        section.hero {
            h1 { "Transform Your Business with " span.accent { "Intelligent AI" } }
            p.lead {
                (ctx.site.name) " partners with forward-thinking enterprises in Sydney and across Australia "
                "to build intelligent systems that drive growth, efficiency, and competitive advantage."
            }
            a.button href=(CONTACT_PATH) { "Start Your Project" }
            a.button.secondary href=(WORK_PATH) { "View Our Work" }
        }
        section.why-us {
            @for (title, text) in WHY_US {
                div.card { h3 { (title) } p { (text) } }
            }
        }
        section.services {
            h2 { "What We Do" }
            @for highlight in catalog.highlights {
                div.card { h3 { (highlight.title) } p { (highlight.description) } }
            }
            a href=(SERVICES_PATH) { "Explore All Services" }
        }
        section.numbers { (stats(catalog.home_stats)) }
        section.featured-work {
            h2 { "Featured Work" }
            (project_card(catalog.featured_case))
        }
        section.testimonials {
            h2 { "What Our Clients Say" }
            @for testimonial in catalog.testimonials {
                figure.card {
                    blockquote { p { (testimonial.quote) } }
                    figcaption {
                        span.author { (testimonial.author) }
                        span.role { (testimonial.role) }
                    }
                }
            }
        }
        (call_to_action(
            "Ready to Transform Your Business?",
            "Let's discuss how AI can drive growth and efficiency for your organization.",
        ))
    };
    document(ctx, &meta::home(ctx.site), content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteIdentity;
    use crate::content::CATALOG;
    use crate::routing::router::HOME_PATH;

    #[test]
    fn home_shows_stats_and_testimonials() {
        let site = SiteIdentity::default();
        let page = render(&PageContext::new(&site, HOME_PATH), &CATALOG).into_string();
        assert!(page.contains("What Our Clients Say"));
        for testimonial in CATALOG.testimonials {
            assert!(page.contains(testimonial.author));
            assert!(page.contains(testimonial.role));
        }
        assert!(page.contains("$50M+"));
    }
}
