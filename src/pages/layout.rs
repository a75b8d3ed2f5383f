//! Document shell: head, navigation and footer.

use chrono::Datelike;
use maud::{html, Markup, DOCTYPE};

use crate::config::SiteIdentity;
use crate::routing::router::{CONTACT_PATH, HOME_PATH, NAV_LINKS};
use crate::seo::PageMeta;

/// What every page needs besides its own content.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub site: &'a SiteIdentity,
    /// Top-level section path used to mark the active navigation link.
    pub section: &'static str,
    pub year: i32,
}

impl<'a> PageContext<'a> {
    pub fn new(site: &'a SiteIdentity, section: &'static str) -> Self {
        Self {
            site,
            section,
            year: chrono::Utc::now().year(),
        }
    }
}

pub fn document(ctx: &PageContext<'_>, meta: &PageMeta, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                link rel="icon" href="/favicon.svg" type="image/svg+xml";
                (meta.render(ctx.site))
            }
            body {
                (navbar(ctx))
                main { (content) }
                (footer(ctx))
            }
        }
    }
}

fn navbar(ctx: &PageContext<'_>) -> Markup {
    html! {
        header.navbar {
            nav aria-label="Primary" {
                a.logo href=(HOME_PATH) { (ctx.site.name) }
                ul {
                    @for (path, label) in NAV_LINKS {
                        li {
                            @if *path == ctx.section {
                                a.active href=(path) aria-current="page" { (label) }
                            } @else {
                                a href=(path) { (label) }
                            }
                        }
                    }
                }
                a.cta href=(CONTACT_PATH) { "Get Started" }
            }
        }
    }
}

fn footer(ctx: &PageContext<'_>) -> Markup {
    let site = ctx.site;
    html! {
        footer.footer {
            section {
                a.logo href=(HOME_PATH) { (site.name) }
                p { "Transforming businesses through intelligent AI solutions and cutting-edge technology." }
            }
            nav aria-label="Footer" {
                h4 { "Company" }
                ul {
                    @for (path, label) in NAV_LINKS.iter().skip(1) {
                        li { a href=(path) { (label) } }
                    }
                    li { a href=(CONTACT_PATH) { "Contact" } }
                }
            }
            address {
                a href=(format!("mailto:{}", site.email)) { (site.email) }
                br;
                a href=(site.phone_href()) { (site.phone) }
                br;
                (site.street_address) ", " (site.locality) " " (site.region) " " (site.postal_code)
            }
            p.copyright { "© " (ctx.year) " " (site.name) ". All rights reserved." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_active_section() {
        let site = SiteIdentity::default();
        let ctx = PageContext::new(&site, "/work");
        let page = document(&ctx, &PageMeta::new("T", "D"), html! { p { "body" } }).into_string();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"aria-current="page">Work</a>"#));
        assert!(!page.contains(r#"aria-current="page">About</a>"#));
        assert!(page.contains(r#"<a href="/about">About</a>"#));
        assert!(page.contains("<main><p>body</p></main>"));
        assert!(page.contains("mailto:hello@unodigit.com"));
    }
}
