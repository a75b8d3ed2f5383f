//! Work listing and case study detail.

use maud::{html, Markup};

use crate::content::catalog::RELATED_PROJECTS;
use crate::content::{Catalog, Project};
use crate::pages::components::{body, call_to_action, project_card, stats};
use crate::pages::layout::{document, PageContext};
use crate::routing::router::{project_path, WORK_PATH};
use crate::seo::meta;

pub fn render_listing(ctx: &PageContext<'_>, catalog: &Catalog) -> Markup {
    let featured = catalog.featured_case;
    let content = html! {
        section.hero {
            span.eyebrow { "Our Work" }
            h1 { "Results That " span.accent { "Speak for Themselves" } }
            p.lead { "Explore how we've helped businesses transform with AI and cutting-edge technology." }
        }
        section.featured-case {
            span.badge { "Featured Case Study" }
            span.category { (featured.category) }
            h2 { (featured.title) }
            @if let Some(client) = featured.client {
                p.client { (client) }
            }
            p { (featured.description) }
            p.result { (featured.result) }
            (tags(featured))
            a href=(project_path(featured.slug)) { "Read Case Study" }
        }
        section.numbers { (stats(catalog.work_stats)) }
        section.project-grid {
            h2 { "More Projects" }
            @for project in catalog.projects {
                (project_card(project))
            }
        }
        (call_to_action("Want Results Like These?", "Let's discuss what we can achieve together."))
    };
    document(ctx, &meta::work(ctx.site), content)
}

pub fn render_project(ctx: &PageContext<'_>, catalog: &Catalog, project: &Project) -> Markup {
    let related = catalog.related_projects(project.slug, RELATED_PROJECTS);
    let content = html! {
        article.case-study {
            a.back href=(WORK_PATH) { "← Back to Work" }
            header {
                span.category { (project.category) }
                h1 { (project.title) }
                @if let Some(client) = project.client {
                    p.client { "Client: " (client) }
                }
                p.result { (project.result) }
                (tags(project))
            }
            p.lead { (project.description) }
            (body(project.body))
        }
        @if !related.is_empty() {
            section.related {
                h2 { "More Projects" }
                @for other in related {
                    a.related-project href=(project_path(other.slug)) {
                        span.category { (other.category) }
                        h3 { (other.title) }
                        span.result { (other.result) }
                    }
                }
            }
        }
        (call_to_action("Have a Similar Challenge?", "Let's talk about how we can help."))
    };
    document(ctx, &meta::project(ctx.site, project), content)
}

fn tags(project: &Project) -> Markup {
    html! {
        @if !project.tags.is_empty() {
            ul.tags {
                @for tag in project.tags {
                    li { (tag) }
                }
            }
        }
    }
}
