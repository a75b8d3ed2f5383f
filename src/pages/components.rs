//! Reusable page fragments.

use maud::{html, Markup};

use crate::content::services::Stat;
use crate::content::{Article, Block, Project};
use crate::routing::router::{article_path, project_path, CONTACT_PATH};

pub fn body(blocks: &[Block]) -> Markup {
    html! {
        div.prose {
            @for block in blocks {
                @match block {
                    Block::Paragraph(text) => p { (text) },
                    Block::Heading(text) => h2 { (text) },
                    Block::Highlights(items) => ul {
                        @for (label, text) in items.iter() {
                            li { strong { (label) } " " (text) }
                        }
                    },
                }
            }
        }
    }
}

pub fn stats(stats: &[Stat]) -> Markup {
    html! {
        dl.stats {
            @for stat in stats {
                div.stat {
                    dt { (stat.label) }
                    dd data-count=(stat.value) { (stat.to_string()) }
                }
            }
        }
    }
}

pub fn project_card(project: &Project) -> Markup {
    html! {
        article.card.project-card {
            a href=(project_path(project.slug)) {
                span.category { (project.category) }
                h3 { (project.title) }
                p { (project.description) }
                p.result { (project.result) }
            }
        }
    }
}

pub fn article_card(article: &Article) -> Markup {
    html! {
        article.card.article-card {
            a href=(article_path(article.slug)) {
                span.category { (article.category) }
                h3 { (article.title) }
                p { (article.excerpt) }
                p.meta { (article.date) " · " (article.read_time) }
            }
        }
    }
}

pub fn call_to_action(heading: &str, text: &str) -> Markup {
    html! {
        section.cta {
            h2 { (heading) }
            p { (text) }
            a.button href=(CONTACT_PATH) { "Start a Project" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CATALOG;

    #[test]
    fn highlights_render_with_bold_lead_in() {
        let markup = body(&[Block::Highlights(&[("Label:", "text")])]).into_string();
        assert!(markup.contains("<li><strong>Label:</strong> text</li>"));
    }

    #[test]
    fn body_escapes_text() {
        let markup = body(&[Block::Paragraph("a < b & \"c\"")]).into_string();
        assert!(markup.contains("a &lt; b &amp;"));
    }

    #[test]
    fn project_card_links_to_detail() {
        let markup = project_card(CATALOG.featured_case).into_string();
        assert!(markup.contains(r#"href="/work/ai-powered-logistics-optimization""#));
        assert!(markup.contains("40% reduction in delivery costs"));
    }
}
