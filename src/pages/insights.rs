//! Insights listing, article detail and the newsletter signup.

use maud::{html, Markup};

use crate::content::catalog::RELATED_ARTICLES;
use crate::content::{Article, Catalog};
use crate::forms::{FormState, NewsletterForm};
use crate::pages::components::{article_card, body, call_to_action};
use crate::pages::layout::{document, PageContext};
use crate::routing::router::{article_path, INSIGHTS_PATH};
use crate::seo::meta;

pub fn render_listing(
    ctx: &PageContext<'_>,
    catalog: &Catalog,
    newsletter: &FormState<NewsletterForm>,
) -> Markup {
    let featured = catalog.featured_article();
    let rest = catalog.articles.iter().skip(usize::from(featured.is_some()));
    let content = html! {
        section.hero {
            span.eyebrow { "Insights" }
            h1 { "Ideas & " span.accent { "Perspectives" } }
            p.lead { "Thought leadership on AI, machine learning, and digital transformation." }
        }
        @if let Some(article) = featured {
            section.featured-article {
                span.badge { "Featured" }
                span.category { (article.category) }
                h2 { a href=(article_path(article.slug)) { (article.title) } }
                p { (article.excerpt) }
                p.meta { (article.date) " · " (article.read_time) }
                a href=(article_path(article.slug)) { "Read Article" }
            }
        }
        section.article-grid {
            @for article in rest {
                (article_card(article))
            }
        }
        (newsletter_section(newsletter))
    };
    document(ctx, &meta::insights(ctx.site), content)
}

pub fn render_article(ctx: &PageContext<'_>, catalog: &Catalog, article: &Article) -> Markup {
    let related = catalog.related_articles(article.slug, RELATED_ARTICLES);
    let content = html! {
        article.post {
            a.back href=(INSIGHTS_PATH) { "← Back to Insights" }
            header {
                span.category { (article.category) }
                h1 { (article.title) }
                p.meta {
                    time { (article.date) }
                    " · " (article.read_time)
                }
            }
            p.lead { (article.excerpt) }
            (body(article.body))
        }
        @if !related.is_empty() {
            section.related {
                h2 { "Related Insights" }
                @for other in related {
                    (article_card(other))
                }
            }
        }
        (call_to_action("Put These Ideas to Work", "Talk to us about applying AI in your organization."))
    };
    document(ctx, &meta::article(ctx.site, article), content)
}

fn newsletter_section(state: &FormState<NewsletterForm>) -> Markup {
    html! {
        section.newsletter #newsletter {
            h2 { "Stay Ahead of the Curve" }
            p { "Get the latest AI insights delivered to your inbox." }
            @match state {
                FormState::Submitted(subscription) => {
                    p.subscribed role="status" {
                        "Thanks for subscribing! Updates will be sent to " (subscription.email) "."
                    }
                }
                FormState::Idle { draft, errors } => {
                    form method="post" action=(INSIGHTS_PATH) novalidate {
                        label {
                            span.visually-hidden { "Email address" }
                            input type="email" name="email" required placeholder="Enter your email" value=(draft.email);
                        }
                        @if let Some(message) = errors.for_field("email") {
                            p.field-error role="alert" { (message) }
                        }
                        button type="submit" { "Subscribe" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteIdentity;
    use crate::content::CATALOG;

    fn listing(state: &FormState<NewsletterForm>) -> String {
        let site = SiteIdentity::default();
        render_listing(&PageContext::new(&site, INSIGHTS_PATH), &CATALOG, state).into_string()
    }

    #[test]
    fn listing_shows_every_article_once_linked() {
        let page = listing(&FormState::idle());
        for article in CATALOG.articles {
            assert!(page.contains(&article_path(article.slug)), "{}", article.slug);
        }
        assert!(page.contains(r#"<form method="post" action="/insights""#));
    }

    #[test]
    fn subscribed_state_replaces_form() {
        let state = FormState::idle().submit(NewsletterForm {
            email: "reader@example.com".into(),
        });
        let page = listing(&state);
        assert!(page.contains("Thanks for subscribing!"));
        assert!(page.contains("reader@example.com"));
        assert!(!page.contains(r#"name="email""#));
    }

    #[test]
    fn invalid_email_is_echoed_with_error() {
        let state = FormState::idle().submit(NewsletterForm {
            email: "nope".into(),
        });
        let page = listing(&state);
        assert!(page.contains(r#"value="nope""#));
        assert!(page.contains(r#"class="field-error""#));
    }

    #[test]
    fn article_lists_other_articles_as_related() {
        let site = SiteIdentity::default();
        let article = &CATALOG.articles[0];
        let page = render_article(&PageContext::new(&site, INSIGHTS_PATH), &CATALOG, article).into_string();
        assert!(page.contains("The Future of Enterprise AI: Trends to Watch in 2025"));
        assert!(page.contains("Related Insights"));
        for other in CATALOG.related_articles(article.slug, RELATED_ARTICLES) {
            assert!(page.contains(&article_path(other.slug)));
        }
        assert!(!page.contains(&format!(r#"href="{}""#, article_path(article.slug))));
    }
}
