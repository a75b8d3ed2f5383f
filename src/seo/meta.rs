//! Document head metadata.

use maud::{html, Markup, PreEscaped};
use serde_json::Value;

use crate::config::SiteIdentity;
use crate::content::{Article, Project};
use crate::routing::router::{
    article_path, project_path, ABOUT_PATH, CONTACT_PATH, INSIGHTS_PATH, SERVICES_PATH, WORK_PATH,
};
use crate::seo::schema;

/// Open Graph object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OgType {
    Website,
    Article,
}

impl OgType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OgType::Website => "website",
            OgType::Article => "article",
        }
    }
}

/// Per-page head metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// Site-relative canonical path; `None` means the site root.
    pub canonical: Option<String>,
    pub og_type: OgType,
    /// Overrides the site default image.
    pub image: Option<String>,
    pub schema: Option<Value>,
    pub published_time: Option<&'static str>,
    pub noindex: bool,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            canonical: None,
            og_type: OgType::Website,
            image: None,
            schema: None,
            published_time: None,
            noindex: false,
        }
    }

    pub fn canonical(mut self, path: impl Into<String>) -> Self {
        self.canonical = Some(path.into());
        self
    }

    pub fn og_type(mut self, og_type: OgType) -> Self {
        self.og_type = og_type;
        self
    }

    pub fn schema(mut self, schema: Value) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn published(mut self, time: &'static str) -> Self {
        self.published_time = Some(time);
        self
    }

    pub fn noindex(mut self) -> Self {
        self.noindex = true;
        self
    }

    /// Absolute canonical URL.
    pub fn full_url(&self, site: &SiteIdentity) -> String {
        match &self.canonical {
            Some(path) => format!("{}{}", site.url, path),
            None => site.url.clone(),
        }
    }

    /// Absolute sharing image URL.
    pub fn full_image(&self, site: &SiteIdentity) -> String {
        let image = self.image.as_deref().unwrap_or(&site.default_image);
        if image.starts_with("http") {
            image.to_string()
        } else {
            format!("{}{}", site.url, image)
        }
    }

    /// Render the head tags.
    pub fn render(&self, site: &SiteIdentity) -> Markup {
        let url = self.full_url(site);
        let image = self.full_image(site);
        html! {
            title { (self.title) }
            meta name="description" content=(self.description);
            link rel="canonical" href=(url);
            @if self.noindex {
                meta name="robots" content="noindex, follow";
            } @else {
                meta name="robots" content="index, follow";
            }

            meta property="og:type" content=(self.og_type.as_str());
            meta property="og:title" content=(self.title);
            meta property="og:description" content=(self.description);
            meta property="og:image" content=(image);
            meta property="og:url" content=(url);
            meta property="og:site_name" content=(site.name);
            meta property="og:locale" content=(site.locale);
            @if let Some(time) = self.published_time {
                meta property="article:published_time" content=(time);
            }

            meta name="twitter:card" content="summary_large_image";
            meta name="twitter:title" content=(self.title);
            meta name="twitter:description" content=(self.description);
            meta name="twitter:image" content=(image);

            @if let Some(schema) = &self.schema {
                script type="application/ld+json" { (PreEscaped(json_ld(schema))) }
            }
        }
    }
}

/// Serialize structured data for embedding in a script element.
///
/// `<`, `>` and `&` are emitted as unicode escapes so the payload can never
/// close the element early.
pub fn json_ld(value: &Value) -> String {
    value
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

pub fn home(site: &SiteIdentity) -> PageMeta {
    PageMeta::new(
        format!("{} | AI & Digital Transformation Leader Sydney", site.name),
        "We partner with forward-thinking enterprises in Sydney and Australia to build intelligent systems, \
         custom AI solutions, and digital ecosystems that drive growth.",
    )
    .schema(schema::organization(site))
}

pub fn about(site: &SiteIdentity) -> PageMeta {
    PageMeta::new(
        format!("About {} | AI Consultancy Sydney", site.name),
        format!(
            "Learn about {}, a Sydney-based AI consultancy. Meet our team of experts dedicated to \
             democratizing AI technology for enterprises.",
            site.name
        ),
    )
    .canonical(ABOUT_PATH)
    .schema(schema::about_page(site))
}

pub fn services(site: &SiteIdentity) -> PageMeta {
    PageMeta::new(
        format!("AI Services & Web Development | {} Sydney", site.name),
        "Comprehensive AI strategies, Machine Learning solutions, and Web Development services for \
         Australian businesses. Transform your operations today.",
    )
    .canonical(SERVICES_PATH)
    .schema(schema::service(site))
}

pub fn work(site: &SiteIdentity) -> PageMeta {
    PageMeta::new(
        format!("Our Work & Case Studies | {}", site.name),
        "Explore our portfolio of successful AI implementation, data science projects, and digital \
         transformation case studies across various industries.",
    )
    .canonical(WORK_PATH)
    .schema(schema::collection_page(site))
}

pub fn project(site: &SiteIdentity, project: &Project) -> PageMeta {
    PageMeta::new(
        format!("{} | {} Case Study", project.title, site.name),
        project.description,
    )
    .canonical(project_path(project.slug))
    .og_type(OgType::Article)
    .schema(schema::case_study(site, project))
}

pub fn insights(site: &SiteIdentity) -> PageMeta {
    PageMeta::new(
        format!("AI Insights & Tech Blog | {}", site.name),
        "Stay updated with the latest trends in Artificial Intelligence, Machine Learning, and \
         Enterprise Digital Transformation.",
    )
    .canonical(INSIGHTS_PATH)
    .schema(schema::blog(site))
}

pub fn article(site: &SiteIdentity, article: &Article) -> PageMeta {
    PageMeta::new(
        format!("{} | {} Insights", article.title, site.name),
        article.excerpt,
    )
    .canonical(article_path(article.slug))
    .og_type(OgType::Article)
    .published(article.date)
    .schema(schema::blog_posting(site, article))
}

pub fn contact(site: &SiteIdentity) -> PageMeta {
    PageMeta::new(
        format!("Contact {} | AI Consultancy Sydney", site.name),
        "Ready to transform your business with AI? Get in touch and let's discuss how we can help you \
         achieve your goals.",
    )
    .canonical(CONTACT_PATH)
    .schema(schema::contact_page(site))
}

pub fn not_found(site: &SiteIdentity) -> PageMeta {
    PageMeta::new(
        format!("Page Not Found | {}", site.name),
        "The page you are looking for does not exist.",
    )
    .noindex()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CATALOG;

    fn site() -> SiteIdentity {
        SiteIdentity::default()
    }

    #[test]
    fn canonical_defaults_to_site_root() {
        let meta = PageMeta::new("t", "d");
        assert_eq!(meta.full_url(&site()), "https://unodigit.com.au");
        assert_eq!(meta.canonical("/about").full_url(&site()), "https://unodigit.com.au/about");
    }

    #[test]
    fn relative_images_are_prefixed() {
        let mut meta = PageMeta::new("t", "d");
        assert_eq!(meta.full_image(&site()), "https://unodigit.com.au/og-image.jpg");

        meta.image = Some("https://cdn.example.com/card.png".into());
        assert_eq!(meta.full_image(&site()), "https://cdn.example.com/card.png");
    }

    #[test]
    fn json_ld_cannot_close_script() {
        let value = serde_json::json!({ "name": "</script><b>&" });
        let encoded = json_ld(&value);
        assert!(!encoded.contains("</script>"));
        assert!(encoded.contains("\\u003c/script\\u003e"));
        let decoded: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn article_meta_uses_record_fields() {
        let article = CATALOG.find_article("edge-ai-processing-at-source").unwrap();
        let meta = super::article(&site(), article);
        assert_eq!(meta.title, "Edge AI: Processing at the Source | Uno Digit Insights");
        assert_eq!(meta.description, article.excerpt);
        assert_eq!(meta.og_type, OgType::Article);
        assert_eq!(
            meta.full_url(&site()),
            "https://unodigit.com.au/insights/edge-ai-processing-at-source"
        );
    }

    #[test]
    fn rendered_head_carries_social_tags() {
        let markup = insights(&site()).render(&site()).into_string();
        assert!(markup.contains("<title>AI Insights &amp; Tech Blog | Uno Digit</title>"));
        assert!(markup.contains(r#"<meta property="og:url" content="https://unodigit.com.au/insights">"#));
        assert!(markup.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
        assert!(markup.contains(r#"<script type="application/ld+json">"#));
        assert!(markup.contains(r#""@type":"Blog""#));
    }

    #[test]
    fn not_found_is_noindex() {
        let markup = not_found(&site()).render(&site()).into_string();
        assert!(markup.contains(r#"content="noindex, follow""#));
        assert!(!markup.contains("application/ld+json"));
    }
}
