//! Schema.org structured data builders.

use serde_json::{json, Value};

use crate::config::SiteIdentity;
use crate::content::{Article, Project};
use crate::routing::router::{article_path, project_path};

const CONTEXT: &str = "https://schema.org";

fn logo_url(site: &SiteIdentity) -> String {
    format!("{}/favicon.svg", site.url)
}

fn organization_ref(site: &SiteIdentity) -> Value {
    json!({ "@type": "Organization", "name": site.name })
}

fn postal_address(site: &SiteIdentity) -> Value {
    json!({
        "@type": "PostalAddress",
        "streetAddress": site.street_address,
        "addressLocality": site.locality,
        "addressRegion": site.region,
        "postalCode": site.postal_code,
        "addressCountry": site.country,
    })
}

pub fn organization(site: &SiteIdentity) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "Organization",
        "name": site.name,
        "url": site.url,
        "logo": logo_url(site),
        "description": "Sydney's Leading AI Consultancy helping enterprises harness the power of artificial intelligence.",
        "address": postal_address(site),
    })
}

pub fn about_page(site: &SiteIdentity) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "AboutPage",
        "name": format!("About {}", site.name),
        "description": format!("Information about {}, an AI consultancy in Sydney.", site.name),
    })
}

pub fn service(site: &SiteIdentity) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "Service",
        "serviceType": "AI Consulting",
        "provider": organization_ref(site),
        "areaServed": "Australia",
    })
}

pub fn collection_page(site: &SiteIdentity) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "CollectionPage",
        "name": format!("{} Case Studies", site.name),
        "description": "A collection of AI and digital transformation case studies.",
    })
}

pub fn blog(site: &SiteIdentity) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "Blog",
        "name": format!("{} Insights", site.name),
        "description": "Thoughts on AI and Digital Transformation",
    })
}

pub fn blog_posting(site: &SiteIdentity, article: &Article) -> Value {
    let mut value = json!({
        "@context": CONTEXT,
        "@type": "BlogPosting",
        "headline": article.title,
        "description": article.excerpt,
        "articleSection": article.category,
        "url": format!("{}{}", site.url, article_path(article.slug)),
        "author": organization_ref(site),
        "publisher": {
            "@type": "Organization",
            "name": site.name,
            "logo": { "@type": "ImageObject", "url": logo_url(site) },
        },
    });
    if let Some(date) = iso_date(article.date) {
        value["datePublished"] = json!(date);
    }
    value
}

pub fn case_study(site: &SiteIdentity, project: &Project) -> Value {
    let mut value = json!({
        "@context": CONTEXT,
        "@type": "CreativeWork",
        "name": project.title,
        "description": project.description,
        "genre": project.category,
        "url": format!("{}{}", site.url, project_path(project.slug)),
        "creator": organization_ref(site),
    });
    if let Some(client) = project.client {
        value["sourceOrganization"] = organization_ref_named(client);
    }
    if !project.tags.is_empty() {
        value["keywords"] = json!(project.tags.join(", "));
    }
    value
}

fn organization_ref_named(name: &str) -> Value {
    json!({ "@type": "Organization", "name": name })
}

pub fn contact_page(site: &SiteIdentity) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "ContactPage",
        "name": format!("Contact {}", site.name),
        "mainEntity": {
            "@type": "Organization",
            "name": site.name,
            "email": site.email,
            "telephone": site.phone,
            "address": postal_address(site),
        },
    })
}

/// Convert a display date like "Dec 15, 2024" to ISO 8601.
pub fn iso_date(display: &str) -> Option<String> {
    chrono::NaiveDate::parse_from_str(display, "%b %d, %Y")
        .ok()
        .map(|date| date.format("%Y-%m-%d").to_string())
}
