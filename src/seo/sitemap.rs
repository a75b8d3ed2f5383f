//! `sitemap.xml` and `robots.txt`.

use std::fmt::Write;

use crate::config::SiteIdentity;
use crate::routing::SiteRouter;

/// Render a sitemap listing every routable page.
pub fn sitemap_xml(site: &SiteIdentity, router: &SiteRouter) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for path in router.paths() {
        let loc = if path == "/" {
            site.url.clone()
        } else {
            format!("{}{}", site.url, path)
        };
        let _ = writeln!(xml, "  <url><loc>{}</loc></url>", escape_xml(&loc));
    }
    xml.push_str("</urlset>\n");
    xml
}

pub fn robots_txt(site: &SiteIdentity) -> String {
    format!("User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n", site.url)
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
