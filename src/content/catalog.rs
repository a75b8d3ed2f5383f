//! The compiled-in content catalog.

use std::collections::HashSet;

use thiserror::Error;

use super::articles::ARTICLES;
use super::projects::{FEATURED_CASE, PROJECTS};
use super::services::{
    CompanyValue, ProcessStep, Service, Stat, Testimonial, ABOUT_STATS, HIGHLIGHTS, HOME_STATS,
    PROCESS, SERVICES, TESTIMONIALS, VALUES, WORK_STATS,
};
use super::slug::validate_slug;
use super::{find_by_slug, Article, Project, Slugged};

/// Number of related articles shown next to an article.
pub const RELATED_ARTICLES: usize = 3;

/// Number of other projects shown on a case study.
pub const RELATED_PROJECTS: usize = 3;

/// A content integrity violation found by [`Catalog::verify`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("duplicate {kind} slug '{slug}'")]
    DuplicateSlug { kind: &'static str, slug: &'static str },

    #[error("{kind} slug '{slug}' is not lowercase kebab-case")]
    InvalidSlug { kind: &'static str, slug: &'static str },

    #[error("{kind} list is empty")]
    Empty { kind: &'static str },
}

/// All site content.
#[derive(Debug)]
pub struct Catalog {
    pub articles: &'static [Article],
    pub featured_case: &'static Project,
    pub projects: &'static [Project],
    pub services: &'static [Service],
    pub process: &'static [ProcessStep],
    pub highlights: &'static [CompanyValue],
    pub values: &'static [CompanyValue],
    pub testimonials: &'static [Testimonial],
    pub home_stats: &'static [Stat],
    pub about_stats: &'static [Stat],
    pub work_stats: &'static [Stat],
}

pub static CATALOG: Catalog = Catalog {
    articles: ARTICLES,
    featured_case: &FEATURED_CASE,
    projects: PROJECTS,
    services: SERVICES,
    process: PROCESS,
    highlights: HIGHLIGHTS,
    values: VALUES,
    testimonials: TESTIMONIALS,
    home_stats: HOME_STATS,
    about_stats: ABOUT_STATS,
    work_stats: WORK_STATS,
};

impl Catalog {
    pub fn find_article(&self, slug: &str) -> Option<&'static Article> {
        find_by_slug(self.articles, slug)
    }

    /// Look up a project; the featured case is searched first.
    pub fn find_project(&self, slug: &str) -> Option<&'static Project> {
        find_by_slug(self.all_projects(), slug)
    }

    /// The featured case followed by the remaining projects.
    pub fn all_projects(&self) -> impl Iterator<Item = &'static Project> + Clone {
        let featured: &'static Project = self.featured_case;
        std::iter::once(featured).chain(self.projects.iter())
    }

    /// The article shown as the hero of the insights listing.
    pub fn featured_article(&self) -> Option<&'static Article> {
        self.articles.first()
    }

    /// Up to `limit` other articles, in list order.
    pub fn related_articles(&self, slug: &str, limit: usize) -> Vec<&'static Article> {
        self.articles
            .iter()
            .filter(|a| a.slug != slug)
            .take(limit)
            .collect()
    }

    /// Up to `limit` other projects, featured case first.
    pub fn related_projects(&self, slug: &str, limit: usize) -> Vec<&'static Project> {
        self.all_projects()
            .filter(|p| p.slug != slug)
            .take(limit)
            .collect()
    }

    /// Check slug rules and uniqueness across every list.
    ///
    /// Returns all violations, not just the first.
    pub fn verify(&self) -> Result<(), Vec<ContentError>> {
        let mut errors = Vec::new();
        check_list("article", self.articles.iter(), &mut errors);
        check_list("project", self.all_projects(), &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check_list<'a, T, I>(kind: &'static str, items: I, errors: &mut Vec<ContentError>)
where
    T: Slugged + 'a,
    I: Iterator<Item = &'a T>,
{
    let mut seen = HashSet::new();
    let mut count = 0usize;
    for item in items {
        count += 1;
        let slug = item.slug();
        if !validate_slug(slug) {
            errors.push(ContentError::InvalidSlug { kind, slug });
        }
        if !seen.insert(slug) {
            errors.push(ContentError::DuplicateSlug { kind, slug });
        }
    }
    if count == 0 {
        errors.push(ContentError::Empty { kind });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Block;

    #[test]
    fn builtin_catalog_verifies() {
        assert_eq!(CATALOG.verify(), Ok(()));
    }

    #[test]
    fn every_article_slug_finds_itself() {
        for article in CATALOG.articles {
            let found = CATALOG.find_article(article.slug).unwrap();
            assert_eq!(found.slug, article.slug);
            assert_eq!(found.title, article.title);
        }
    }

    #[test]
    fn every_project_slug_finds_itself() {
        let mut count = 0;
        for project in CATALOG.all_projects() {
            let found = CATALOG.find_project(project.slug).unwrap();
            assert_eq!(found.slug, project.slug);
            count += 1;
        }
        assert_eq!(count, 7);
    }

    #[test]
    fn featured_case_is_findable() {
        let project = CATALOG.find_project("ai-powered-logistics-optimization").unwrap();
        assert_eq!(project.result, "40% reduction in delivery costs");
        assert_eq!(project.client, Some("TransCorp International"));
        assert_eq!(project.tags, &["Machine Learning", "Python", "AWS"]);
    }

    #[test]
    fn unknown_slugs_are_not_found() {
        assert!(CATALOG.find_article("future-enterprise-ai-trends-2026").is_none());
        assert!(CATALOG.find_project("FINTECH-MOBILE-APP").is_none());
    }

    #[test]
    fn related_articles_skip_current() {
        let related = CATALOG.related_articles("future-enterprise-ai-trends-2025", RELATED_ARTICLES);
        assert_eq!(related.len(), 3);
        assert!(related.iter().all(|a| a.slug != "future-enterprise-ai-trends-2025"));
        assert_eq!(related[0].slug, "building-scalable-ml-pipelines-python");

        let related = CATALOG.related_articles("building-scalable-ml-pipelines-python", RELATED_ARTICLES);
        assert_eq!(related[0].slug, "future-enterprise-ai-trends-2025");
        assert_eq!(related[1].slug, "roi-of-ai-measuring-business-impact");
    }

    #[test]
    fn related_projects_skip_current() {
        let related = CATALOG.related_projects("ai-powered-logistics-optimization", RELATED_PROJECTS);
        assert_eq!(related.len(), 3);
        assert!(related.iter().all(|p| p.slug != "ai-powered-logistics-optimization"));
        assert_eq!(related[0].slug, CATALOG.projects[0].slug);

        let current = CATALOG.projects[1].slug;
        let related = CATALOG.related_projects(current, RELATED_PROJECTS);
        assert_eq!(related[0].slug, "ai-powered-logistics-optimization");
        assert_eq!(related[1].slug, CATALOG.projects[0].slug);
        assert_eq!(related[2].slug, CATALOG.projects[2].slug);
    }

    #[test]
    fn verify_reports_all_violations() {
        static BAD: &[Article] = &[
            Article {
                slug: "Bad Slug",
                title: "",
                excerpt: "",
                date: "",
                read_time: "",
                category: "",
                body: &[Block::Paragraph("x")],
            },
            Article {
                slug: "Bad Slug",
                title: "",
                excerpt: "",
                date: "",
                read_time: "",
                category: "",
                body: &[],
            },
        ];
        let catalog = Catalog {
            articles: BAD,
            ..CATALOG
        };
        let errors = catalog.verify().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ContentError::DuplicateSlug { kind: "article", slug: "Bad Slug" }));
    }
}
