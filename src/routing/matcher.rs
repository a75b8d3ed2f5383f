//! Path pattern matching.
//!
//! # Responsibilities
//! - Compile patterns like `/work/{slug}` into segments
//! - Match request paths segment by segment
//! - Capture parameter segments
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Empty segments are ignored, so `/about/` matches `/about`
//! - No regex to guarantee O(n) matching

/// One segment of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(&'static str),
    /// Captures exactly one non-empty path segment.
    Param(&'static str),
}

/// A compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

/// Captured parameter values, in pattern order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Captures<'p> {
    values: Vec<(&'static str, &'p str)>,
}

impl<'p> Captures<'p> {
    pub fn get(&self, name: &str) -> Option<&'p str> {
        self.values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }
}

impl PathPattern {
    /// Compile a pattern. `{name}` segments become parameters.
    pub fn new(pattern: &'static str) -> Self {
        let segments = split(pattern)
            .map(|segment| {
                match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                    Some(name) => Segment::Param(name),
                    None => Segment::Literal(segment),
                }
            })
            .collect();
        Self { segments }
    }

    /// Returns the captures if `path` matches this pattern.
    pub fn matches<'p>(&self, path: &'p str) -> Option<Captures<'p>> {
        let mut captures = Captures::default();
        let mut parts = split(path);

        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Literal(expected) => {
                    if part != *expected {
                        return None;
                    }
                }
                Segment::Param(name) => captures.values.push((*name, part)),
            }
        }

        if parts.next().is_some() {
            return None;
        }
        Some(captures)
    }

    /// Whether the pattern has any parameter segment.
    pub fn is_dynamic(&self) -> bool {
        self.segments.iter().any(|s| matches!(s, Segment::Param(_)))
    }
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_pattern() {
        let pattern = PathPattern::new("/");
        assert!(pattern.matches("/").is_some());
        assert!(pattern.matches("").is_some());
        assert!(pattern.matches("/about").is_none());
        assert!(!pattern.is_dynamic());
    }

    #[test]
    fn test_literal_pattern() {
        let pattern = PathPattern::new("/about");
        assert!(pattern.matches("/about").is_some());
        assert!(pattern.matches("/about/").is_some());
        assert!(pattern.matches("/About").is_none());
        assert!(pattern.matches("/about/team").is_none());
    }

    #[test]
    fn test_param_pattern() {
        let pattern = PathPattern::new("/work/{slug}");
        assert!(pattern.is_dynamic());

        let captures = pattern.matches("/work/fintech-mobile-app").unwrap();
        assert_eq!(captures.get("slug"), Some("fintech-mobile-app"));
        assert_eq!(captures.get("other"), None);

        assert!(pattern.matches("/work").is_none());
        assert!(pattern.matches("/work/a/b").is_none());
        assert!(pattern.matches("/insights/a").is_none());
    }
}
