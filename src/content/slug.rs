/// Check that a slug is lowercase kebab-case: ASCII lowercase letters and
/// digits separated by single hyphens.
pub fn validate_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
