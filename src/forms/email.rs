//! Email address syntax.

use std::sync::LazyLock;

use regex::Regex;

/// The `type=email` rule browsers apply: a local part of allowed characters,
/// `@`, then dot-separated labels that neither start nor end with a hyphen.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

/// Longest address accepted (RFC 5321 path limit).
pub const MAX_EMAIL_LEN: usize = 254;

pub fn is_valid_email(value: &str) -> bool {
    value.len() <= MAX_EMAIL_LEN && EMAIL.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        assert!(is_valid_email("hello@unodigit.com"));
        assert!(is_valid_email("first.last+tag@sub.example.com.au"));
        assert!(is_valid_email("user@localhost"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for value in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@-example.com",
            "user@example-.com",
            "user@exa mple.com",
            "user@@example.com",
            "user@example..com",
            " user@example.com",
        ] {
            assert!(!is_valid_email(value), "{value:?} should be rejected");
        }
    }

    #[test]
    fn rejects_overlong_addresses() {
        let long = format!("{}@example.com", "a".repeat(250));
        assert!(!is_valid_email(&long));
    }
}
