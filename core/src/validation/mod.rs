//! Email syntax rule.
//!
//! Deliberately loose: at least one non-space, non-`@` character, an `@`,
//! a domain part containing a dot, and no whitespace anywhere. Full RFC 5322
//! grammar is not attempted.

use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld`, no whitespace, exactly one `@`.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(EMAIL_PATTERN).unwrap_or_else(|e| panic!("invalid email pattern: {}", e))
});

/// Check a candidate address against [`EMAIL_PATTERN`].
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_RE.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co.uk"));
        assert!(is_valid_email("a@b.c.d"));
        assert!(is_valid_email("x:y@z.com"));
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b.com "));
    }
}
