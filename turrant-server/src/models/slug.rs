//! Post slug validation
//!
//! A slug is used as a single URL path segment, so it may only hold URL
//! unreserved characters: letters, digits, `-`, `.`, `_`, `~`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

/// Maximum length for post slugs
const MAX_SLUG_LEN: usize = 128;

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._~-]+$").expect("invalid slug regex"));

/// Check a slug supplied by the admin surface.
///
/// # Example
/// ```
/// use turrant_server::models::validate_slug;
///
/// assert!(validate_slug("whatsapp-document-collection").is_ok());
/// assert!(validate_slug("AI-Trends-2024").is_ok());
/// assert!(validate_slug("Hello World").is_err());
/// ```
pub fn validate_slug(s: &str) -> Result<(), ValidationError> {
    if s.is_empty() {
        return Err(ValidationError::Empty { field: "slug" });
    }

    if s.len() > MAX_SLUG_LEN {
        return Err(ValidationError::TooLong {
            field: "slug",
            max: MAX_SLUG_LEN,
        });
    }

    if !SLUG_RE.is_match(s) {
        return Err(ValidationError::InvalidFormat {
            field: "slug",
            reason: "may only contain letters, digits, '-', '.', '_' and '~'",
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_slugs() {
        assert!(validate_slug("a").is_ok());
        assert!(validate_slug("hr-onboarding-2024").is_ok());
        assert!(validate_slug("kyc_checklist").is_ok());
        assert!(validate_slug("AI-Trends-2024").is_ok());
        assert!(validate_slug("release-1.2~beta").is_ok());
        assert!(validate_slug("post--two").is_ok());
    }

    #[test]
    fn rejects_spaces() {
        let err = validate_slug("My Post").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn rejects_reserved_characters() {
        assert!(validate_slug("a/b").is_err());
        assert!(validate_slug("a?b").is_err());
        assert!(validate_slug("a#b").is_err());
        assert!(validate_slug("caf%C3%A9").is_err());
        assert!(validate_slug("café").is_err());
    }

    #[test]
    fn rejects_empty() {
        let err = validate_slug("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn max_length() {
        assert!(validate_slug(&"a".repeat(128)).is_ok());

        let err = validate_slug(&"a".repeat(129)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 128, .. }));
    }
}
