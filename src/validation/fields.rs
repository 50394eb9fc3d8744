//! Single-field validators.

use super::ValidationError;

/// Maximum length of a search query before a warning is shown.
pub const MAX_QUERY_LENGTH: usize = 100;

/// Checks the live search query against [`MAX_QUERY_LENGTH`].
///
/// This is a soft check: the query is still used for filtering when it fails.
#[must_use]
pub fn validate_search_query(text: &str) -> Option<ValidationError> {
    (text.chars().count() > MAX_QUERY_LENGTH).then_some(ValidationError::QueryTooLong {
        max: MAX_QUERY_LENGTH,
    })
}

/// Checks that a text field is present and no longer than `max_length`.
#[must_use]
pub fn validate_required_field(
    value: &str,
    name: &str,
    max_length: usize,
) -> Option<ValidationError> {
    if value.trim().is_empty() {
        return Some(ValidationError::Required {
            field: name.to_string(),
        });
    }
    if value.chars().count() > max_length {
        return Some(ValidationError::TooLong {
            field: name.to_string(),
            max: max_length,
        });
    }
    None
}

/// Checks an optional URL field.
///
/// Empty values pass; anything else must parse as an absolute URL.
#[must_use]
pub fn validate_url(value: &str) -> Option<ValidationError> {
    if value.is_empty() {
        return None;
    }
    url::Url::parse(value).err().map(|_| ValidationError::InvalidUrl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_search_query_boundary() {
        assert_eq!(validate_search_query(&"a".repeat(100)), None);
        assert_eq!(
            validate_search_query(&"a".repeat(101)),
            Some(ValidationError::QueryTooLong { max: 100 })
        );
    }

    #[test]
    fn test_search_query_counts_chars_not_bytes() {
        assert_eq!(validate_search_query(&"é".repeat(100)), None);
    }

    #[test_case("", Some("Bio is required"); "empty")]
    #[test_case("   ", Some("Bio is required"); "whitespace only")]
    #[test_case("short bio", None; "valid")]
    #[test_case("0123456789A", Some("Bio must be less than 10 characters"); "too long")]
    fn test_required_field(value: &str, expected: Option<&str>) {
        let message = validate_required_field(value, "Bio", 10).map(|e| e.to_string());
        assert_eq!(message.as_deref(), expected);
    }

    #[test_case("", true; "empty is optional")]
    #[test_case("https://cdn.example.com/a.png", true; "https")]
    #[test_case("not a url", false; "plain text")]
    #[test_case("example.com/a.png", false; "missing scheme")]
    fn test_url(value: &str, valid: bool) {
        assert_eq!(validate_url(value).is_none(), valid);
    }
}
