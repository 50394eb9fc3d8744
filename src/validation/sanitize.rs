//! Markup stripping for free text.

use regex::Regex;
use std::sync::LazyLock;

/// Creates a compile-time verified regex wrapped in [`LazyLock`].
macro_rules! lazy_regex {
    ($pattern:expr) => {
        LazyLock::new(|| Regex::new($pattern).unwrap_or_else(|_| unreachable!()))
    };
}

/// Matches a markup-like tag: `<` up to the next `>`.
static TAG_PATTERN: LazyLock<Regex> = lazy_regex!(r"<[^>]*>");

/// Strips markup-like tags and stray angle brackets, then trims whitespace.
///
/// Never fails; text without angle brackets only gets trimmed. The text
/// between tags is kept, so `<b>x</b>` becomes `x`.
///
/// # Examples
///
/// ```
/// use creatorscope::validation::sanitize;
///
/// assert_eq!(sanitize("  <script>x</script>abc "), "xabc");
/// assert_eq!(sanitize("a > b"), "a  b");
/// ```
#[must_use]
pub fn sanitize(text: &str) -> String {
    if !text.contains(['<', '>']) {
        return text.trim().to_string();
    }
    let without_tags = TAG_PATTERN.replace_all(text, "");
    without_tags
        .chars()
        .filter(|c| *c != '<' && *c != '>')
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_script_tags_keeps_text() {
        let cleaned = sanitize("<script>x</script>abc");
        assert!(!cleaned.contains('<'));
        assert!(!cleaned.contains('>'));
        assert!(cleaned.contains('x'));
        assert!(cleaned.contains("abc"));
    }

    #[test]
    fn test_removes_bare_brackets() {
        assert_eq!(sanitize("1 < 2"), "1  2");
        assert_eq!(sanitize("<<unclosed"), "unclosed");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(sanitize("  hello \n"), "hello");
    }

    #[test]
    fn test_clean_text_unchanged() {
        assert_eq!(sanitize("plain text"), "plain text");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_idempotent() {
        let once = sanitize(" <i>a</i> <<b>> ");
        assert_eq!(sanitize(&once), once);
    }
}
