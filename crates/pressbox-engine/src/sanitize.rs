//! Allow-listed HTML sanitization
//!
//! The single choke-point every renderer routes text-bearing fields
//! through. No renderer interpolates a block-supplied string into markup
//! without passing it here first; `href`/`src` attribute values instead go
//! through [`is_safe_url`] and are dropped when invalid.

use std::collections::{HashMap, HashSet};

use ammonia::{Builder, UrlRelative};

/// Tags the boundary lets through. Callers may narrow this list per call
/// but can never widen it.
pub const ALLOWED_TAGS: &[&str] = &["a", "b", "i", "strong", "em", "br", "p", "span", "img"];

/// Strip every tag and attribute not on the default allow-list.
///
/// Pure and infallible: unsanitizable input degrades to an empty string
/// rather than failing, so a bad field can never take the page down.
pub fn sanitize(html: &str) -> String {
    sanitize_with_tags(html, ALLOWED_TAGS)
}

/// Sanitize with a caller-narrowed tag list.
///
/// Requested tags outside the default allow-list are ignored, which makes
/// widening impossible by construction.
pub fn sanitize_with_tags(html: &str, allowed: &[&str]) -> String {
    let tags: HashSet<&str> = allowed
        .iter()
        .copied()
        .filter(|tag| ALLOWED_TAGS.contains(tag))
        .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    if tags.contains("a") {
        attributes.insert("a", HashSet::from(["href"]));
    }
    if tags.contains("img") {
        attributes.insert("img", HashSet::from(["src", "alt"]));
    }

    Builder::default()
        .tags(tags)
        .tag_attributes(attributes)
        .url_schemes(HashSet::from(["http", "https"]))
        .url_relative(UrlRelative::Deny)
        .clean(html)
        .to_string()
}

/// Escape a string for use inside an HTML attribute value or text node.
pub(crate) fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Whether a URL is acceptable as an `href`/`src` attribute value: an
/// absolute `http`/`https` URL with no characters that could break out of
/// the attribute.
pub(crate) fn is_safe_url(url: &str) -> bool {
    let trimmed = url.trim();
    (trimmed.starts_with("https://") || trimmed.starts_with("http://"))
        && !trimmed
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_allowed_inline_tags() {
        let clean = sanitize("<p>one <b>two</b> <em>three</em></p>");
        assert_eq!(clean, "<p>one <b>two</b> <em>three</em></p>");
    }

    #[test]
    fn test_strips_script_and_event_handlers() {
        let clean = sanitize(r#"<p onclick="evil()">x</p><script>alert(1)</script>"#);
        assert!(!clean.contains("onclick"));
        assert!(!clean.contains("script"));
        assert!(clean.contains("<p>x</p>"));
    }

    #[test]
    fn test_drops_javascript_scheme_links() {
        let clean = sanitize(r#"<a href="javascript:alert(1)">x</a>"#);
        assert!(!clean.contains("javascript"));
        assert!(clean.contains('x'));
    }

    #[test]
    fn test_keeps_https_links() {
        let clean = sanitize(r#"<a href="https://example.com">x</a>"#);
        assert!(clean.contains(r#"href="https://example.com""#));
    }

    #[test]
    fn test_narrowed_list_cannot_widen() {
        let clean = sanitize_with_tags("<p>a</p><iframe src='x'></iframe>", &["p", "iframe"]);
        assert!(clean.contains("<p>a</p>"));
        assert!(!clean.contains("iframe"));
    }

    #[test]
    fn test_narrowed_list_drops_default_tags() {
        let clean = sanitize_with_tags("keep <b>bold</b>", &["p"]);
        assert_eq!(clean, "keep bold");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(sanitize("plain text"), "plain text");
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }

    #[test]
    fn test_is_safe_url() {
        assert!(is_safe_url("https://example.com/a.jpg"));
        assert!(is_safe_url("http://example.com"));
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url("//example.com/protocol-relative"));
        assert!(!is_safe_url(r#"https://example.com/"onmouseover="x"#));
        assert!(!is_safe_url("https://example.com/a b"));
    }
}
