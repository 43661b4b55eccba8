//! Page metadata extraction
//!
//! Pulls the document title, meta description, and Open Graph properties
//! out of raw HTML and renders them as `key: value` lines. Matching is
//! regex-based and case-insensitive, so it works on fragments and
//! malformed documents alike. There is no failure path; a page with no
//! recognizable metadata yields an empty string.

use once_cell::sync::Lazy;
use regex::Regex;

static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap());
static DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta[^>]*name=["']description["'][^>]*content=["']([^"']*)["']"#).unwrap()
});
static OG_PROPERTIES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta[^>]*property=["']og:(\w+)["'][^>]*content=["']([^"']*)["']"#).unwrap()
});

/// Extracts title, description, and Open Graph metadata as text lines
///
/// Output order is fixed: `title`, then `description`, then one
/// `og_<property>` line per Open Graph tag in document order. A property
/// the document repeats produces one line per occurrence. Values are
/// entity-decoded and trimmed.
pub fn extract(html: &str) -> String {
    let mut lines = Vec::new();

    if let Some(caps) = TITLE.captures(html) {
        let title = html_escape::decode_html_entities(&caps[1]);
        lines.push(format!("title: {}", title.trim()));
    }

    if let Some(caps) = DESCRIPTION.captures(html) {
        let description = html_escape::decode_html_entities(&caps[1]);
        lines.push(format!("description: {}", description.trim()));
    }

    for caps in OG_PROPERTIES.captures_iter(html) {
        let value = html_escape::decode_html_entities(&caps[2]);
        lines.push(format!("og_{}: {}", &caps[1], value.trim()));
    }

    lines.join("\n")
}
