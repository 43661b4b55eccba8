//! Regex-based text extraction fallback
//!
//! The deterministic last resort when article extraction has nothing to
//! offer: a fixed pipeline of regex passes that strips markup and leaves
//! readable text. It never fails, even on badly malformed HTML.

use once_cell::sync::Lazy;
use regex::Regex;

use super::truncate_chars;

/// Maximum length of regex-extracted text in characters
pub const MAX_TEXT_LENGTH: usize = 20_000;

static SCRIPT_BLOCKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<script[^>]*>[\s\S]*?</script>").unwrap());
static STYLE_BLOCKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<style[^>]*>[\s\S]*?</style>").unwrap());
static HTML_COMMENTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"<!--[\s\S]*?-->").unwrap());
static TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Extracts readable text from HTML
///
/// Pipeline order matters: script and style blocks go first (with their
/// bodies), then comments, then remaining tags become spaces, then entities
/// decode, then whitespace collapses. Output is capped at
/// [`MAX_TEXT_LENGTH`] characters with a trailing ellipsis when cut.
pub fn extract(html: &str) -> String {
    let text = SCRIPT_BLOCKS.replace_all(html, "");
    let text = STYLE_BLOCKS.replace_all(&text, "");
    let text = HTML_COMMENTS.replace_all(&text, "");
    let text = TAGS.replace_all(&text, " ");
    let text = html_escape::decode_html_entities(&text);
    let text = WHITESPACE_RUNS.replace_all(&text, " ");
    let text = text.trim();

    let cut = truncate_chars(text, MAX_TEXT_LENGTH);
    if cut.len() < text.len() {
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_script_and_style_blocks() {
        let html = "<html><head><style>body { color: red; }</style>\
                    <script>alert('hi');</script></head>\
                    <body><p>Visible text</p></body></html>";

        let text = extract(html);
        assert_eq!(text, "Visible text");
    }

    #[test]
    fn test_script_matching_is_case_insensitive() {
        let html = "<SCRIPT type=\"text/javascript\">var x = 1;</SCRIPT><p>kept</p>";
        assert_eq!(extract(html), "kept");
    }

    #[test]
    fn test_script_blocks_span_newlines() {
        let html = "<script>\nline1();\nline2();\n</script><p>after</p>";
        assert_eq!(extract(html), "after");
    }

    #[test]
    fn test_removes_comments_without_inserting_space() {
        let html = "<p>Before<!-- hidden note -->After</p>";
        assert_eq!(extract(html), "BeforeAfter");
    }

    #[test]
    fn test_tags_become_spaces() {
        let html = "<p>one</p><p>two</p>";
        assert_eq!(extract(html), "one two");
    }

    #[test]
    fn test_decodes_entities_after_tag_removal() {
        let html = "<p>Fish &amp; Chips &lt;fresh&gt;</p>";
        assert_eq!(extract(html), "Fish & Chips <fresh>");
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        let html = "<div>\n  spaced \t\t out  \n words\n</div>";
        assert_eq!(extract(html), "spaced out words");
    }

    #[test]
    fn test_truncates_long_text_with_ellipsis() {
        let html = format!("<p>{}</p>", "word ".repeat(10_000));

        let text = extract(&html);
        assert!(text.chars().count() <= MAX_TEXT_LENGTH + 3);
        assert!(text.ends_with("..."));
    }

    #[test]
    fn test_short_text_is_not_truncated() {
        let text = extract("<p>short</p>");
        assert_eq!(text, "short");
        assert!(!text.ends_with("..."));
    }

    #[test]
    fn test_malformed_html_does_not_panic() {
        let text = extract("<p>unclosed <div <<< & weird");
        assert!(text.contains("unclosed"));
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(extract(""), "");
    }
}
