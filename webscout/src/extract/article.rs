//! Article text extraction with boilerplate removal
//!
//! Runs readability-style content scoring to isolate the main article of a
//! page. Extraction is infallible from the caller's point of view: a parse
//! failure, an unparseable URL, or an empty product all fall through to the
//! regex text pipeline.

use std::io::Cursor;

use url::Url;

use super::text;

/// Extracts the main article text from `html`
///
/// `url` resolves relative references during content scoring; when it does
/// not parse, the regex fallback handles the page instead.
pub fn extract(html: &str, url: &str) -> String {
    let parsed_url = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::debug!("URL '{}' not parseable for article extraction: {}", url, e);
            return text::extract(html);
        }
    };

    let mut cursor = Cursor::new(html.as_bytes());
    match readability::extractor::extract(&mut cursor, &parsed_url) {
        Ok(product) => {
            if product.text.is_empty() {
                tracing::debug!("Article extraction produced no text, using regex fallback");
                text::extract(html)
            } else {
                product.text
            }
        }
        Err(e) => {
            tracing::debug!("Article extraction failed: {}, using regex fallback", e);
            text::extract(html)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_paragraph_text() {
        let html = "<html><body><article><p>The quick brown fox jumps over the lazy dog. \
                    This paragraph carries the main content of the page and is long \
                    enough to score as article text.</p></article></body></html>";

        let extracted = extract(html, "https://example.com/article");
        assert!(extracted.contains("quick brown fox"));
    }

    #[test]
    fn test_unparseable_url_falls_back_to_regex() {
        let html = "<p>Body text survives the fallback.</p>";

        let extracted = extract(html, "not a url");
        assert_eq!(extracted, text::extract(html));
    }

    #[test]
    fn test_empty_document_yields_empty_text() {
        let extracted = extract("<html><body></body></html>", "https://example.com");
        assert_eq!(extracted, "");
    }

    #[test]
    fn test_malformed_html_does_not_panic() {
        let extracted = extract("<div><p>broken <span>markup", "https://example.com");
        assert!(extracted.contains("broken"));
    }
}
