//! HTML to markdown conversion
//!
//! Thin wrapper around html2text that absorbs converter failures. The
//! dispatcher only needs to know whether markdown came out; the cause of a
//! failure is logged at debug level and swallowed so the article fallback
//! can run.

use std::io::Cursor;

use super::truncate_chars;

/// Maximum length of converted markdown in characters
pub const MAX_MARKDOWN_LENGTH: usize = 100_000;

/// Line width for markdown rendering
const WRAP_WIDTH: usize = 80;

/// Marker appended when markdown output was cut at the length cap
const TRUNCATION_MARKER: &str = "\n\n[Content truncated...]";

/// Converts HTML to markdown, or `None` when conversion fails
///
/// Output longer than [`MAX_MARKDOWN_LENGTH`] characters is truncated with
/// a visible marker.
pub fn convert(html: &str) -> Option<String> {
    let cursor = Cursor::new(html.as_bytes());
    match html2text::from_read(cursor, WRAP_WIDTH) {
        Ok(markdown) => {
            let cut = truncate_chars(&markdown, MAX_MARKDOWN_LENGTH);
            if cut.len() < markdown.len() {
                Some(format!("{cut}{TRUNCATION_MARKER}"))
            } else {
                Some(markdown)
            }
        }
        Err(e) => {
            tracing::debug!("Markdown conversion failed: {}", e);
            None
        }
    }
}
