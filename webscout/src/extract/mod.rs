//! Content extraction strategies for fetched pages
//!
//! Four strategies share one dispatch point: markdown conversion, article
//! extraction with boilerplate removal, raw HTML, and page metadata. The
//! markdown converter is an injected capability; when it yields nothing the
//! dispatcher falls back to article extraction and reports the mode that
//! actually ran, so callers never see markdown reported for content that
//! was produced another way.

pub mod article;
pub mod markdown;
pub mod metadata;
pub mod text;

use crate::types::ExtractMode;

/// Maximum length of raw HTML output in characters
pub const MAX_RAW_LENGTH: usize = 50_000;

/// Extracted content together with the mode that actually produced it
#[derive(Debug, Clone)]
pub struct Extracted {
    /// The extracted content
    pub content: String,
    /// The strategy that produced `content`
    pub mode: ExtractMode,
}

/// Capability provider for markdown conversion
///
/// Returns `None` when conversion is unavailable or failed; the dispatcher
/// treats that as a signal to fall back, never as an error.
pub type MarkdownDelegate = fn(&str) -> Option<String>;

/// Dispatches extraction to the strategy for a requested mode
#[derive(Debug, Clone)]
pub struct Extractor {
    markdown_delegate: MarkdownDelegate,
}

impl Extractor {
    /// Creates an extractor using the built-in markdown converter
    pub fn new() -> Self {
        Self {
            markdown_delegate: markdown::convert,
        }
    }

    /// Creates an extractor with a custom markdown capability provider
    ///
    /// Supplying a delegate that returns `None` simulates an unavailable
    /// converter, which exercises the article fallback path.
    pub fn with_markdown_delegate(delegate: MarkdownDelegate) -> Self {
        Self {
            markdown_delegate: delegate,
        }
    }

    /// Runs the strategy for `mode` over `html`, reporting the effective mode
    ///
    /// `url` is the page URL the HTML came from; article extraction uses it
    /// to resolve the document. Extraction never fails: every strategy
    /// degrades to some string output on malformed input.
    pub fn extract(&self, html: &str, url: &str, mode: ExtractMode) -> Extracted {
        match mode {
            ExtractMode::Raw => Extracted {
                content: truncate_chars(html, MAX_RAW_LENGTH).to_string(),
                mode: ExtractMode::Raw,
            },
            ExtractMode::Metadata => Extracted {
                content: metadata::extract(html),
                mode: ExtractMode::Metadata,
            },
            ExtractMode::Article => Extracted {
                content: article::extract(html, url),
                mode: ExtractMode::Article,
            },
            ExtractMode::Markdown => match (self.markdown_delegate)(html) {
                Some(content) => Extracted {
                    content,
                    mode: ExtractMode::Markdown,
                },
                None => {
                    tracing::debug!(
                        "Markdown conversion unavailable for {}, falling back to article extraction",
                        url
                    );
                    Extracted {
                        content: article::extract(html, url),
                        mode: ExtractMode::Article,
                    }
                }
            },
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns a prefix of `text` at most `max_chars` characters long
///
/// Counts characters rather than bytes, so the cut always lands on a char
/// boundary and multi-byte text never splits.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
