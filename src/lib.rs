//! # rs-article-extract
//!
//! Heuristic article extraction from raw HTML.
//!
//! Given a page's source and the URL it came from, the engine isolates the
//! article region, reduces it to plain text, collects images, videos, audio
//! and links, and resolves metadata (title, description, author, publish
//! date, category, tags, language) through ordered fallback cascades.
//!
//! There is no DOM: markup is scanned tag by tag, so malformed input
//! degrades to partial results rather than failing.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_article_extract::extract_content;
//!
//! let html = r#"<html><head><title>My Article</title></head>
//! <body><nav>Menu</nav><article><p>By Jane Doe, March 2024</p>
//! <p>Main content here, long enough to be taken as the article body.</p>
//! </article></body></html>"#;
//!
//! let result = extract_content(html, "https://example.com/post");
//! assert_eq!(result.title, "My Article");
//! assert!(result.main_text.contains("Main content here"));
//! assert_eq!(result.metadata.author.as_deref(), Some("Jane Doe"));
//! ```
//!
//! ## Features
//!
//! - **Article isolation**: `<article>`, `<main>` or a known content container
//! - **Media scanning**: lazy-loaded and responsive images, YouTube/Vimeo
//!   embeds, native video and audio
//! - **Metadata cascades**: Open Graph, Twitter cards, JSON-LD and markup
//! - **Never fails**: missing data comes back as empty fields

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// Tag scanning, attribute reading and a lightweight queryable document.
pub mod dom;

/// Plain-text reduction of markup.
pub mod text;

/// URL resolution against the page's base URL.
pub mod url_utils;

/// `srcset` parsing and candidate selection.
pub mod srcset;

/// Article region isolation.
pub mod isolate;

/// Image, video, audio and link scanners.
pub mod scanner;

/// Metadata cascades (meta tags, JSON-LD, author, date, language).
pub mod metadata;

/// Character encoding detection and decoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::{main_text, reading_time, CONTENT_CONTAINERS};
pub use options::Options;
pub use result::{
    ContentMetadata, ExtractedAudio, ExtractedContent, ExtractedImage, ExtractedLink,
    ExtractedVideo, VideoPlatform, DEFAULT_AUDIO_TITLE,
};

/// Extracts an article from an HTML page using default options.
///
/// `base_url` is the address the page was fetched from; relative URLs are
/// resolved against it. An invalid base only degrades URL resolution.
///
/// # Example
///
/// ```rust
/// use rs_article_extract::extract_content;
///
/// let html = r#"<iframe src="https://www.youtube.com/embed/abc123"></iframe>"#;
/// let result = extract_content(html, "https://example.com/");
/// assert_eq!(result.videos[0].platform.as_str(), "youtube");
/// assert!(result.reading_time >= 1);
/// ```
#[must_use]
pub fn extract_content(html: &str, base_url: &str) -> ExtractedContent {
    extract_content_with_options(html, base_url, &Options::default())
}

/// Extracts an article from an HTML page with custom options.
///
/// Options that fail [`Options::validate`] are replaced by the defaults,
/// with a warning logged.
///
/// # Example
///
/// ```rust
/// use rs_article_extract::{extract_content_with_options, Options};
///
/// let options = Options {
///     default_title: "(no title)".to_string(),
///     detect_language: false,
///     ..Options::default()
/// };
/// let result = extract_content_with_options("<p>text</p>", "https://example.com/", &options);
/// assert_eq!(result.title, "(no title)");
/// assert_eq!(result.metadata.language, None);
/// ```
#[must_use]
pub fn extract_content_with_options(html: &str, base_url: &str, options: &Options) -> ExtractedContent {
    extract::extract_content(html, base_url, options)
}

/// Extracts an article from raw HTML bytes.
///
/// The charset comes from a byte-order mark or a `<meta>` declaration in
/// the first 1024 bytes, defaulting to UTF-8. Invalid sequences are
/// replaced with U+FFFD.
///
/// # Example
///
/// ```rust
/// use rs_article_extract::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><article>Caf\xE9</article></body></html>";
/// let result = extract_bytes(html, "https://example.com/");
/// assert!(result.main_text.contains("Café"));
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8], base_url: &str) -> ExtractedContent {
    extract_bytes_with_options(html, base_url, &Options::default())
}

/// [`extract_bytes`] with custom options.
#[must_use]
pub fn extract_bytes_with_options(html: &[u8], base_url: &str, options: &Options) -> ExtractedContent {
    let html = encoding::decode_html(html);
    extract_content_with_options(&html, base_url, options)
}
