//! Core extraction sequence.
//!
//! One call isolates the article region, pulls the main text out of it
//! (retrying on the full page when the region is too thin), scans media and
//! links, resolves metadata and finally derives word count and reading
//! time. Every step degrades to an empty value instead of failing.

use tracing::{debug, warn};

use crate::dom::{Document, Selector};
use crate::isolate::isolate_article;
use crate::metadata::author::{resolve_author, AuthorSources};
use crate::metadata::dom_extraction::selector_author;
use crate::metadata::{self, detect_language, extract_articles, Sources};
use crate::options::Options;
use crate::result::{ContentMetadata, ExtractedContent};
use crate::scanner::{extract_audios, extract_images, extract_links, extract_videos};
use crate::text::{reduce_to_text, word_count};
use crate::url_utils::BaseUrl;

/// Containers tried in order for the main text.
pub const CONTENT_CONTAINERS: &[&str] = &[
    "article",
    ".article-content",
    ".post-content",
    ".entry-content",
    ".content",
    "main",
    ".main-content",
    "body",
];

/// Runs the full extraction for one page.
pub(crate) fn extract_content(html: &str, base_url: &str, options: &Options) -> ExtractedContent {
    let fallback_options;
    let options = match options.validate() {
        Ok(()) => options,
        Err(err) => {
            warn!(error = %err, "invalid extraction options, using defaults");
            fallback_options = Options::default();
            &fallback_options
        }
    };

    debug!(html_len = html.len(), base_url, "starting extraction");

    let base = BaseUrl::new(base_url);
    let page = Document::new(html);
    let region_html = isolate_article(html, options.isolation_window);
    let region = Document::new(region_html);
    debug!(region_len = region_html.len(), "article region isolated");

    let main_text = main_text_with_fallback(&region, &page, options);

    let images = extract_images(region_html, &page, &base, options.max_image_width);
    let videos = extract_videos(region_html, &base);
    let audios = extract_audios(region_html, &page, &base);
    let links = extract_links(region_html, &base);
    debug!(
        images = images.len(),
        videos = videos.len(),
        audios = audios.len(),
        links = links.len(),
        "media scanned"
    );

    let articles = extract_articles(&page);
    let page_meta = metadata::extract_metadata(&Sources {
        page: &page,
        region: &region,
        articles: &articles,
        base: &base,
    });

    let language = page_meta.language.or_else(|| {
        if options.detect_language && !main_text.is_empty() {
            let detected = detect_language(&main_text);
            debug!(language = ?detected, "language detected from text");
            detected
        } else {
            None
        }
    });

    let word_count = word_count(&main_text);
    let reading_time = reading_time(word_count, options.words_per_minute);

    let author = resolve_author(
        &AuthorSources {
            page: &page,
            articles: &articles,
            byline_scan_limit: options.byline_scan_limit,
        },
        options,
    )
    .or_else(|| {
        selector_author(&region, &options.author_blocklist)
            .or_else(|| selector_author(&page, &options.author_blocklist))
    });

    debug!(word_count, reading_time, has_author = author.is_some(), "extraction finished");

    ExtractedContent {
        title: page_meta.title.unwrap_or_else(|| options.default_title.clone()),
        description: page_meta.description.unwrap_or_default(),
        main_text,
        images,
        videos,
        audios,
        links,
        metadata: ContentMetadata {
            author,
            publish_date: page_meta.publish_date,
            category: page_meta.category,
            tags: page_meta.tags,
            language,
            site_name: page_meta.site_name,
            canonical_url: page_meta.canonical_url,
            word_count,
            reading_time,
        },
        reading_time,
        word_count,
    }
}

/// Reduced text of the first content container with any text, else of the
/// whole document.
#[must_use]
pub fn main_text(doc: &Document<'_>) -> String {
    for selector in CONTENT_CONTAINERS {
        let found = doc
            .select(Selector::parse(selector))
            .map(|el| el.text())
            .find(|text| !text.is_empty());
        if let Some(text) = found {
            debug!(container = selector, "main text container");
            return text;
        }
    }

    reduce_to_text(doc.html())
}

/// Main text from the region, retried on the full page when too short and
/// replaced by a raw reduction of the page when still shorter.
fn main_text_with_fallback(region: &Document<'_>, page: &Document<'_>, options: &Options) -> String {
    let mut text = main_text(region);

    if text.chars().count() < options.min_text_len {
        let full = main_text(page);
        debug!(region_chars = text.chars().count(), page_chars = full.chars().count(), "main text retry on full page");
        if full.chars().count() > text.chars().count() {
            text = full;
        }
    }

    if text.chars().count() < options.min_fallback_len {
        let raw = reduce_to_text(page.html());
        debug!(raw_chars = raw.chars().count(), "main text raw fallback");
        if raw.chars().count() > text.chars().count() {
            text = raw;
        }
    }

    text
}

/// Whole minutes at `words_per_minute`, never below one.
#[must_use]
pub fn reading_time(word_count: usize, words_per_minute: usize) -> usize {
    (word_count / words_per_minute.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG: &str = "This paragraph is long enough to clear every length threshold used by the extractor.";

    #[test]
    fn reading_time_has_floor() {
        assert_eq!(reading_time(0, 200), 1);
        assert_eq!(reading_time(399, 200), 1);
        assert_eq!(reading_time(400, 200), 2);
        assert_eq!(reading_time(10, 0), 10);
    }

    #[test]
    fn container_cascade_order() {
        let html = format!(r#"<body><div class="content">Generic</div><div class="post-content">{LONG}</div></body>"#);
        assert_eq!(main_text(&Document::new(&html)), LONG);
    }

    #[test]
    fn empty_containers_are_skipped() {
        let doc = Document::new("<article> </article><main><p>Main text</p></main>");
        assert_eq!(main_text(&doc), "Main text");
    }

    #[test]
    fn whole_input_when_no_container() {
        let doc = Document::new("<div>Loose <b>text</b></div>");
        assert_eq!(main_text(&doc), "Loose text");
    }

    #[test]
    fn short_region_retries_full_page() {
        let page_html = format!(r#"<body><div class="intro">Short.</div><div class="post-content">{LONG}</div></body>"#);
        let page = Document::new(&page_html);
        let region = Document::new("<p>Short.</p>");
        assert_eq!(main_text_with_fallback(&region, &page, &Options::default()), LONG);
    }

    #[test]
    fn invalid_options_fall_back_to_defaults() {
        let options = Options { words_per_minute: 0, ..Options::default() };
        let result = extract_content("<p>a b c</p>", "https://example.com/", &options);
        assert_eq!(result.reading_time, 1);
        assert_eq!(result.word_count, 3);
    }

    #[test]
    fn derived_metrics_are_mirrored_in_metadata() {
        let html = format!("<article><p>{LONG}</p></article>");
        let result = extract_content(&html, "https://example.com/", &Options::default());
        assert_eq!(result.metadata.word_count, result.word_count);
        assert_eq!(result.metadata.reading_time, result.reading_time);
        assert_eq!(result.title, "Untitled");
        assert_eq!(result.description, "");
    }
}
