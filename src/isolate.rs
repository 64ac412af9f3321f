//! Article isolation: narrowing a full page down to its likely article region.
//!
//! Cascade, first match wins:
//! 1. the content of the first `<article>` element
//! 2. the content of the first `<main>` element
//! 3. a bounded window starting at the `<div` preceding a known container class
//! 4. the page unchanged

use tracing::trace;

use crate::dom::{inner_html, Document};

/// Class-name fragments that mark an article container.
pub const CONTAINER_HINTS: &[&str] = &[
    "article-content",
    "article-body",
    "articleBody",
    "entry-content",
    "post-content",
    "post-body",
    "story-body",
    "story-content",
    "content-body",
];

/// Returns the most likely article sub-region of `html`, or `html` itself.
///
/// `window` bounds, in characters, the region taken after a container hint.
#[must_use]
pub fn isolate_article(html: &str, window: usize) -> &str {
    if let Some(region) = first_element_content(html, "article") {
        trace!(len = region.len(), "isolated <article> region");
        return region;
    }

    if let Some(region) = first_element_content(html, "main") {
        trace!(len = region.len(), "isolated <main> region");
        return region;
    }

    if let Some(region) = container_window(html, window) {
        trace!(len = region.len(), "isolated container-hint window");
        return region;
    }

    html
}

/// Content of the first `name` element, when it has any non-blank content.
fn first_element_content<'a>(html: &'a str, name: &'a str) -> Option<&'a str> {
    let open = Document::new(html).tags(name).next()?;
    let inner = inner_html(html, &open);
    (!inner.trim().is_empty()).then_some(inner)
}

/// Window starting at the `<div` nearest before the first container hint.
fn container_window(html: &str, window: usize) -> Option<&str> {
    let hint_pos = CONTAINER_HINTS.iter().find_map(|hint| html.find(hint))?;

    let start = html[..hint_pos]
        .rfind("<div")
        .or_else(|| html[..hint_pos].rfind('<'))
        .unwrap_or(hint_pos);
    let end = html[start..]
        .char_indices()
        .nth(window)
        .map_or(html.len(), |(offset, _)| start + offset);

    Some(&html[start..end])
}
