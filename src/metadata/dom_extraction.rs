//! Metadata read from body markup rather than head tags.

use crate::dom::{inner_html_within, Document, Selector, Tag, TagIter};
use crate::metadata::author::is_plausible_author;
use crate::patterns::BYLINE_PREFIX;
use crate::text::{collapse_whitespace, reduce_to_text};

/// `<title>` text.
#[must_use]
pub fn title_element(doc: &Document<'_>) -> Option<String> {
    doc.select_first("title")
        .map(|el| el.text())
        .filter(|t| !t.is_empty())
}

/// Text of the first non-empty `<h1>`.
#[must_use]
pub fn first_heading(doc: &Document<'_>) -> Option<String> {
    doc.select(Selector::Tag("h1"))
        .map(|el| el.text())
        .find(|t| !t.is_empty())
}

/// `datetime` of the first `<time>` element carrying one.
#[must_use]
pub fn time_datetime(doc: &Document<'_>) -> Option<String> {
    doc.tags("time")
        .filter_map(|tag| tag.attr("datetime"))
        .map(|v| collapse_whitespace(&v))
        .find(|v| !v.is_empty())
}

/// Bytes of an author element's content considered for its name.
const AUTHOR_SPAN_LIMIT: usize = 4_096;

/// Author from byline markup: `rel=author` links, `itemprop=author`, or
/// elements whose class mentions "author" or "byline".
///
/// A leading "By"/"Von" is stripped and the result must still look like
/// a person's name.
#[must_use]
pub fn selector_author(doc: &Document<'_>, extra_blocklist: &[String]) -> Option<String> {
    let html = doc.html();
    TagIter::new(html)
        .filter(|tag| !tag.closing && is_author_marker(tag))
        .map(|tag| inner_html_within(html, &tag, AUTHOR_SPAN_LIMIT))
        .map(reduce_to_text)
        .map(|text| BYLINE_PREFIX.replace(&text, "").trim().to_string())
        .find(|name| is_plausible_author(name, extra_blocklist))
}

fn is_author_marker(tag: &Tag<'_>) -> bool {
    if tag.attr("rel").is_some_and(|rel| rel.eq_ignore_ascii_case("author")) {
        return true;
    }
    if tag.attr("itemprop").is_some_and(|prop| prop.eq_ignore_ascii_case("author")) {
        return true;
    }
    tag.attr("class").is_some_and(|class| {
        class.split_whitespace().any(|token| {
            let token = token.to_ascii_lowercase();
            token.contains("author") || token.contains("byline")
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_heading() {
        let doc = Document::new("<title> Page &amp; Title </title><h1></h1><h1>Head <em>line</em></h1>");
        assert_eq!(title_element(&doc).as_deref(), Some("Page & Title"));
        assert_eq!(first_heading(&doc).as_deref(), Some("Head line"));
    }

    #[test]
    fn time_element_datetime() {
        let doc = Document::new(r#"<time>Monday</time><time datetime="2024-05-01T09:00:00Z">May 1</time>"#);
        assert_eq!(time_datetime(&doc).as_deref(), Some("2024-05-01T09:00:00Z"));
    }

    #[test]
    fn author_from_byline_class() {
        let doc = Document::new(r#"<div class="post-byline">By Jane Doe</div>"#);
        assert_eq!(selector_author(&doc, &[]).as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn author_from_rel_and_itemprop() {
        let doc = Document::new(r#"<a rel="author" href="/u/ann">Ann Lee</a>"#);
        assert_eq!(selector_author(&doc, &[]).as_deref(), Some("Ann Lee"));

        let doc = Document::new(r#"<span itemprop="author">Bo Chen</span>"#);
        assert_eq!(selector_author(&doc, &[]).as_deref(), Some("Bo Chen"));
    }

    #[test]
    fn implausible_markup_is_skipped() {
        let doc = Document::new(
            r#"<div class="author-box">Posted by the News Team on 2024-01-01</div>
               <span class="author">Cy Dorn</span>"#,
        );
        assert_eq!(selector_author(&doc, &[]).as_deref(), Some("Cy Dorn"));
    }
}
