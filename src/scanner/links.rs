//! Link scanning.

use crate::dom::{Document, Selector};
use crate::result::ExtractedLink;
use crate::text::reduce_to_text;
use crate::url_utils::BaseUrl;

/// Every anchor with a non-empty `href`, in source order.
///
/// Links are not deduplicated. `is_external` follows
/// [`BaseUrl::is_external`], a plain prefix test.
#[must_use]
pub fn extract_links(html: &str, base: &BaseUrl) -> Vec<ExtractedLink> {
    Document::new(html)
        .select(Selector::Tag("a"))
        .filter_map(|anchor| {
            let href = anchor.tag.attr("href")?;
            let url = base.resolve(&href);
            Some(ExtractedLink {
                is_external: base.is_external(&url),
                title: reduce_to_text(anchor.inner()),
                description: anchor.tag.attr("title").unwrap_or_default(),
                url,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_are_resolved_and_classified() {
        let base = BaseUrl::new("https://example.com");
        let html = r#"
            <a href="/about" title="About us"> About <em>this</em> site </a>
            <a href="https://www.example.com/x">WWW</a>
            <a href="https://other.org/">Other</a>
            <a href="">Empty</a>
            <a name="anchor">No href</a>
        "#;

        let links = extract_links(html, &base);
        assert_eq!(links.len(), 3);

        assert_eq!(links[0].url, "https://example.com/about");
        assert_eq!(links[0].title, "About this site");
        assert_eq!(links[0].description, "About us");
        assert!(!links[0].is_external);

        assert!(links[1].is_external);
        assert!(links[2].is_external);
    }

    #[test]
    fn duplicate_links_are_kept() {
        let base = BaseUrl::new("https://example.com/");
        let html = r#"<a href="/a">One</a><a href="/a">Two</a>"#;
        assert_eq!(extract_links(html, &base).len(), 2);
    }

    #[test]
    fn trailing_slash_in_unquoted_href_keeps_anchor_text() {
        let base = BaseUrl::new("https://example.com/");
        let links = extract_links("<p><a href=/about/>About us</a> and <a href=/team/>Team</a></p>", &base);
        let titles: Vec<(&str, &str)> = links.iter().map(|l| (l.url.as_str(), l.title.as_str())).collect();
        assert_eq!(
            titles,
            vec![("https://example.com/about/", "About us"), ("https://example.com/team/", "Team")]
        );
    }

    #[test]
    fn unclosed_anchors_end_at_the_next_anchor() {
        let base = BaseUrl::new("https://example.com/");
        let links = extract_links(r#"<a href="/1">first <a href="/2">second"#, &base);
        assert_eq!(links[0].title, "first");
        assert_eq!(links[1].title, "second");
    }

    #[test]
    fn unclosed_anchor_text_runs_to_end() {
        let base = BaseUrl::new("https://example.com/");
        let links = extract_links(r#"<p><a href="/x">dangling"#, &base);
        assert_eq!(links[0].title, "dangling");
    }
}
