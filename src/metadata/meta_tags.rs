//! HTML Meta Tag Extraction
//!
//! Field lookups over `<meta>`, `<link>` and `<html>` attributes. Each
//! lookup tries an ordered list of keys and returns the first non-empty
//! value, whitespace-collapsed.

use crate::dom::Document;
use crate::metadata::language::normalize_language;
use crate::text::collapse_whitespace;
use crate::url_utils::BaseUrl;

pub const TITLE_KEYS: &[&str] = &["og:title", "twitter:title"];
pub const DESCRIPTION_KEYS: &[&str] = &["og:description", "twitter:description", "description"];
pub const CATEGORY_KEYS: &[&str] = &["article:section", "category"];
pub const DATE_KEYS: &[&str] = &[
    "article:published_time",
    "og:published_time",
    "datePublished",
    "pubdate",
    "publish_date",
    "date",
    "dc.date",
    "dcterms.created",
];
pub const AUTHOR_KEYS: &[&str] = &["article:author", "author", "twitter:creator"];
pub const SITE_NAME_KEYS: &[&str] = &["og:site_name", "application-name"];

/// First non-empty meta content across `keys`, tried in order.
#[must_use]
pub fn first_meta(doc: &Document<'_>, keys: &[&'static str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| doc.meta_content(*key))
        .map(|value| collapse_whitespace(&value))
        .find(|value| !value.is_empty())
}

/// Every non-empty meta content across `keys`, in key order.
#[must_use]
pub fn all_metas(doc: &Document<'_>, keys: &[&'static str]) -> Vec<String> {
    keys.iter()
        .flat_map(|key| doc.meta_contents(*key))
        .map(|value| collapse_whitespace(&value))
        .filter(|value| !value.is_empty())
        .collect()
}

#[must_use]
pub fn meta_title(doc: &Document<'_>) -> Option<String> {
    first_meta(doc, TITLE_KEYS)
}

#[must_use]
pub fn meta_description(doc: &Document<'_>) -> Option<String> {
    first_meta(doc, DESCRIPTION_KEYS)
}

#[must_use]
pub fn meta_category(doc: &Document<'_>) -> Option<String> {
    first_meta(doc, CATEGORY_KEYS)
}

/// Raw publish-date string; parsing happens in [`crate::metadata::date`].
#[must_use]
pub fn meta_date(doc: &Document<'_>) -> Option<String> {
    first_meta(doc, DATE_KEYS)
}

/// Author candidates from meta tags, in cascade order. `twitter:creator`
/// handles lose their leading `@`.
#[must_use]
pub fn meta_authors(doc: &Document<'_>) -> Vec<String> {
    AUTHOR_KEYS
        .iter()
        .flat_map(|key| {
            doc.meta_contents(*key).map(move |value| {
                let value = collapse_whitespace(&value);
                if *key == "twitter:creator" {
                    value.trim_start_matches('@').to_string()
                } else {
                    value
                }
            })
        })
        .filter(|value| !value.is_empty())
        .collect()
}

/// All `article:tag` values, or else the comma-split `keywords` meta.
#[must_use]
pub fn meta_tags(doc: &Document<'_>) -> Vec<String> {
    let tags = all_metas(doc, &["article:tag"]);
    if !tags.is_empty() {
        return tags;
    }

    first_meta(doc, &["keywords"])
        .map(|keywords| split_list(&keywords))
        .unwrap_or_default()
}

/// Splits a comma-separated list, trimming entries and dropping empties.
#[must_use]
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Declared page language: `<html lang>`, then the `content-language`
/// meta, then `og:locale`; normalized to the primary subtag.
#[must_use]
pub fn declared_language(doc: &Document<'_>) -> Option<String> {
    let html_lang = doc.tags("html").next().and_then(|tag| tag.attr("lang"));

    html_lang
        .into_iter()
        .chain(first_meta(doc, &["content-language"]))
        .chain(first_meta(doc, &["og:locale"]))
        .find_map(|value| normalize_language(&value))
}

#[must_use]
pub fn site_name(doc: &Document<'_>) -> Option<String> {
    first_meta(doc, SITE_NAME_KEYS)
}

/// `link rel=canonical`, else `og:url`, resolved against `base`.
#[must_use]
pub fn canonical_url(doc: &Document<'_>, base: &BaseUrl) -> Option<String> {
    doc.link_href("canonical")
        .or_else(|| first_meta(doc, &["og:url"]))
        .map(|href| base.resolve(&href))
        .filter(|url| !url.is_empty())
}
