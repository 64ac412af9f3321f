//! Metadata extraction module.
//!
//! Every field is resolved by an ordered list of extractor functions over
//! a shared [`Sources`] context; the first non-empty result wins. Head
//! sources (meta tags, JSON-LD, `<title>`, `<html lang>`) are read from the
//! full page, body sources (`<h1>`, `<time>`) from the isolated region
//! first and the full page second.

pub mod author;
pub mod date;
pub mod dom_extraction;
pub mod json_ld;
pub mod language;
pub mod meta_tags;

use chrono::{DateTime, Utc};

use crate::dom::Document;
use crate::url_utils::BaseUrl;

pub use author::{is_plausible_author, smart_author};
pub use date::parse_date;
pub use json_ld::{extract_articles, JsonLdArticle};
pub use language::{detect_language, normalize_language};

/// Inputs shared by all metadata cascades of one extraction.
#[derive(Debug, Clone, Copy)]
pub struct Sources<'a> {
    /// The full page.
    pub page: &'a Document<'a>,
    /// The isolated article region.
    pub region: &'a Document<'a>,
    /// Article objects from the page's JSON-LD.
    pub articles: &'a [JsonLdArticle],
    pub base: &'a BaseUrl,
}

type Extractor<T> = fn(&Sources<'_>) -> Option<T>;

/// Page metadata before text-derived fields are added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub publish_date: Option<DateTime<Utc>>,
    /// Declared language only; detection happens after text extraction.
    pub language: Option<String>,
    pub site_name: Option<String>,
    pub canonical_url: Option<String>,
}

const TITLE: &[(&str, Extractor<String>)] = &[
    ("meta", meta_title),
    ("json-ld", json_ld_headline),
    ("title", title_element),
    ("h1", first_heading),
];

const DESCRIPTION: &[(&str, Extractor<String>)] = &[
    ("meta", meta_description),
    ("json-ld", json_ld_description),
];

const CATEGORY: &[(&str, Extractor<String>)] = &[
    ("meta", meta_category),
    ("json-ld", json_ld_section),
];

const TAGS: &[(&str, Extractor<Vec<String>>)] = &[("meta", meta_tag_list), ("json-ld", json_ld_keywords)];

const PUBLISH_DATE: &[(&str, Extractor<DateTime<Utc>>)] = &[
    ("meta", meta_date),
    ("json-ld", json_ld_date),
    ("time", time_element_date),
];

fn meta_title(s: &Sources<'_>) -> Option<String> {
    meta_tags::meta_title(s.page)
}

fn json_ld_headline(s: &Sources<'_>) -> Option<String> {
    s.articles.iter().find_map(|a| a.headline.clone())
}

fn title_element(s: &Sources<'_>) -> Option<String> {
    dom_extraction::title_element(s.page)
}

fn first_heading(s: &Sources<'_>) -> Option<String> {
    dom_extraction::first_heading(s.region).or_else(|| dom_extraction::first_heading(s.page))
}

fn meta_description(s: &Sources<'_>) -> Option<String> {
    meta_tags::meta_description(s.page)
}

fn json_ld_description(s: &Sources<'_>) -> Option<String> {
    s.articles.iter().find_map(|a| a.description.clone())
}

fn meta_category(s: &Sources<'_>) -> Option<String> {
    meta_tags::meta_category(s.page)
}

fn json_ld_section(s: &Sources<'_>) -> Option<String> {
    s.articles.iter().find_map(|a| a.section.clone())
}

fn meta_tag_list(s: &Sources<'_>) -> Option<Vec<String>> {
    non_empty(meta_tags::meta_tags(s.page))
}

fn json_ld_keywords(s: &Sources<'_>) -> Option<Vec<String>> {
    s.articles.iter().map(|a| a.keywords.clone()).find_map(non_empty)
}

fn meta_date(s: &Sources<'_>) -> Option<DateTime<Utc>> {
    meta_tags::meta_date(s.page).as_deref().and_then(parse_date)
}

fn json_ld_date(s: &Sources<'_>) -> Option<DateTime<Utc>> {
    s.articles
        .iter()
        .filter_map(|a| a.date_published.as_deref())
        .find_map(parse_date)
}

fn time_element_date(s: &Sources<'_>) -> Option<DateTime<Utc>> {
    dom_extraction::time_datetime(s.region)
        .or_else(|| dom_extraction::time_datetime(s.page))
        .as_deref()
        .and_then(parse_date)
}

/// Runs `cascade` in order and returns the first hit.
pub fn first_match<T>(field: &str, cascade: &[(&str, Extractor<T>)], sources: &Sources<'_>) -> Option<T> {
    cascade.iter().find_map(|(stage, extract)| {
        let value = extract(sources)?;
        tracing::trace!(field, stage, "metadata field resolved");
        Some(value)
    })
}

/// Extracts every head and body metadata field.
#[must_use]
pub fn extract_metadata(sources: &Sources<'_>) -> PageMetadata {
    PageMetadata {
        title: first_match("title", TITLE, sources),
        description: first_match("description", DESCRIPTION, sources),
        category: first_match("category", CATEGORY, sources),
        tags: first_match("tags", TAGS, sources).map(dedup_tags).unwrap_or_default(),
        publish_date: first_match("publish_date", PUBLISH_DATE, sources),
        language: meta_tags::declared_language(sources.page),
        site_name: meta_tags::site_name(sources.page),
        canonical_url: meta_tags::canonical_url(sources.page, sources.base),
    }
}

fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    (!values.is_empty()).then_some(values)
}

/// Trims, drops empties and removes repeats, keeping first occurrences.
fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty() && seen.insert(t.clone()))
        .collect()
}
