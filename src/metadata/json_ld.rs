//! JSON-LD Metadata Parsing
//!
//! Extracts article-level structured data from Schema.org JSON-LD blocks.
//! Only objects typed as an article (`Article`, `NewsArticle`,
//! `BlogPosting`, ...) are collected; they may appear at the top level,
//! inside arrays, or nested under `@graph`.

use serde_json::{Map, Value};

use crate::dom::{inner_html, Document};
use crate::text::collapse_whitespace;

/// Nesting limit for the schema walk.
const MAX_DEPTH: usize = 16;

/// Article fields read from one JSON-LD object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonLdArticle {
    /// Lowercased `@type` values.
    pub types: Vec<String>,
    pub headline: Option<String>,
    pub description: Option<String>,
    /// Author names in declaration order.
    pub authors: Vec<String>,
    /// Raw `datePublished` value.
    pub date_published: Option<String>,
    pub section: Option<String>,
    pub keywords: Vec<String>,
}

/// Parses every JSON-LD block of `doc`. Blocks that are not valid JSON are
/// skipped.
#[must_use]
pub fn json_ld_values(doc: &Document<'_>) -> Vec<Value> {
    let html = doc.html();
    doc.tags("script")
        .filter(|tag| {
            tag.attr("type")
                .is_some_and(|t| t.to_ascii_lowercase().contains("ld+json"))
        })
        .filter_map(|tag| {
            let body = inner_html(html, &tag).trim();
            let body = body
                .trim_start_matches("<!--")
                .trim_start_matches("<![CDATA[")
                .trim_end_matches("-->")
                .trim_end_matches("]]>")
                .trim();
            if body.is_empty() {
                return None;
            }
            serde_json::from_str(body).ok()
        })
        .collect()
}

/// All article-typed objects in the document's JSON-LD, in source order.
#[must_use]
pub fn extract_articles(doc: &Document<'_>) -> Vec<JsonLdArticle> {
    let mut articles = Vec::new();
    for value in json_ld_values(doc) {
        collect_articles(&value, 0, &mut articles);
    }
    articles
}

fn collect_articles(value: &Value, depth: usize, articles: &mut Vec<JsonLdArticle>) {
    if depth > MAX_DEPTH {
        return;
    }

    match value {
        Value::Object(map) => {
            let types = schema_types(map);
            if is_article_type(&types) {
                articles.push(article_from_map(map, types));
            }
            for child in map.values() {
                collect_articles(child, depth + 1, articles);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_articles(item, depth + 1, articles);
            }
        }
        _ => {}
    }
}

fn article_from_map(map: &Map<String, Value>, types: Vec<String>) -> JsonLdArticle {
    JsonLdArticle {
        types,
        headline: single_string(map, "headline").or_else(|| single_string(map, "name")),
        description: single_string(map, "description"),
        authors: map.get("author").map(author_names).unwrap_or_default(),
        date_published: single_string(map, "datePublished"),
        section: single_string(map, "articleSection"),
        keywords: string_values(map, "keywords"),
    }
}

/// Lowercased `@type` values of a schema object.
fn schema_types(map: &Map<String, Value>) -> Vec<String> {
    match map.get("@type") {
        Some(Value::String(s)) => vec![s.to_lowercase()],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_lowercase)
            .collect(),
        _ => Vec::new(),
    }
}

fn is_article_type(types: &[String]) -> bool {
    types.iter().any(|t| {
        matches!(
            t.as_str(),
            "article"
                | "newsarticle"
                | "blogposting"
                | "reportagenewsarticle"
                | "analysisnewsarticle"
                | "techarticle"
                | "scholarlyarticle"
        )
    })
}

/// Names from an `author` value: a plain string, a single object, or an
/// array of either.
fn author_names(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => non_empty(s).into_iter().collect(),
        Value::Object(map) => person_name(map).into_iter().collect(),
        Value::Array(items) => items.iter().flat_map(author_names).collect(),
        _ => Vec::new(),
    }
}

/// `name`, or `givenName` + `familyName`.
fn person_name(map: &Map<String, Value>) -> Option<String> {
    if let Some(name) = map.get("name").and_then(Value::as_str).and_then(non_empty) {
        return Some(name);
    }

    let given = map.get("givenName").and_then(Value::as_str).unwrap_or("");
    let family = map.get("familyName").and_then(Value::as_str).unwrap_or("");
    non_empty(&format!("{given} {family}"))
}

fn single_string(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) => non_empty(s),
        Value::Array(items) => items.iter().filter_map(Value::as_str).find_map(non_empty),
        _ => None,
    }
}

/// String or array-of-strings values; a single string is split on commas.
fn string_values(map: &Map<String, Value>, key: &str) -> Vec<String> {
    match map.get(key) {
        Some(Value::String(s)) => s.split(',').filter_map(non_empty).collect(),
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).filter_map(non_empty).collect(),
        _ => Vec::new(),
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = collapse_whitespace(s);
    (!s.is_empty()).then_some(s)
}
