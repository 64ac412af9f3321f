//! Author resolution.
//!
//! Candidates come from three stages tried in order: JSON-LD article
//! authors, author meta tags, and a byline pattern over the start of the
//! page text. Every candidate must pass [`is_plausible_author`]; a stage
//! whose candidates all fail hands over to the next one.

use crate::dom::{floor_char_boundary, Document};
use crate::metadata::json_ld::{extract_articles, JsonLdArticle};
use crate::metadata::meta_tags::meta_authors;
use crate::options::Options;
use crate::patterns::BYLINE;
use crate::text::{collapse_whitespace, reduce_to_text};

/// Tokens that mark a name as an organization rather than a person.
pub const ORGANIZATION_TOKENS: &[&str] = &[
    "verlag",
    "media",
    "news",
    "press",
    "zeitung",
    "agency",
    "redaktion",
    "gmbh",
    "staff",
    "editorial",
];

const MIN_LEN: usize = 2;
const MAX_LEN: usize = 60;
const MAX_WORDS: usize = 4;

/// Inputs shared by the author stages.
#[derive(Debug, Clone, Copy)]
pub struct AuthorSources<'a> {
    pub page: &'a Document<'a>,
    pub articles: &'a [JsonLdArticle],
    pub byline_scan_limit: usize,
}

type Stage = fn(&AuthorSources<'_>) -> Vec<String>;

const STAGES: &[(&str, Stage)] = &[
    ("json-ld", json_ld_authors),
    ("meta", meta_stage),
    ("byline", byline_stage),
];

/// Person-name check applied to every author candidate.
///
/// `extra_blocklist` extends [`ORGANIZATION_TOKENS`]; matching is a
/// case-insensitive substring test.
///
/// # Examples
///
/// ```
/// use rs_article_extract::metadata::author::is_plausible_author;
///
/// assert!(is_plausible_author("Jane Doe", &[]));
/// assert!(!is_plausible_author("Example Media Group", &[]));
/// assert!(!is_plausible_author("@janedoe", &[]));
/// ```
#[must_use]
pub fn is_plausible_author(name: &str, extra_blocklist: &[String]) -> bool {
    let name = name.trim();
    let len = name.chars().count();
    if !(MIN_LEN..=MAX_LEN).contains(&len) {
        return false;
    }

    let lower = name.to_lowercase();
    if lower.contains('@') || lower.contains("http") {
        return false;
    }

    let words = name.split_whitespace().count();
    if !(1..=MAX_WORDS).contains(&words) {
        return false;
    }

    if !name
        .chars()
        .all(|c| c.is_alphabetic() || c.is_whitespace() || c == '-' || c == '\'')
    {
        return false;
    }

    let blocked = ORGANIZATION_TOKENS
        .iter()
        .map(|t| (*t).to_string())
        .chain(extra_blocklist.iter().map(|t| t.to_lowercase()))
        .any(|token| !token.is_empty() && lower.contains(&token));

    !blocked
}

/// Every "By Jane Doe" / "von Max Mustermann" name in the first `limit`
/// bytes of the page, reduced to text first, in source order.
#[must_use]
pub fn byline_authors(html: &str, limit: usize) -> Vec<String> {
    let text = reduce_to_text(&html[..floor_char_boundary(html, limit)]);
    BYLINE
        .captures_iter(&text)
        .filter_map(|caps| caps.get(1))
        .map(|m| collapse_whitespace(m.as_str()))
        .collect()
}

/// Runs the author stages over a prepared page.
#[must_use]
pub fn resolve_author(sources: &AuthorSources<'_>, options: &Options) -> Option<String> {
    for (stage, extract) in STAGES {
        let found = extract(sources)
            .into_iter()
            .find(|candidate| is_plausible_author(candidate, &options.author_blocklist));
        if let Some(author) = found {
            tracing::debug!(stage, author = %author, "author resolved");
            return Some(author);
        }
    }

    tracing::trace!("no plausible author");
    None
}

/// Author cascade over a full HTML page.
///
/// # Examples
///
/// ```
/// use rs_article_extract::metadata::author::smart_author;
/// use rs_article_extract::Options;
///
/// let html = r#"<meta name="author" content="Jane Doe"><p>Text</p>"#;
/// assert_eq!(smart_author(html, &Options::default()).as_deref(), Some("Jane Doe"));
/// ```
#[must_use]
pub fn smart_author(html: &str, options: &Options) -> Option<String> {
    let page = Document::new(html);
    let articles = extract_articles(&page);
    resolve_author(
        &AuthorSources {
            page: &page,
            articles: &articles,
            byline_scan_limit: options.byline_scan_limit,
        },
        options,
    )
}

fn json_ld_authors(sources: &AuthorSources<'_>) -> Vec<String> {
    sources
        .articles
        .iter()
        .flat_map(|article| article.authors.iter().cloned())
        .collect()
}

fn meta_stage(sources: &AuthorSources<'_>) -> Vec<String> {
    meta_authors(sources.page)
}

fn byline_stage(sources: &AuthorSources<'_>) -> Vec<String> {
    byline_authors(sources.page.html(), sources.byline_scan_limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(html: &str) -> Option<String> {
        smart_author(html, &Options::default())
    }

    #[test]
    fn plausibility_rules() {
        assert!(is_plausible_author("Jane Doe", &[]));
        assert!(is_plausible_author("Jean-Luc O'Neil", &[]));
        assert!(is_plausible_author("Jürgen Müller", &[]));
        assert!(!is_plausible_author("J", &[]));
        assert!(!is_plausible_author("jane@example.com", &[]));
        assert!(!is_plausible_author("https example", &[]));
        assert!(!is_plausible_author("One Two Three Four Five", &[]));
        assert!(!is_plausible_author("Jane Doe 2", &[]));
        assert!(!is_plausible_author("Süddeutsche Zeitung", &[]));
        assert!(!is_plausible_author("Redaktion", &[]));
        assert!(!is_plausible_author(&"a".repeat(61), &[]));
    }

    #[test]
    fn extra_blocklist_applies() {
        let extra = vec!["Desk".to_string()];
        assert!(!is_plausible_author("Sports Desk", &extra));
        assert!(is_plausible_author("Sports Desk", &[]));
    }

    #[test]
    fn json_ld_author_wins() {
        let html = r#"
            <script type="application/ld+json">
            {"@type":"NewsArticle","author":{"name":"Jane Doe"}}
            </script>
            <meta name="author" content="Someone Else">"#;
        assert_eq!(author(html).as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn organization_author_falls_through_to_meta() {
        let html = r#"
            <script type="application/ld+json">
            {"@type":"NewsArticle","author":{"name":"Example Media Group"}}
            </script>
            <meta name="author" content="John Smith">"#;
        assert_eq!(author(html).as_deref(), Some("John Smith"));
    }

    #[test]
    fn second_json_ld_author_is_tried() {
        let html = r#"<script type="application/ld+json">
            {"@type":"Article","author":[{"name":"Daily News Desk"},{"name":"Ann Lee"}]}
            </script>"#;
        assert_eq!(author(html).as_deref(), Some("Ann Lee"));
    }

    #[test]
    fn twitter_creator_is_a_meta_source() {
        let html = r#"<meta name="twitter:creator" content="@JaneDoe">"#;
        assert_eq!(author(html).as_deref(), Some("JaneDoe"));
    }

    #[test]
    fn byline_is_last_resort() {
        let html = "<div class=meta><span>By Maria Garcia Lopez</span></div><p>Body text.</p>";
        assert_eq!(author(html).as_deref(), Some("Maria Garcia Lopez"));

        let html = "<p>Ein Bericht von Max Mustermann aus Berlin.</p>";
        assert_eq!(author(html).as_deref(), Some("Max Mustermann"));
    }

    #[test]
    fn byline_respects_scan_limit() {
        let html = format!("{}<p>By Jane Doe</p>", "x".repeat(200));
        assert!(byline_authors(&html, 100).is_empty());
        assert_eq!(byline_authors(&html, 1000), vec!["Jane Doe"]);
    }

    #[test]
    fn byline_cut_respects_char_boundary() {
        let html = "ää By Jane Doe";
        assert!(byline_authors(html, 1).is_empty());
    }

    #[test]
    fn later_byline_is_tried_after_an_implausible_one() {
        let html = "<p>Photo by Press Association.</p><p>Story by Maria Lopez.</p><p>Body text.</p>";
        assert_eq!(
            byline_authors(html, 10_000),
            vec!["Press Association", "Maria Lopez"]
        );
        assert_eq!(author(html).as_deref(), Some("Maria Lopez"));
    }

    #[test]
    fn nothing_plausible_yields_none() {
        let html = r#"<meta name="author" content="Press Office">"#;
        assert_eq!(author(html), None);
    }
}
