//! Plain-text reduction of markup fragments.
//!
//! The stages run in a fixed order: script and style bodies must go before
//! tags are stripped, otherwise their contents would survive as text.

use std::borrow::Cow;

use crate::patterns::{
    ANY_TAG, CSS_AT_RULE, CSS_COMMENT, CSS_RULE_BODY, CSS_SELECTOR_TOKEN, HTML_COMMENT,
    NUMERIC_ENTITY, SCRIPT_BLOCK, STYLE_BLOCK, WHITESPACE_NORMALIZE,
};

/// Named entities decoded after tag stripping.
const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&ndash;", "\u{2013}"),
    ("&mdash;", "\u{2014}"),
    ("&lsquo;", "\u{2018}"),
    ("&rsquo;", "\u{2019}"),
    ("&ldquo;", "\u{201C}"),
    ("&rdquo;", "\u{201D}"),
    ("&bdquo;", "\u{201E}"),
    ("&hellip;", "\u{2026}"),
    ("&copy;", "\u{00A9}"),
    ("&reg;", "\u{00AE}"),
    ("&trade;", "\u{2122}"),
    ("&euro;", "\u{20AC}"),
    ("&pound;", "\u{00A3}"),
    ("&middot;", "\u{00B7}"),
    ("&bull;", "\u{2022}"),
    ("&auml;", "\u{00E4}"),
    ("&ouml;", "\u{00F6}"),
    ("&uuml;", "\u{00FC}"),
    ("&Auml;", "\u{00C4}"),
    ("&Ouml;", "\u{00D6}"),
    ("&Uuml;", "\u{00DC}"),
    ("&szlig;", "\u{00DF}"),
    ("&eacute;", "\u{00E9}"),
    ("&egrave;", "\u{00E8}"),
    ("&aacute;", "\u{00E1}"),
    ("&ccedil;", "\u{00E7}"),
];

/// Reduces an HTML fragment to readable, whitespace-normalized text.
///
/// # Example
///
/// ```
/// use rs_article_extract::text::reduce_to_text;
///
/// let html = "<script>var x=1;</script><p>Hello <b>World</b></p>";
/// assert_eq!(reduce_to_text(html), "Hello World");
/// ```
#[must_use]
pub fn reduce_to_text(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    let text = SCRIPT_BLOCK.replace_all(html, " ");
    let text = STYLE_BLOCK.replace_all(&text, " ");
    let text = HTML_COMMENT.replace_all(&text, " ");
    let text = ANY_TAG.replace_all(&text, " ");
    let text = strip_css_leakage(&text);
    let text = decode_entities(&text);

    collapse_whitespace(&text)
}

/// Removes CSS that leaked into text because it was not tag-delimited.
#[must_use]
pub fn strip_css_leakage(text: &str) -> Cow<'_, str> {
    if !text.contains(['{', '@', '.', '#', '/']) {
        return Cow::Borrowed(text);
    }

    let text = CSS_AT_RULE.replace_all(text, " ");
    let text = CSS_COMMENT.replace_all(&text, " ");
    let text = CSS_RULE_BODY.replace_all(&text, " ");
    let text = CSS_SELECTOR_TOKEN.replace_all(&text, "$1");
    Cow::Owned(text.into_owned())
}

/// Collapses whitespace runs to single spaces and trims.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}

/// Decodes common named entities and all numeric character references.
///
/// `&amp;` is decoded last so that `&amp;lt;` yields the literal `&lt;`.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut result = NUMERIC_ENTITY
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let code = caps
                .get(1)
                .and_then(|hex| u32::from_str_radix(hex.as_str(), 16).ok())
                .or_else(|| caps.get(2).and_then(|dec| dec.as_str().parse().ok()));
            code.and_then(char::from_u32)
                .map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned();

    for (entity, replacement) in NAMED_ENTITIES {
        if result.contains(entity) {
            result = result.replace(entity, replacement);
        }
    }

    result.replace("&amp;", "&")
}

/// Number of whitespace-delimited tokens.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
