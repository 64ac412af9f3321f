//! Compiled regex patterns for content extraction.
//!
//! All patterns are compiled once on first use using `LazyLock`.
//! Patterns are organized by the stage of the pipeline that uses them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Plain-Text Reduction Patterns
// =============================================================================

/// Matches `<script>` blocks including their body.
pub static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?(?:</script\s*>|$)").expect("SCRIPT_BLOCK regex")
});

/// Matches `<style>` blocks including their body.
pub static STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style\b[^>]*>.*?(?:</style\s*>|$)").expect("STYLE_BLOCK regex")
});

/// Matches HTML comments. An unterminated comment runs to the end of input.
pub static HTML_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?(?:-->|$)").expect("HTML_COMMENT regex")
});

/// Matches any remaining tag, doctype or processing instruction.
pub static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)</?[a-zA-Z!?][^>]*>").expect("ANY_TAG regex")
});

/// Matches `@media`/`@keyframes`-style at-rule blocks with one level of nesting.
pub static CSS_AT_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)@(?:media|keyframes|-webkit-keyframes|font-face|supports|import|charset)[^{;]*(?:;|\{(?:[^{}]*\{[^{}]*\})*[^{}]*\})",
    )
    .expect("CSS_AT_RULE regex")
});

/// Matches `/* ... */` comment blocks.
pub static CSS_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)/\*.*?\*/").expect("CSS_COMMENT regex")
});

/// Matches `{ ... }` rule bodies.
pub static CSS_RULE_BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{[^{}]*\}").expect("CSS_RULE_BODY regex")
});

/// Matches bare `.class` and `#id` tokens. Group 1 keeps the preceding whitespace.
pub static CSS_SELECTOR_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|\s)[.#][A-Za-z_][\w-]*").expect("CSS_SELECTOR_TOKEN regex")
});

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// Matches numeric character references (`&#39;`, `&#x27;`).
pub static NUMERIC_ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&#(?:[xX]([0-9a-fA-F]{1,6})|([0-9]{1,7}));").expect("NUMERIC_ENTITY regex")
});

// =============================================================================
// Media Patterns
// =============================================================================

/// YouTube `watch?v=` style URLs.
pub static YOUTUBE_WATCH_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[?&]v=([A-Za-z0-9_-]+)").expect("YOUTUBE_WATCH_ID regex")
});

/// YouTube short links (`youtu.be/<id>`).
pub static YOUTUBE_SHORT_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"youtu\.be/([A-Za-z0-9_-]+)").expect("YOUTUBE_SHORT_ID regex")
});

/// YouTube embed paths (`/embed/<id>`).
pub static YOUTUBE_EMBED_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/embed/([A-Za-z0-9_-]+)").expect("YOUTUBE_EMBED_ID regex")
});

/// Links that point at an audio file, ignoring query string and fragment.
pub static AUDIO_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(?:mp3|wav|m4a|aac|ogg|oga|opus)(?:[?#].*)?$").expect("AUDIO_FILE regex")
});

/// Leading integer of a dimension attribute (`"640"`, `"640px"`).
pub static LEADING_INTEGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{1,6})").expect("LEADING_INTEGER regex")
});

// =============================================================================
// Metadata Patterns
// =============================================================================

/// Conservative byline: "By"/"von" followed by two or three capitalized words.
pub static BYLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:[Bb]y|[Vv]on)\s+(\p{Lu}[\p{Ll}'-]+(?:\s+\p{Lu}[\p{Ll}'-]+){1,2})\b")
        .expect("BYLINE regex")
});

/// Leading "By"/"Von" prefix on selector-based author text.
pub static BYLINE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:written\s+by|posted\s+by|by|von)\s*:?\s+").expect("BYLINE_PREFIX regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_block_is_lazy() {
        let html = "<script>a</script>keep<script>b</script>";
        assert_eq!(SCRIPT_BLOCK.replace_all(html, ""), "keep");
    }

    #[test]
    fn css_selector_token_keeps_sentence_dots() {
        let cleaned = CSS_SELECTOR_TOKEN.replace_all("end. Next .hidden #nav", "$1");
        assert_eq!(cleaned, "end. Next  ");
    }

    #[test]
    fn audio_file_matches_known_extensions() {
        assert!(AUDIO_FILE.is_match("https://example.com/ep1.mp3"));
        assert!(AUDIO_FILE.is_match("/media/ep1.OPUS?dl=1"));
        assert!(!AUDIO_FILE.is_match("https://example.com/ep1.mp4"));
        assert!(!AUDIO_FILE.is_match("https://example.com/mp3/page"));
    }

    #[test]
    fn byline_requires_capitalized_name() {
        let caps = BYLINE.captures("Story by Jane Doe on Monday");
        assert_eq!(caps.and_then(|c| c.get(1)).map(|m| m.as_str()), Some("Jane Doe"));
        assert!(!BYLINE.is_match("written by someone else"));
    }

    #[test]
    fn whitespace_normalize_collapses_spaces() {
        let result = WHITESPACE_NORMALIZE.replace_all("hello \n\t world", " ");
        assert_eq!(result, "hello world");
    }
}
