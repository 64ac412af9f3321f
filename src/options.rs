//! Configuration options for content extraction.
//!
//! The `Options` struct carries every tunable threshold the heuristics use.
//! It is passed explicitly into the orchestrator; there is no process-wide
//! configuration.

use crate::error::{Error, Result};

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_article_extract::Options;
///
/// let options = Options {
///     max_image_width: 1200,
///     author_blocklist: vec!["staff".to_string()],
///     ..Options::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Upper bound for the srcset width selection.
    ///
    /// Default: `1600`
    pub max_image_width: u32,

    /// Maximum length, in characters, of the window taken after a
    /// container class hint during article isolation.
    ///
    /// Default: `200_000`
    pub isolation_window: usize,

    /// Main text shorter than this (in characters) triggers a retry
    /// against the full, non-isolated page.
    ///
    /// Default: `50`
    pub min_text_len: usize,

    /// Main text still shorter than this after the retry is replaced by a
    /// raw plain-text reduction of the whole page.
    ///
    /// Default: `20`
    pub min_fallback_len: usize,

    /// Reading speed used for `reading_time`.
    ///
    /// Default: `200`
    pub words_per_minute: usize,

    /// Number of leading characters of the page searched for a byline.
    ///
    /// Default: `10_000`
    pub byline_scan_limit: usize,

    /// Run statistical language detection when no language is declared.
    ///
    /// Default: `true`
    pub detect_language: bool,

    /// Extra lowercase tokens that disqualify an author candidate, in
    /// addition to the built-in organization blocklist.
    ///
    /// Default: empty
    pub author_blocklist: Vec<String>,

    /// Title used when no title source matches.
    ///
    /// Default: `"Untitled"`
    pub default_title: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_image_width: 1600,
            isolation_window: 200_000,
            min_text_len: 50,
            min_fallback_len: 20,
            words_per_minute: 200,
            byline_scan_limit: 10_000,
            detect_language: true,
            author_blocklist: Vec::new(),
            default_title: "Untitled".to_string(),
        }
    }
}

impl Options {
    /// Checks that the numeric thresholds are usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_image_width == 0 {
            return Err(Error::InvalidOption("max_image_width must be positive".to_string()));
        }
        if self.isolation_window == 0 {
            return Err(Error::InvalidOption("isolation_window must be positive".to_string()));
        }
        if self.words_per_minute == 0 {
            return Err(Error::InvalidOption("words_per_minute must be positive".to_string()));
        }
        Ok(())
    }
}
