//! URL Utility Functions
//!
//! Resolution of candidate URLs found in markup against the page's base URL,
//! plus the prefix-based internal/external link test. Resolution never fails:
//! anything that cannot be resolved is returned trimmed, as found.

use url::Url;

/// Schemes passed through without resolution.
const OPAQUE_SCHEMES: &[&str] = &["data:", "javascript:", "mailto:", "tel:"];

/// The base URL of one extraction, parsed once.
#[derive(Debug, Clone)]
pub struct BaseUrl {
    raw: String,
    parsed: Option<Url>,
}

impl BaseUrl {
    /// Wraps a base URL. An unparseable base degrades resolution to
    /// best-effort instead of failing.
    #[must_use]
    pub fn new(base: &str) -> Self {
        let raw = base.trim().to_string();
        let parsed = Url::parse(&raw).ok();
        Self { raw, parsed }
    }

    /// The base URL as given (trimmed).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Scheme of the base URL, `https` when it has none.
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.parsed.as_ref().map_or("https", Url::scheme)
    }

    /// Resolves `candidate` to an absolute URL.
    ///
    /// - `http://`/`https://` URLs (any case) are returned trimmed.
    /// - `data:` and other opaque schemes are returned unchanged.
    /// - `//host/path` takes the base URL's scheme.
    /// - Everything else is joined onto the base; on failure the trimmed
    ///   candidate is returned.
    #[must_use]
    pub fn resolve(&self, candidate: &str) -> String {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            return String::new();
        }

        if starts_with_ignore_case(trimmed, "http://") || starts_with_ignore_case(trimmed, "https://") {
            return trimmed.to_string();
        }

        if OPAQUE_SCHEMES.iter().any(|s| starts_with_ignore_case(trimmed, s)) {
            return trimmed.to_string();
        }

        if trimmed.starts_with("//") {
            return format!("{}:{trimmed}", self.scheme());
        }

        match &self.parsed {
            Some(base) => base
                .join(trimmed)
                .map_or_else(|_| trimmed.to_string(), |resolved| resolved.to_string()),
            None => trimmed.to_string(),
        }
    }

    /// True when `url` does not start with the base URL string.
    ///
    /// This is a plain prefix test, not a host comparison: a `www.` or
    /// scheme mismatch counts as external.
    #[must_use]
    pub fn is_external(&self, url: &str) -> bool {
        !url.starts_with(&self.raw)
    }
}

/// Resolves `candidate` against `base`, see [`BaseUrl::resolve`].
///
/// # Examples
///
/// ```
/// use rs_article_extract::url_utils::resolve_url;
///
/// assert_eq!(resolve_url("../img/a.png", "https://example.com/news/story/"), "https://example.com/news/img/a.png");
/// assert_eq!(resolve_url("//cdn.example.com/a.js", "http://example.com/"), "http://cdn.example.com/a.js");
/// ```
#[must_use]
pub fn resolve_url(candidate: &str, base: &str) -> String {
    BaseUrl::new(base).resolve(candidate)
}

/// True for `data:` URIs.
#[must_use]
pub fn is_data_uri(url: &str) -> bool {
    starts_with_ignore_case(url.trim_start(), "data:")
}

/// Hostname of an absolute URL.
#[must_use]
pub fn extract_hostname(url_str: &str) -> Option<String> {
    Url::parse(url_str.trim())
        .ok()
        .and_then(|url| url.host_str().map(ToString::to_string))
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
}
