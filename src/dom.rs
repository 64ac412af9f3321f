//! Lightweight tag scanning over raw HTML.
//!
//! Nothing here builds a tree. A [`TagIter`] walks the source finding one
//! tag at a time ("find tag, read attributes, move cursor"), [`inner_html`]
//! pairs an opening tag with its matching close by counting same-name
//! nesting, and [`Document`] layers a few query helpers on top. The
//! extraction heuristics are tuned against this raw-text behaviour, so
//! malformed markup degrades to partial matches instead of a repaired tree.

use crate::text::decode_entities;

/// Elements that cannot contain themselves; a second opening tag ends
/// the first one.
const NON_NESTING: &[&str] = &["a"];

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// One tag as it appears in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    /// Tag name exactly as written.
    pub name: &'a str,
    /// The full tag text, from `<` through `>`.
    pub raw: &'a str,
    /// Byte offset of `<`.
    pub start: usize,
    /// Byte offset just past `>`.
    pub end: usize,
    /// True for `</name>`.
    pub closing: bool,
}

impl<'a> Tag<'a> {
    /// Case-insensitive tag name comparison.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Attribute value, see [`get_attribute`].
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<String> {
        get_attribute(self.raw, name)
    }

    /// True when the whitespace-separated `class` attribute contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|value| value.split_whitespace().any(|c| c == class))
    }

    /// True for void elements and explicit `<x ... />` tags.
    ///
    /// A slash that ends an unquoted attribute value (`<a href=/about/>`)
    /// belongs to the value and does not close the tag.
    #[must_use]
    pub fn is_self_closing(&self) -> bool {
        VOID_ELEMENTS.iter().any(|v| self.is(v)) || self.has_closing_slash()
    }

    fn has_closing_slash(&self) -> bool {
        let Some(before) = self.raw.strip_suffix("/>") else {
            return false;
        };
        match before.chars().last() {
            Some('"' | '\'') => true,
            Some(c) if c.is_whitespace() => true,
            _ => {
                let token = before.rsplit(char::is_whitespace).next().unwrap_or(before);
                match token.split_once('=') {
                    Some((_, value)) => value.starts_with(['"', '\'']),
                    None => true,
                }
            }
        }
    }
}

/// Iterator over every tag in a string, in source order.
///
/// Comments are skipped whole; doctypes and stray `<` characters are
/// stepped over. Quoted attribute values may contain `>`.
#[derive(Debug, Clone)]
pub struct TagIter<'a> {
    html: &'a str,
    pos: usize,
}

impl<'a> TagIter<'a> {
    #[must_use]
    pub fn new(html: &'a str) -> Self {
        Self { html, pos: 0 }
    }

    /// Starts scanning at byte offset `pos`.
    #[must_use]
    pub fn from_offset(html: &'a str, pos: usize) -> Self {
        Self { html, pos: pos.min(html.len()) }
    }
}

impl<'a> Iterator for TagIter<'a> {
    type Item = Tag<'a>;

    fn next(&mut self) -> Option<Tag<'a>> {
        let html = self.html;
        let bytes = html.as_bytes();

        loop {
            let start = self.pos + html.get(self.pos..)?.find('<')?;

            if html[start..].starts_with("<!--") {
                self.pos = html[start + 4..]
                    .find("-->")
                    .map_or(html.len(), |end| start + 4 + end + 3);
                continue;
            }

            let mut i = start + 1;
            let closing = bytes.get(i) == Some(&b'/');
            if closing {
                i += 1;
            }

            let name_start = i;
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || matches!(bytes[i], b'-' | b':' | b'_')) {
                i += 1;
            }

            if i == name_start || !bytes[name_start].is_ascii_alphabetic() {
                self.pos = start + 1;
                continue;
            }

            let end = find_tag_end(html, i);
            self.pos = end;

            return Some(Tag {
                name: &html[name_start..i],
                raw: &html[start..end],
                start,
                end,
                closing,
            });
        }
    }
}

/// Finds the byte offset just past the `>` closing a tag whose attributes
/// start at `from`. Quotes are honoured only where they open an attribute
/// value; an unterminated quote falls back to the first `>`.
fn find_tag_end(html: &str, from: usize) -> usize {
    let bytes = html.as_bytes();
    let mut quote: Option<u8> = None;
    let mut after_eq = false;
    let mut j = from;

    while j < bytes.len() {
        let b = bytes[j];
        match quote {
            Some(q) => {
                if b == q {
                    quote = None;
                }
            }
            None => match b {
                b'>' => return j + 1,
                b'=' => {
                    after_eq = true;
                    j += 1;
                    continue;
                }
                b'"' | b'\'' if after_eq => quote = Some(b),
                _ if b.is_ascii_whitespace() => {
                    j += 1;
                    continue;
                }
                _ => {}
            },
        }
        after_eq = false;
        j += 1;
    }

    html[from..].find('>').map_or(html.len(), |e| from + e + 1)
}

/// Returns the content between `open` and its matching close tag.
///
/// Same-name tags nest; an element that is never closed runs to the end
/// of the input. Anchors do not nest, so an unclosed `<a>` ends at the
/// next `<a>`. Void and self-closing tags have no content.
#[must_use]
pub fn inner_html<'a>(html: &'a str, open: &Tag<'_>) -> &'a str {
    inner_html_within(html, open, usize::MAX)
}

/// [`inner_html`] with the close-tag search limited to `limit` bytes after
/// the opening tag. An element not closed within the limit yields the
/// content up to it.
#[must_use]
pub fn inner_html_within<'a>(html: &'a str, open: &Tag<'_>, limit: usize) -> &'a str {
    if open.is_self_closing() || open.end > html.len() {
        return "";
    }

    let scope = &html[..floor_char_boundary(html, open.end.saturating_add(limit))];
    let nests = !NON_NESTING.iter().any(|n| open.is(n));

    let mut depth = 1usize;
    for tag in TagIter::from_offset(scope, open.end) {
        if !tag.is(open.name) {
            continue;
        }
        if tag.closing {
            depth -= 1;
            if depth == 0 {
                return &scope[open.end..tag.start];
            }
        } else if !nests {
            return &scope[open.end..tag.start];
        } else if !tag.is_self_closing() {
            depth += 1;
        }
    }

    &scope[open.end..]
}

/// Largest char boundary of `s` not above `index`.
#[must_use]
pub fn floor_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// How an attribute value was quoted in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    Double,
    Single,
    Unquoted,
}

/// One `name=value` pair read from a raw tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub quote: QuoteStyle,
}

/// Tokenizes the attributes of a raw tag fragment.
///
/// Accepts a full tag (`<img src=x>`) or just its attribute list. Bare
/// attributes without `=` are skipped.
#[must_use]
pub fn attributes(raw: &str) -> Vec<Attribute<'_>> {
    let bytes = raw.as_bytes();
    let len = bytes.len();
    let mut attrs = Vec::new();
    let mut i = 0;

    if bytes.first() == Some(&b'<') {
        i = 1;
        while i < len && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' {
            i += 1;
        }
    }

    while i < len {
        while i < len && (bytes[i].is_ascii_whitespace() || bytes[i] == b'/') {
            i += 1;
        }
        if i >= len || bytes[i] == b'>' {
            break;
        }

        let name_start = i;
        while i < len && !bytes[i].is_ascii_whitespace() && !matches!(bytes[i], b'=' | b'>' | b'/') {
            i += 1;
        }
        let name = &raw[name_start..i];

        while i < len && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= len || bytes[i] != b'=' {
            if i == name_start {
                i += 1;
            }
            continue;
        }
        i += 1;
        while i < len && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= len {
            break;
        }

        let (value, quote) = match bytes[i] {
            q @ (b'"' | b'\'') => {
                let value_start = i + 1;
                let value_end = raw[value_start..].find(q as char).map_or(len, |e| value_start + e);
                i = (value_end + 1).min(len);
                let style = if q == b'"' { QuoteStyle::Double } else { QuoteStyle::Single };
                (&raw[value_start..value_end], style)
            }
            _ => {
                let value_start = i;
                while i < len && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' {
                    i += 1;
                }
                (&raw[value_start..i], QuoteStyle::Unquoted)
            }
        };

        if !name.is_empty() {
            attrs.push(Attribute { name, value, quote });
        }
    }

    attrs
}

/// Extracts a named attribute's value from a raw tag fragment.
///
/// Double-quoted values are preferred over single-quoted ones, which are
/// preferred over unquoted ones; the first non-empty value wins. The name
/// comparison is case-insensitive and exact, so `src` never matches
/// `data-src` or `srcset`. Entities in the value are decoded.
#[must_use]
pub fn get_attribute(raw: &str, name: &str) -> Option<String> {
    let attrs = attributes(raw);

    [QuoteStyle::Double, QuoteStyle::Single, QuoteStyle::Unquoted]
        .into_iter()
        .find_map(|style| {
            attrs
                .iter()
                .filter(|a| a.quote == style && a.name.eq_ignore_ascii_case(name))
                .map(|a| a.value.trim())
                .find(|v| !v.is_empty())
        })
        .map(decode_entities)
}

/// Parses a dimension attribute such as `"640"` or `"640px"`.
#[must_use]
pub fn parse_dimension(value: &str) -> Option<u32> {
    crate::patterns::LEADING_INTEGER
        .captures(value)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// A minimal selector: a tag name, `.class` or `#id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'s> {
    Tag(&'s str),
    Class(&'s str),
    Id(&'s str),
}

impl<'s> Selector<'s> {
    /// Parses `name`, `.class` or `#id`.
    #[must_use]
    pub fn parse(s: &'s str) -> Self {
        if let Some(class) = s.strip_prefix('.') {
            Self::Class(class)
        } else if let Some(id) = s.strip_prefix('#') {
            Self::Id(id)
        } else {
            Self::Tag(s)
        }
    }

    #[must_use]
    pub fn matches(&self, tag: &Tag<'_>) -> bool {
        if tag.closing {
            return false;
        }
        match self {
            Self::Tag(name) => tag.is(name),
            Self::Class(class) => tag.has_class(class),
            Self::Id(id) => tag.attr("id").is_some_and(|v| v == *id),
        }
    }
}

/// An element located by a query. Its content is only looked up on
/// request, so filtering on the opening tag stays cheap.
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    pub tag: Tag<'a>,
    html: &'a str,
}

impl<'a> Element<'a> {
    /// Raw content, see [`inner_html`].
    #[must_use]
    pub fn inner(&self) -> &'a str {
        inner_html(self.html, &self.tag)
    }

    /// Raw content, see [`inner_html_within`].
    #[must_use]
    pub fn inner_within(&self, limit: usize) -> &'a str {
        inner_html_within(self.html, &self.tag, limit)
    }

    /// Reduced plain text of the element's content.
    #[must_use]
    pub fn text(&self) -> String {
        crate::text::reduce_to_text(self.inner())
    }
}

/// Queryable view over a raw HTML string.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    html: &'a str,
}

impl<'a> Document<'a> {
    #[must_use]
    pub fn new(html: &'a str) -> Self {
        Self { html }
    }

    /// The underlying source.
    #[must_use]
    pub fn html(&self) -> &'a str {
        self.html
    }

    /// All opening tags with the given name, in source order.
    pub fn tags(&self, name: &'a str) -> impl Iterator<Item = Tag<'a>> + 'a {
        TagIter::new(self.html).filter(move |t| !t.closing && t.is(name))
    }

    /// Every element matching `selector`, in source order.
    pub fn select(&self, selector: Selector<'a>) -> impl Iterator<Item = Element<'a>> + 'a {
        let html = self.html;
        TagIter::new(html)
            .filter(move |t| selector.matches(t))
            .map(move |tag| Element { tag, html })
    }

    /// First element matching `selector`.
    #[must_use]
    pub fn select_first(&self, selector: &'a str) -> Option<Element<'a>> {
        self.select(Selector::parse(selector)).next()
    }

    /// Content values of `<meta>` tags whose `name`, `property`, `itemprop`
    /// or `http-equiv` equals `key` (case-insensitive), in source order.
    pub fn meta_contents(&self, key: &'a str) -> impl Iterator<Item = String> + 'a {
        self.tags("meta").filter_map(move |tag| {
            let matches_key = ["property", "name", "itemprop", "http-equiv"]
                .iter()
                .any(|attr| tag.attr(attr).is_some_and(|v| v.eq_ignore_ascii_case(key)));
            if matches_key {
                tag.attr("content")
            } else {
                None
            }
        })
    }

    /// First non-empty meta content for `key`.
    #[must_use]
    pub fn meta_content(&self, key: &'a str) -> Option<String> {
        self.meta_contents(key).next()
    }

    /// `href` of the first `<link>` whose `rel` list contains `rel`.
    #[must_use]
    pub fn link_href(&self, rel: &str) -> Option<String> {
        self.tags("link")
            .filter(|tag| {
                tag.attr("rel")
                    .is_some_and(|v| v.split_whitespace().any(|r| r.eq_ignore_ascii_case(rel)))
            })
            .find_map(|tag| tag.attr("href"))
    }
}
