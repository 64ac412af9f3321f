//! Byte-to-text decoding for raw page bodies.
//!
//! A byte-order mark wins; otherwise the charset is sniffed from the
//! `<meta>` tags in the first 1024 bytes. UTF-8 is the default, and
//! malformed sequences become U+FFFD rather than errors.

use encoding_rs::{Encoding, UTF_8};

use crate::dom::Document;

/// Bytes inspected for a charset declaration.
pub const SNIFF_LIMIT: usize = 1024;

/// Charset declared by `<meta charset>` or an `http-equiv=Content-Type`
/// meta, whichever comes first in `head`.
#[must_use]
pub fn sniff_charset(head: &str) -> Option<String> {
    Document::new(head).tags("meta").find_map(|tag| {
        if let Some(charset) = tag.attr("charset") {
            return Some(charset);
        }

        let is_content_type = tag
            .attr("http-equiv")
            .is_some_and(|v| v.eq_ignore_ascii_case("content-type"));
        if !is_content_type {
            return None;
        }

        let content = tag.attr("content")?;
        content.split(';').find_map(|part| {
            let (key, value) = part.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("charset")
                .then(|| value.trim().trim_matches(['"', '\'']).to_string())
                .filter(|v| !v.is_empty())
        })
    })
}

/// Encoding of a raw page: BOM first, then declared charset, else UTF-8.
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(SNIFF_LIMIT)]);
    sniff_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decodes a raw page body to UTF-8 text.
///
/// # Examples
///
/// ```
/// use rs_article_extract::encoding::decode_html;
///
/// let bytes = b"<meta charset=\"windows-1252\"><p>Caf\xE9</p>";
/// assert!(decode_html(bytes).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(bytes: &[u8]) -> String {
    let encoding = detect_encoding(bytes);
    // BOM-aware decode; the BOM itself is stripped.
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::debug!(encoding = used.name(), "replaced malformed byte sequences");
    }
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_charset_is_sniffed() {
        assert_eq!(sniff_charset(r#"<meta charset="utf-8">"#).as_deref(), Some("utf-8"));
        assert_eq!(sniff_charset("<META CHARSET=ISO-8859-1>").as_deref(), Some("ISO-8859-1"));
    }

    #[test]
    fn content_type_charset_is_sniffed() {
        let head = r#"<meta http-equiv="Content-Type" content="text/html; charset=windows-1251">"#;
        assert_eq!(sniff_charset(head).as_deref(), Some("windows-1251"));
    }

    #[test]
    fn unrelated_meta_is_ignored() {
        assert_eq!(sniff_charset(r#"<meta name="description" content="a; charset=x">"#), None);
    }

    #[test]
    fn latin1_label_maps_to_windows_1252() {
        let bytes = br#"<meta charset="ISO-8859-1"><p>x</p>"#;
        assert_eq!(detect_encoding(bytes).name(), "windows-1252");
    }

    #[test]
    fn bom_overrides_declaration() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(br#"<meta charset="windows-1252"><p>Caf"#);
        bytes.extend_from_slice("é".as_bytes());
        assert_eq!(detect_encoding(&bytes), UTF_8);
        assert!(decode_html(&bytes).ends_with("Café"));
    }

    #[test]
    fn declaration_past_limit_is_ignored() {
        let mut bytes = vec![b' '; SNIFF_LIMIT];
        bytes.extend_from_slice(br#"<meta charset="windows-1252">"#);
        assert_eq!(detect_encoding(&bytes), UTF_8);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let text = decode_html(b"<p>Test \xFF\xFE ok</p>");
        assert!(text.contains('\u{FFFD}'));
        assert!(text.contains("ok"));
    }

    #[test]
    fn cyrillic_windows_1251() {
        let bytes = b"<meta charset=\"windows-1251\"><p>\xcf\xf0\xe8\xe2\xe5\xf2</p>";
        assert!(decode_html(bytes).contains("Привет"));
    }
}
