//! Audio scanning.
//!
//! Three sources, merged in this order and deduplicated by URL:
//! `<audio>` elements (their `src` and nested `<source>` tags), anchors
//! linking to audio files, and the page's `og:audio` /
//! `twitter:player:stream` meta tags.

use crate::dom::{inner_html_within, Document, Selector, Tag};
use crate::patterns::AUDIO_FILE;
use crate::result::{ExtractedAudio, DEFAULT_AUDIO_TITLE};
use crate::scanner::{dedup_by_url, MEDIA_SPAN_LIMIT};
use crate::text::reduce_to_text;
use crate::url_utils::BaseUrl;

/// Meta keys consulted for page-level audio.
const META_AUDIO_KEYS: &[&str] = &["og:audio", "og:audio:url", "og:audio:secure_url", "twitter:player:stream"];

/// Scans `region` for audio and appends the page's meta audio.
#[must_use]
pub fn extract_audios(region: &str, page: &Document<'_>, base: &BaseUrl) -> Vec<ExtractedAudio> {
    let mut audios = audio_elements(region, base);
    audios.extend(audio_links(region, base));
    audios.extend(meta_audio(page, base));
    dedup_by_url(audios, |a| a.url.as_str())
}

/// One entry per `src` on an `<audio>` element or its `<source>` children.
#[must_use]
pub fn audio_elements(html: &str, base: &BaseUrl) -> Vec<ExtractedAudio> {
    let mut audios = Vec::new();

    for tag in Document::new(html).tags("audio") {
        let title = tag
            .attr("title")
            .or_else(|| tag.attr("aria-label"))
            .unwrap_or_else(|| DEFAULT_AUDIO_TITLE.to_string());
        let duration = tag.attr("duration").or_else(|| tag.attr("data-duration"));

        let direct = tag.attr("src");
        let nested = Document::new(inner_html_within(html, &tag, MEDIA_SPAN_LIMIT))
            .tags("source")
            .filter_map(|source: Tag<'_>| source.attr("src"))
            .collect::<Vec<_>>();

        for src in direct.into_iter().chain(nested) {
            let url = base.resolve(&src);
            if url.is_empty() {
                continue;
            }
            audios.push(ExtractedAudio {
                url,
                title: title.clone(),
                duration: duration.clone(),
            });
        }
    }

    audios
}

/// Anchors whose `href` ends in a known audio extension.
#[must_use]
pub fn audio_links(html: &str, base: &BaseUrl) -> Vec<ExtractedAudio> {
    Document::new(html)
        .select(Selector::Tag("a"))
        .filter_map(|anchor| {
            let href = anchor.tag.attr("href")?;
            if !AUDIO_FILE.is_match(&href) {
                return None;
            }
            let text = reduce_to_text(anchor.inner());
            Some(ExtractedAudio {
                url: base.resolve(&href),
                title: if text.is_empty() { DEFAULT_AUDIO_TITLE.to_string() } else { text },
                duration: None,
            })
        })
        .collect()
}

/// Audio declared by page-level meta tags.
#[must_use]
pub fn meta_audio(page: &Document<'_>, base: &BaseUrl) -> Vec<ExtractedAudio> {
    META_AUDIO_KEYS
        .iter()
        .filter_map(|key| page.meta_content(*key))
        .map(|url| ExtractedAudio {
            url: base.resolve(&url),
            title: page
                .meta_content("og:audio:title")
                .unwrap_or_else(|| DEFAULT_AUDIO_TITLE.to_string()),
            duration: None,
        })
        .filter(|a| !a.url.is_empty())
        .collect()
}
