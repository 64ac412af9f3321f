//! Video scanning: YouTube and Vimeo iframes, and native `<video>` elements.
//!
//! Unlike images and audio, videos are not deduplicated.

use crate::dom::{inner_html_within, Document, Tag};
use crate::patterns::{YOUTUBE_EMBED_ID, YOUTUBE_SHORT_ID, YOUTUBE_WATCH_ID};
use crate::result::{ExtractedVideo, VideoPlatform};
use crate::scanner::MEDIA_SPAN_LIMIT;
use crate::url_utils::BaseUrl;

/// Scans iframes (in source order) followed by native video elements.
#[must_use]
pub fn extract_videos(html: &str, base: &BaseUrl) -> Vec<ExtractedVideo> {
    let doc = Document::new(html);

    let mut videos: Vec<ExtractedVideo> = doc
        .tags("iframe")
        .filter_map(|tag| video_from_iframe(&tag, base))
        .collect();

    videos.extend(
        doc.tags("video")
            .filter_map(|tag| video_from_element(html, &tag, base)),
    );

    videos
}

fn video_from_iframe(tag: &Tag<'_>, base: &BaseUrl) -> Option<ExtractedVideo> {
    let src = tag.attr("src").or_else(|| tag.attr("data-src"))?;
    let lower = src.to_ascii_lowercase();

    let platform = if lower.contains("youtube.com") || lower.contains("youtu.be") || lower.contains("youtube-nocookie.com") {
        VideoPlatform::Youtube
    } else if lower.contains("vimeo.com") {
        VideoPlatform::Vimeo
    } else {
        return None;
    };

    let thumbnail = match platform {
        VideoPlatform::Youtube => youtube_video_id(&src).map(|id| youtube_thumbnail(&id)),
        _ => None,
    };

    let title = tag.attr("title").unwrap_or_else(|| default_title(&platform));

    Some(ExtractedVideo {
        url: base.resolve(&src),
        title,
        thumbnail,
        duration: None,
        platform,
    })
}

/// Title used when a video carries none.
fn default_title(platform: &VideoPlatform) -> String {
    match platform {
        VideoPlatform::Youtube => "YouTube Video".to_string(),
        VideoPlatform::Vimeo => "Vimeo Video".to_string(),
        VideoPlatform::Direct => "Video".to_string(),
        VideoPlatform::Other(label) => format!("{label} Video"),
    }
}

fn video_from_element(html: &str, tag: &Tag<'_>, base: &BaseUrl) -> Option<ExtractedVideo> {
    let src = tag.attr("src").or_else(|| {
        Document::new(inner_html_within(html, tag, MEDIA_SPAN_LIMIT))
            .tags("source")
            .find_map(|source| source.attr("src"))
    })?;

    let url = base.resolve(&src);
    if url.is_empty() {
        return None;
    }

    Some(ExtractedVideo {
        url,
        title: tag
            .attr("title")
            .or_else(|| tag.attr("aria-label"))
            .unwrap_or_else(|| default_title(&VideoPlatform::Direct)),
        thumbnail: tag.attr("poster").map(|poster| base.resolve(&poster)),
        duration: tag.attr("duration").or_else(|| tag.attr("data-duration")),
        platform: VideoPlatform::Direct,
    })
}

/// Extracts a YouTube video ID from watch, short-link or embed URLs.
///
/// # Examples
///
/// ```
/// use rs_article_extract::scanner::videos::youtube_video_id;
///
/// assert_eq!(youtube_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(), Some("dQw4w9WgXcQ"));
/// assert_eq!(youtube_video_id("https://youtu.be/dQw4w9WgXcQ?t=10").as_deref(), Some("dQw4w9WgXcQ"));
/// assert_eq!(youtube_video_id("https://www.youtube.com/embed/abc123").as_deref(), Some("abc123"));
/// ```
#[must_use]
pub fn youtube_video_id(url: &str) -> Option<String> {
    [&*YOUTUBE_WATCH_ID, &*YOUTUBE_SHORT_ID, &*YOUTUBE_EMBED_ID]
        .iter()
        .find_map(|re| re.captures(url).and_then(|c| c.get(1)))
        .map(|m| m.as_str().to_string())
}

/// Thumbnail URL YouTube serves for a video ID.
#[must_use]
pub fn youtube_thumbnail(id: &str) -> String {
    format!("https://img.youtube.com/vi/{id}/hqdefault.jpg")
}
