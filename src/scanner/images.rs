//! Image scanning.
//!
//! `<img>` tags are read in source order. The source URL is chosen by
//! priority: `srcset` (via [`crate::srcset`]), then `src`, `data-src`,
//! `data-original` and `data-lazy-src`. Page-level images declared by
//! `og:image`, `twitter:image` and `link rel=image_src` are appended and
//! marked as main images.

use crate::dom::{parse_dimension, Document, Tag};
use crate::result::ExtractedImage;
use crate::scanner::dedup_by_url;
use crate::srcset;
use crate::url_utils::{is_data_uri, BaseUrl};

/// Plain source attributes, after `srcset`.
const SOURCE_ATTRIBUTES: &[&str] = &["src", "data-src", "data-original", "data-lazy-src"];

/// Scans `<img>` tags in `region` and appends the page's meta images.
///
/// The result holds each URL once, in first-seen order.
#[must_use]
pub fn extract_images(
    region: &str,
    page: &Document<'_>,
    base: &BaseUrl,
    max_width: u32,
) -> Vec<ExtractedImage> {
    let mut images = scan_image_tags(region, base, max_width);
    images.extend(meta_images(page, base));
    dedup_by_url(images, |img| img.url.as_str())
}

/// Reads every `<img>` tag; tags without a usable URL are skipped.
#[must_use]
pub fn scan_image_tags(html: &str, base: &BaseUrl, max_width: u32) -> Vec<ExtractedImage> {
    Document::new(html)
        .tags("img")
        .filter_map(|tag| image_from_tag(&tag, base, max_width))
        .collect()
}

fn image_from_tag(tag: &Tag<'_>, base: &BaseUrl, max_width: u32) -> Option<ExtractedImage> {
    let from_srcset = tag
        .attr("srcset")
        .and_then(|set| srcset::best_candidate(&set, base, max_width));

    let (url, srcset_width) = match from_srcset {
        Some(candidate) => (candidate.url, candidate.width),
        None => {
            let raw = SOURCE_ATTRIBUTES.iter().find_map(|name| tag.attr(name))?;
            let url = if is_data_uri(&raw) { raw } else { base.resolve(&raw) };
            (url, None)
        }
    };

    if url.is_empty() {
        return None;
    }

    Some(ExtractedImage {
        url,
        alt: tag.attr("alt").unwrap_or_default(),
        caption: tag.attr("title").unwrap_or_default(),
        width: tag.attr("width").as_deref().and_then(parse_dimension).or(srcset_width),
        height: tag.attr("height").as_deref().and_then(parse_dimension),
        is_main_image: false,
    })
}

/// Images declared by page-level meta tags, at most one per source.
#[must_use]
pub fn meta_images(page: &Document<'_>, base: &BaseUrl) -> Vec<ExtractedImage> {
    let og = page
        .meta_content("og:image")
        .or_else(|| page.meta_content("og:image:url"))
        .map(|url| ExtractedImage {
            alt: page.meta_content("og:image:alt").unwrap_or_default(),
            width: page.meta_content("og:image:width").as_deref().and_then(parse_dimension),
            height: page.meta_content("og:image:height").as_deref().and_then(parse_dimension),
            ..main_image(base, &url)
        });

    let twitter = page
        .meta_content("twitter:image")
        .or_else(|| page.meta_content("twitter:image:src"))
        .map(|url| ExtractedImage {
            alt: page.meta_content("twitter:image:alt").unwrap_or_default(),
            ..main_image(base, &url)
        });

    let image_src = page.link_href("image_src").map(|url| main_image(base, &url));

    [og, twitter, image_src]
        .into_iter()
        .flatten()
        .filter(|img| !img.url.is_empty())
        .collect()
}

fn main_image(base: &BaseUrl, url: &str) -> ExtractedImage {
    ExtractedImage {
        url: base.resolve(url),
        is_main_image: true,
        ..ExtractedImage::default()
    }
}
