//! Tag scanners for images, videos, audio and links.
//!
//! Each scanner walks raw HTML (usually the isolated article region), pulls
//! attributes from the tags it cares about and resolves their URLs against
//! the base URL. Images and audio are deduplicated by URL; videos and links
//! are not.

pub mod audio;
pub mod images;
pub mod links;
pub mod videos;

use std::collections::HashSet;

pub use audio::extract_audios;
pub use images::extract_images;
pub use links::extract_links;
pub use videos::extract_videos;

/// Bytes searched for the close of an `<audio>` or `<video>` element
/// when looking for nested `<source>` tags.
pub(crate) const MEDIA_SPAN_LIMIT: usize = 16_384;

/// Keeps the first item for every key, preserving order.
pub(crate) fn dedup_by_url<T>(items: Vec<T>, url: impl Fn(&T) -> &str) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(url(item).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_seen_order() {
        let urls = vec!["b", "a", "b", "c", "a"];
        let deduped = dedup_by_url(urls, |u| *u);
        assert_eq!(deduped, vec!["b", "a", "c"]);
    }
}
